pub mod add_request;
pub mod dashboard_view;
pub mod login_view;
pub mod recent_requests;
pub mod register_view;
pub mod settings_view;
pub mod shared;

pub use add_request::AddRequestView;
pub use dashboard_view::DashboardView;
pub use login_view::LoginView;
pub use register_view::RegisterView;
pub use settings_view::SettingsView;
