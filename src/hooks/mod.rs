pub mod auth_context;
pub mod use_auth;
pub mod use_catalog;
pub mod use_recent_requests;
pub mod use_request_builder;

pub use auth_context::{use_auth_context, AuthProvider};
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_catalog::{use_catalog, UseCatalogHandle};
pub use use_recent_requests::{use_recent_requests, RecentRequestsState};
pub use use_request_builder::{
    use_request_builder, LineItemList, SubmitStage, UseRequestBuilderHandle,
};
