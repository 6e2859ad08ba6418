pub mod api_client;
pub mod auth_service;
pub mod catalog_service;
pub mod error;
pub mod request_service;

pub use api_client::ApiClient;
pub use error::ApiError;
