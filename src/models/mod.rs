pub mod auth;
pub mod catalog;
pub mod request;

pub use auth::{
    password_strength, AuthSession, LoginRequest, LoginResponse, RegisterRequest, User,
    UserEnvelope,
};
pub use catalog::{name_of, Catalog, CatalogItem};
pub use request::{
    LineItem, RecentRequest, RequestDraft, RequisitionPayload, SubmitResponse,
};
