//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination and paths.

mod auth;
mod client_ip;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, API_KEY_HEADER};
pub use client_ip::ClientIp;
pub use pagination::{ventana, Pagination};
pub use path::{IdPath, TareaIdPath};
pub use validated::ValidatedJson;
