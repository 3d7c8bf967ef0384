//! Session storage module.
//!
//! Provides Redis-backed storage for refresh tokens (authentication sessions).

mod refresh_token;

pub use refresh_token::{RefreshTokenData, RefreshTokenStore};
