//! Authentication utilities

mod api_key;
mod jwt;
mod password;

pub use api_key::generate_api_key;
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
};
