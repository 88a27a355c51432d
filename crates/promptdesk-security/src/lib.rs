//! # PromptDesk Security
//!
//! Password hashing and bearer token handling.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenCodec, TokenError, ACCESS_TOKEN_TTL};
pub use password::{PasswordError, PasswordService};
