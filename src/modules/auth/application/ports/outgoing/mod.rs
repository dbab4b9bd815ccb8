pub mod admin_query;
pub mod admin_repository;
pub mod password_hasher;
pub mod token_provider;

pub use admin_query::{AdminQuery, AdminQueryError};
pub use admin_repository::{AdminRepository, AdminRepositoryError, NewAdmin};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
