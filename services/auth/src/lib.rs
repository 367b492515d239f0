//! Authentication for the session studio
//!
//! Users register with an email and password, log in to receive a signed
//! bearer token, and present that token on owner-scoped requests. Tokens are
//! only invalidated by expiry; there is no revocation list.

pub mod error;
pub mod jwt;
pub mod models;
pub mod password;
pub mod repositories;
pub mod service;
pub mod validation;

pub use error::AuthError;
pub use jwt::{Claims, JwtConfig, JwtService};
pub use models::{AuthUser, LoginInput, NewUser, RegisterInput, User};
pub use repositories::{InMemoryUserRepository, PgUserRepository, UserRepository};
pub use service::AuthService;
