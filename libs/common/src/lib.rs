//! Common library for the session studio services
//!
//! This crate provides shared functionality used across the service crates,
//! namely PostgreSQL connectivity, schema migrations and the storage error
//! taxonomy.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, close_pool, health_check, init_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     println!("Database health check: {}", health_check(&pool).await);
//!     close_pool(&pool).await;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;

pub use error::{DatabaseError, DatabaseResult};
