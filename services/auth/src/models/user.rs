//! User model and validated credential inputs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    error::AuthError,
    validation::{normalize_email, validate_email, validate_password},
};

/// User entity
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New user creation payload; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Identity carried by a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// Registration request, validated at construction
#[derive(Debug, Clone)]
pub struct RegisterInput {
    email: String,
    password: String,
}

impl RegisterInput {
    pub fn new(email: &str, password: &str) -> Result<Self, AuthError> {
        let email = normalize_email(email);
        validate_email(&email).map_err(AuthError::Validation)?;
        validate_password(password).map_err(AuthError::Validation)?;

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Login request
///
/// Any shape problem is reported as `InvalidCredentials` so a caller cannot
/// probe which part of the pair was wrong.
#[derive(Debug, Clone)]
pub struct LoginInput {
    email: String,
    password: String,
}

impl LoginInput {
    pub fn new(email: &str, password: &str) -> Result<Self, AuthError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
