//! Registration, login and token authentication

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    error::AuthError,
    jwt::JwtService,
    models::{AuthUser, LoginInput, NewUser, RegisterInput, User},
    password::{hash_password, verify_against_dummy, verify_password},
    repositories::UserRepository,
};

/// Auth service
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt_service: JwtService) -> Self {
        Self { users, jwt_service }
    }

    /// Register a new user
    ///
    /// Does not log the user in; callers authenticate separately.
    pub async fn register(&self, input: RegisterInput) -> Result<User, AuthError> {
        if self.users.find_by_email(input.email()).await?.is_some() {
            warn!("Registration rejected, email already in use");
            return Err(AuthError::Conflict);
        }

        let new_user = NewUser {
            email: input.email().to_string(),
            password_hash: hash_password(input.password())?,
        };

        // A concurrent registration can still win the race; the store's
        // unique constraint turns that into Conflict as well.
        let user = self.users.create(&new_user).await?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Verify credentials and issue a bearer token
    pub async fn login(&self, input: LoginInput) -> Result<String, AuthError> {
        let user = self
            .verify_credentials(input.email(), input.password())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.jwt_service.generate_token(&user)?;
        info!("User {} logged in", user.id);
        Ok(token)
    }

    /// Resolve a bearer token into the identity it was issued for
    pub fn authenticate(&self, token: &str) -> Result<AuthUser, AuthError> {
        self.jwt_service.validate_token(token).map_err(|e| {
            warn!("Rejected bearer token: {}", e);
            AuthError::Unauthorized
        })
    }

    /// Look up a user by email and check the password against its hash
    ///
    /// Returns `None` for an unknown email and for a wrong password alike.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            verify_against_dummy(password);
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
