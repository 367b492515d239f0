//! Authentication middleware for bearer token validation

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

/// Authentication middleware
///
/// Puts the verified [`auth::AuthUser`] into the request extensions for the
/// owner-scoped handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        warn!("Request to {} without a bearer token", req.uri().path());
        return Err(ApiError::Unauthorized);
    };

    let user = state.auth_service.authenticate(bearer.token())?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
