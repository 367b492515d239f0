//! API service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use sessions::{PublishInput, parse_session_id};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use auth::{AuthUser, LoginInput, RegisterInput};

use crate::{
    error::ApiError,
    middleware::auth_middleware,
    models::{
        CredentialsRequest, MessageResponse, PublishRequest, SaveDraftRequest, SessionEnvelope,
        TokenResponse, optional_id,
    },
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let owner_routes = Router::new()
        .route("/sessions/my-sessions", get(list_my_sessions))
        .route("/sessions/my-sessions/save-draft", post(save_draft))
        .route("/sessions/my-sessions/publish", post(publish_session))
        .route("/sessions/my-sessions/:id", get(get_my_session))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/sessions", get(list_published))
        .merge(owner_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Attach the CORS policy used by browser clients
pub fn with_cors(router: Router, allow_any_origin: bool) -> Router {
    if allow_any_origin {
        router.layer(CorsLayer::permissive())
    } else {
        router.layer(CorsLayer::new())
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.session_repository.health_check().await;
    let (status, label) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": "session-studio",
            "database": database,
        })),
    )
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CredentialsRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let input = RegisterInput::new(&payload.email, &payload.password)?;
    state.auth_service.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CredentialsRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let input = LoginInput::new(&payload.email, &payload.password)?;
    let token = state.auth_service.login(input).await?;

    Ok(Json(TokenResponse { token }))
}

/// Published sessions, visible to anyone
pub async fn list_published(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sessions = state.listing_service.list_published().await?;
    Ok(Json(sessions))
}

/// The caller's own sessions, drafts included
pub async fn list_my_sessions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let sessions = state.lifecycle_service.list_owned(user.id).await?;
    Ok(Json(sessions))
}

/// One of the caller's sessions
pub async fn get_my_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state.lifecycle_service.get_owned(user.id, id).await?;
    Ok(Json(session))
}

/// Create or overwrite a draft
pub async fn save_draft(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    WithRejection(Json(payload), _): WithRejection<Json<SaveDraftRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let session = state.lifecycle_service.save_draft(user.id, input).await?;

    Ok(Json(SessionEnvelope {
        message: "Session saved as draft".to_string(),
        session,
    }))
}

/// Publish one of the caller's sessions
pub async fn publish_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    WithRejection(Json(payload), _): WithRejection<Json<PublishRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let input = PublishInput::new(optional_id(payload.id.as_deref())?)?;
    let session = state.lifecycle_service.publish(user.id, input).await?;
    info!("User {} published session {}", user.id, session.id);

    Ok(Json(SessionEnvelope {
        message: "Session published successfully".to_string(),
        session,
    }))
}
