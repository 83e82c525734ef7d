use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{LoginInfo, LoginResponse, ViewState},
        hash_password, Error,
    },
    AppState,
};

use super::middlewares::{auth_guard, SessionToken};

#[derive(OpenApi)]
#[openapi(paths(login_handler, logout_handler))]
/// Defines the OpenAPI spec for auth endpoints
pub struct AuthApi;

/// Used to group auth endpoints together in the OpenAPI documentation
pub const AUTH_API_GROUP: &str = "AUTH";

/// Builds a router for all the auth routes
pub fn auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login_handler))
        .route(
            "/logout",
            post(logout_handler)
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard)),
        )
}

// Login handler function
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_API_GROUP,
    request_body = LoginInfo,
    responses(
        (status = 200, description = "Logged in, session created", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginInfo>,
) -> Result<impl IntoResponse, Error> {
    let digest = hash_password(&body.password);
    let user = state.db.find_user(&body.username, &digest).await?;
    // One generic message for unknown username and wrong password alike.
    let user = user.ok_or((StatusCode::UNAUTHORIZED, "Invalid username or password."))?;

    let (token, session) = state.sessions.create(&user.username, &user.role);
    Ok(Json(LoginResponse {
        token,
        view: ViewState::for_session(&session),
    }))
}

// Logout handler function
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_API_GROUP,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Session cleared, back to the login view", body = ViewState),
        (status = 401, description = "Not logged in"),
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> impl IntoResponse {
    state.sessions.remove(&token);
    Json(ViewState::logged_out())
}
