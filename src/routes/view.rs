use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::{models::dto::ViewState, AppState};

use super::middlewares::bearer_token;

#[derive(OpenApi)]
#[openapi(paths(current_view_handler))]
/// Defines the OpenAPI spec for the view endpoint
pub struct ViewApi;

/// Used to group view endpoints together in the OpenAPI documentation
pub const VIEW_API_GROUP: &str = "VIEW";

// Current view handler function. The token is optional here: no token, or a
// token that was logged out, simply renders the login view rather than an
// error, since "logged out" is a normal state of the page.
#[utoipa::path(
    get,
    path = "/api/view",
    tag = VIEW_API_GROUP,
    security(
        (),
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Render of the current interaction state", body = ViewState),
    )
)]
pub async fn current_view_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let view = bearer_token(&headers)
        .and_then(|token| state.sessions.get(token))
        .map(|session| ViewState::for_session(&session))
        .unwrap_or_else(ViewState::logged_out);
    Json(view)
}
