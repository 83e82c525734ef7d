use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{models::Error, AppState};

/// The raw token the client presented, kept alongside the resolved session
/// so handlers that mutate session state (logout, draft updates) can
/// address the right entry.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Pulls the bearer token out of the `Authorization` header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the presented token to a live session and injects both as
/// request extensions. A missing, malformed or logged-out token is rejected
/// here, before any handler runs.
pub async fn auth_guard(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Error> {
    let token = bearer_token(req.headers())
        .map(str::to_string)
        .ok_or((StatusCode::UNAUTHORIZED, "Missing authentication token"))?;
    let session = state
        .sessions
        .get(&token)
        .ok_or((StatusCode::UNAUTHORIZED, "Not logged in"))?;

    req.extensions_mut().insert(session);
    req.extensions_mut().insert(SessionToken(token));
    Ok(next.run(req).await)
}
