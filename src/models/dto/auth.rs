use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ViewState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginInfo {
    pub username: String,
    pub password: String,
}

/// Returned on a successful login: the bearer token for every later
/// request, plus the render the client should switch to immediately.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub view: ViewState,
}
