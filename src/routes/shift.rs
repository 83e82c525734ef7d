use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{ShiftRecord, ShiftTable, SubmitShiftInfo, SubmitShiftResponse, ViewState},
        Error,
    },
    session::{Session, ShiftDraft},
    AppState,
};

use super::middlewares::{auth_guard, SessionToken};

#[derive(OpenApi)]
#[openapi(paths(submit_shift_handler, list_shifts_handler))]
/// Defines the OpenAPI spec for shift endpoints
pub struct ShiftsApi;

/// Used to group shift endpoints together in the OpenAPI documentation
pub const SHIFT_API_GROUP: &str = "SHIFT";

/// Builds a router for all the shift routes
pub fn shift_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(submit_shift_handler))
        .route("/all", get(list_shifts_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))
}

// Submit shift handler function
#[utoipa::path(
    post,
    path = "/api/shift",
    tag = SHIFT_API_GROUP,
    request_body = SubmitShiftInfo,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Shift stored", body = SubmitShiftResponse),
        (status = 403, description = "Not a branch account"),
        (status = 422, description = "A required field was left empty"),
    )
)]
pub async fn submit_shift_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Json(body): Json<SubmitShiftInfo>,
) -> Result<impl IntoResponse, Error> {
    if session.role != "user" {
        return Err(Error::new(
            StatusCode::FORBIDDEN,
            "Only branch accounts can submit shifts",
        ));
    }

    let draft = ShiftDraft {
        staff_name: body.staff_name.trim().to_string(),
        staff_number: body.staff_number.trim().to_string(),
        mobile_phone: body.mobile_phone.trim().to_string(),
    };
    if draft.staff_name.is_empty() || draft.staff_number.is_empty() || draft.mobile_phone.is_empty()
    {
        // Keep what was typed so the form re-renders pre-filled.
        state.sessions.update_draft(&token, draft);
        return Err(Error::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please fill in all the fields.",
        ));
    }

    // The branch comes from the session, never from the request body.
    state
        .db
        .insert_shift(
            &body.date.to_string(),
            &session.username,
            &draft.staff_name,
            &draft.staff_number,
            &draft.mobile_phone,
            body.shift_timing.as_str(),
        )
        .await?;
    state.sessions.clear_draft(&token);

    let session = state
        .sessions
        .get(&token)
        .ok_or((StatusCode::UNAUTHORIZED, "Not logged in"))?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitShiftResponse {
            message: "Shift data submitted successfully!".to_string(),
            view: ViewState::for_session(&session),
        }),
    ))
}

// List shifts handler function
#[utoipa::path(
    get,
    path = "/api/shift/all",
    tag = SHIFT_API_GROUP,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Every stored shift, date then branch ascending", body = ShiftTable),
        (status = 403, description = "Not an admin account"),
    )
)]
pub async fn list_shifts_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<ShiftTable>, Error> {
    if session.role != "admin" {
        return Err(Error::new(StatusCode::FORBIDDEN, "Admin account required"));
    }

    // Always a fresh fetch; the board never caches a previous load.
    let shifts = state.db.list_shifts().await?;
    Ok(Json(ShiftTable {
        shifts: shifts.into_iter().map(ShiftRecord::from).collect(),
    }))
}
