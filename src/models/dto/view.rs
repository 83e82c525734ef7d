use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ShiftTiming;
use crate::session::{Session, ShiftDraft};

/// A render of the current interaction state. Every user action (login,
/// logout, shift submission) answers with one of these, so the client never
/// has to infer which of the three views to show.
#[derive(Debug, Serialize, ToSchema)]
pub struct ViewState {
    /// "login", "shift_form" or "shift_board"
    #[schema(example = "shift_form")]
    pub view: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Free-text fields to pre-fill the shift form with (branch accounts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<ShiftDraft>,
    /// The closed set of timing codes the shift form offers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_timings: Option<Vec<String>>,
}

impl ViewState {
    pub fn logged_out() -> Self {
        Self {
            view: "login".to_string(),
            username: None,
            role: None,
            draft: None,
            shift_timings: None,
        }
    }

    pub fn for_session(session: &Session) -> Self {
        if session.role == "admin" {
            Self {
                view: "shift_board".to_string(),
                username: Some(session.username.clone()),
                role: Some(session.role.clone()),
                draft: None,
                shift_timings: None,
            }
        } else {
            Self {
                view: "shift_form".to_string(),
                username: Some(session.username.clone()),
                role: Some(session.role.clone()),
                draft: Some(session.draft.clone()),
                shift_timings: Some(
                    ShiftTiming::ALL
                        .iter()
                        .map(|t| t.as_str().to_string())
                        .collect(),
                ),
            }
        }
    }
}
