use parking_lot::RwLock;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Free-text shift-form fields kept across a rejected submission so the
/// form re-renders pre-filled; cleared once a submission succeeds.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ShiftDraft {
    pub staff_name: String,
    pub staff_number: String,
    pub mobile_phone: String,
}

/// Who is logged in behind one bearer token, and the role that decides
/// which view they get.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub role: String,
    pub draft: ShiftDraft,
}

/// In-process session table keyed by opaque bearer token. A session exists
/// from login until an explicit logout; there is no expiry and no
/// concurrent-session limit.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh token for a successful login and returns it together
    /// with a snapshot of the stored session.
    pub fn create(&self, username: &str, role: &str) -> (String, Session) {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let session = Session {
            username: username.to_string(),
            role: role.to_string(),
            draft: ShiftDraft::default(),
        };
        self.sessions
            .write()
            .insert(token.clone(), session.clone());
        (token, session)
    }

    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().get(token).cloned()
    }

    /// Logout. Removing the entry is what makes the token dead for every
    /// later request.
    pub fn remove(&self, token: &str) {
        self.sessions.write().remove(token);
    }

    pub fn update_draft(&self, token: &str, draft: ShiftDraft) {
        if let Some(session) = self.sessions.write().get_mut(token) {
            session.draft = draft;
        }
    }

    pub fn clear_draft(&self, token: &str) {
        self.update_draft(token, ShiftDraft::default());
    }
}
