use crate::database::ShiftDatabase;
use crate::session::SessionStore;

pub struct AppState {
    pub db: ShiftDatabase,
    pub sessions: SessionStore,
}
