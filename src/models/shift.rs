use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One submitted shift row. Append-only: nothing in the exposed surface
/// updates or deletes a shift once stored. `branch` always equals the
/// username of the session that filed it.
#[derive(Debug, Deserialize, Serialize, Clone, FromRow)]
pub struct Shift {
    pub id: i64,
    pub date: String,
    pub branch: String,
    pub staff_name: String,
    pub staff_number: String,
    pub mobile_phone: String,
    pub shift_timing: String,
    pub timestamp: NaiveDateTime,
}
