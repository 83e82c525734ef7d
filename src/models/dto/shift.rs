use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ViewState;
use crate::models::{Shift, ShiftTiming};

/// A shift submission from a branch account. Note the missing `branch`
/// field: the branch is always taken from the authenticated session, so a
/// client cannot file a shift under another branch.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitShiftInfo {
    #[schema(value_type = String, example = "2024-01-01")]
    pub date: NaiveDate,
    pub staff_name: String,
    pub staff_number: String,
    pub mobile_phone: String,
    pub shift_timing: ShiftTiming,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitShiftResponse {
    pub message: String,
    pub view: ViewState,
}

/// One row of the admin board, all 8 stored fields with the date
/// reformatted for display
#[derive(Debug, Serialize, ToSchema)]
pub struct ShiftRecord {
    pub id: i64,
    #[schema(example = "01-01-2024")]
    pub date: String,
    pub branch: String,
    pub staff_name: String,
    pub staff_number: String,
    pub mobile_phone: String,
    pub shift_timing: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShiftTable {
    pub shifts: Vec<ShiftRecord>,
}

impl From<Shift> for ShiftRecord {
    fn from(shift: Shift) -> Self {
        Self {
            id: shift.id,
            date: display_date(&shift.date),
            branch: shift.branch,
            staff_name: shift.staff_name,
            staff_number: shift.staff_number,
            mobile_phone: shift.mobile_phone,
            shift_timing: shift.shift_timing,
            timestamp: shift.timestamp.to_string(),
        }
    }
}

/// Reformats a stored ISO `YYYY-MM-DD` date as `DD-MM-YYYY` for the board.
/// A row whose stored date does not parse keeps the raw string.
fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}
