use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of work-shift schedules a branch can file. Deserializing
/// from the exact wire literal is the validation: anything outside this set
/// is rejected before a handler ever sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum ShiftTiming {
    #[serde(rename = "6-2")]
    SixToTwo,
    #[serde(rename = "8-5")]
    EightToFive,
    #[serde(rename = "10-6")]
    TenToSix,
    #[serde(rename = "2-10")]
    TwoToTen,
    #[serde(rename = "5-9(DAY/NIGHT)")]
    FiveToNineDayNight,
    #[serde(rename = "10-6(NIGHT)")]
    TenToSixNight,
}

impl ShiftTiming {
    pub const ALL: [ShiftTiming; 6] = [
        ShiftTiming::SixToTwo,
        ShiftTiming::EightToFive,
        ShiftTiming::TenToSix,
        ShiftTiming::TwoToTen,
        ShiftTiming::FiveToNineDayNight,
        ShiftTiming::TenToSixNight,
    ];

    /// The literal stored in the `shifts.shift_timing` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftTiming::SixToTwo => "6-2",
            ShiftTiming::EightToFive => "8-5",
            ShiftTiming::TenToSix => "10-6",
            ShiftTiming::TwoToTen => "2-10",
            ShiftTiming::FiveToNineDayNight => "5-9(DAY/NIGHT)",
            ShiftTiming::TenToSixNight => "10-6(NIGHT)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_literals_round_through_serde() {
        let timing: ShiftTiming = serde_json::from_str("\"5-9(DAY/NIGHT)\"").unwrap();
        assert_eq!(timing, ShiftTiming::FiveToNineDayNight);
        assert_eq!(
            serde_json::to_value(ShiftTiming::EightToFive).unwrap(),
            serde_json::json!("8-5")
        );
    }

    #[test]
    fn out_of_set_literal_is_rejected() {
        assert!(serde_json::from_str::<ShiftTiming>("\"9-5\"").is_err());
    }
}
