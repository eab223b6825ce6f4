//! Partial time and date records.
//!
//! These are the structured forms used to prefill the admin editor's
//! publish-time inputs (hour, minute, period select, year, month select,
//! day). The colon/hyphen joined string forms live in
//! [`crate::util::time`] and have no record type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    /// Before noon.
    #[serde(rename = "AM")]
    Am,
    /// Noon and after.
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    /// Label as shown in the period select.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 12-hour time of day.
///
/// `hh` is zero-padded only when it was not shifted down from the
/// afternoon, so 09:00 is `"09"` but 13:00 is `"1"`. Midnight stays `"00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialTimeRecord {
    /// Hour.
    pub hh: String,
    /// Minute, always two digits.
    pub mm: String,
    /// AM or PM.
    pub pd: Period,
}

/// Calendar date.
///
/// The month is a bare 1-based number while the day is a zero-padded
/// string, matching what the editor's month select and day input expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDateRecord {
    /// Full year.
    pub yyyy: i32,
    /// Month, 1-12.
    pub mm: u32,
    /// Day of month, two digits.
    pub dd: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_time_record_serializes_period_label() {
        let record = PartialTimeRecord {
            hh: "1".to_string(),
            mm: "05".to_string(),
            pd: Period::Pm,
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"hh": "1", "mm": "05", "pd": "PM"})
        );
    }

    #[test]
    fn test_date_record_serializes_mixed_types() {
        let record = PartialDateRecord {
            yyyy: 2023,
            mm: 1,
            dd: "05".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"yyyy": 2023, "mm": 1, "dd": "05"})
        );
    }
}
