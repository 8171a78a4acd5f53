use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One predicted overhead pass, as reported by the pass-time service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    /// Unix timestamp (seconds) at which the pass begins.
    pub risetime: i64,
    /// Visible duration in seconds.
    pub duration: u64,
}

impl PassRecord {
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }
}

/// Renders the pass line with the rise time always in UTC, independent of
/// the host time zone.
impl fmt::Display for PassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rise_time() {
            Some(at) => write!(
                f,
                "Next pass at {} for {} seconds!",
                at.format("%a %b %d %Y %H:%M:%S UTC"),
                self.duration
            ),
            None => write!(
                f,
                "Next pass at timestamp {} for {} seconds!",
                self.risetime, self.duration
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_record_display() {
        let pass = PassRecord {
            risetime: 1622574095,
            duration: 465,
        };

        assert_eq!(
            pass.to_string(),
            "Next pass at Tue Jun 01 2021 19:01:35 UTC for 465 seconds!"
        );
    }

    #[test]
    fn test_pass_record_out_of_range_timestamp() {
        let pass = PassRecord {
            risetime: i64::MAX,
            duration: 10,
        };

        assert!(pass.rise_time().is_none());
        assert_eq!(
            pass.to_string(),
            format!("Next pass at timestamp {} for 10 seconds!", i64::MAX)
        );
    }

    #[test]
    fn test_pass_record_deserializes_ignoring_extra_fields() {
        let pass: PassRecord =
            serde_json::from_str(r#"{"risetime": 1622574095, "duration": 465, "mag": -2.1}"#)
                .unwrap();
        assert_eq!(pass.risetime, 1622574095);
        assert_eq!(pass.duration, 465);
    }
}
