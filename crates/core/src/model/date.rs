use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors produced when constructing a `PracticeDate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("malformed practice date (expected YYYY-MM-DD): {0:?}")]
    Malformed(String),
}

//
// ─── PRACTICE DATE ────────────────────────────────────────────────────────────
//

/// A canonical calendar date, the unit of all streak and aggregation logic.
///
/// Practice history is keyed by calendar day, not by timestamp: two sessions
/// logged at 09:00 and 22:00 on the same day are the same practice day. The
/// canonical string form is `YYYY-MM-DD`; equality and ordering are by date
/// value, which for canonical strings coincides with lexical order.
///
/// Malformed strings are rejected at construction. Records arriving from the
/// backend with unparseable dates never reach the statistics layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PracticeDate(NaiveDate);

impl PracticeDate {
    /// Wraps an already-validated calendar date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses the canonical `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns `DateError::Malformed` if the string is not a valid
    /// `YYYY-MM-DD` calendar date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::Malformed(s.to_owned()))
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// Whole-day difference `self - other` (positive when `self` is later).
    #[must_use]
    pub fn days_since(&self, other: PracticeDate) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// The day immediately before this one.
    ///
    /// Saturates at the minimum representable date, which is never reached
    /// by real practice history.
    #[must_use]
    pub fn previous_day(&self) -> Self {
        Self(self.0.pred_opt().unwrap_or(NaiveDate::MIN))
    }
}

impl FromStr for PracticeDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PracticeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for PracticeDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_form() {
        let date = PracticeDate::parse("2024-03-09").unwrap();
        assert_eq!(date.to_string(), "2024-03-09");
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "not-a-date", "2024-13-01", "09/03/2024", "2024-02-30"] {
            let err = PracticeDate::parse(bad).unwrap_err();
            assert!(matches!(err, DateError::Malformed(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn ordering_matches_lexical_order_of_canonical_form() {
        let a = PracticeDate::parse("2024-01-31").unwrap();
        let b = PracticeDate::parse("2024-02-01").unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn days_since_counts_whole_days() {
        let a = PracticeDate::parse("2024-03-09").unwrap();
        let b = PracticeDate::parse("2024-03-05").unwrap();
        assert_eq!(a.days_since(b), 4);
        assert_eq!(b.days_since(a), -4);
        assert_eq!(a.days_since(a), 0);
    }

    #[test]
    fn previous_day_crosses_month_boundary() {
        let first = PracticeDate::parse("2024-03-01").unwrap();
        assert_eq!(first.previous_day().to_string(), "2024-02-29");
    }
}
