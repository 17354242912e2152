//! Derived statistics over practice history: streaks, daily aggregates, and
//! syllabus level progress.
//!
//! Everything in this module is a pure function over already-validated
//! domain values: no I/O, no shared state, no mutation of inputs. The only
//! ambient dependency — "today" for the streak walk — is passed in
//! explicitly (see [`crate::time::Clock`]).

pub mod aggregate;
pub mod progress;
pub mod streak;

pub use aggregate::{DailyAggregate, aggregate_by_day};
pub use progress::level_progress;
pub use streak::{current_streak, streak_from_dates};
