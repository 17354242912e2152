use crate::model::{PracticeDate, PracticeSession};

/// Counts the current consecutive-day practice streak ending at `today`.
///
/// The walk starts at `today` and accepts each next-most-recent distinct
/// practice day that is 0 or 1 days behind the cursor, moving the cursor to
/// the accepted day. The first gap of two or more days (or a date after the
/// cursor) ends the streak. A streak may therefore begin at yesterday: one
/// missed day so far today does not break it.
///
/// Duplicate dates (several sessions on one day) count once. Empty history
/// yields 0, as does a most-recent session more than one day in the past.
#[must_use]
pub fn current_streak(sessions: &[PracticeSession], today: PracticeDate) -> u32 {
    streak_from_dates(sessions.iter().map(PracticeSession::date), today)
}

/// Date-level form of [`current_streak`], for callers that already hold
/// bare practice days.
#[must_use]
pub fn streak_from_dates(
    dates: impl IntoIterator<Item = PracticeDate>,
    today: PracticeDate,
) -> u32 {
    let mut distinct: Vec<PracticeDate> = dates.into_iter().collect();
    if distinct.is_empty() {
        return 0;
    }
    distinct.sort_unstable();
    distinct.dedup();

    let mut streak = 0;
    let mut cursor = today;

    // Most recent first; the first candidate is compared against today.
    for date in distinct.into_iter().rev() {
        match cursor.days_since(date) {
            0 | 1 => {
                streak += 1;
                cursor = date;
            }
            _ => break,
        }
    }

    streak
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> PracticeDate {
        PracticeDate::parse(s).unwrap()
    }

    fn streak(dates: &[&str], today: &str) -> u32 {
        streak_from_dates(dates.iter().map(|s| day(s)), day(today))
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(streak(&[], "2024-03-09"), 0);
    }

    #[test]
    fn single_session_today_is_streak_of_one() {
        assert_eq!(streak(&["2024-03-09"], "2024-03-09"), 1);
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        assert_eq!(
            streak(&["2024-03-07", "2024-03-08", "2024-03-09"], "2024-03-09"),
            3
        );
    }

    #[test]
    fn streak_may_start_at_yesterday() {
        assert_eq!(
            streak(&["2024-03-06", "2024-03-07", "2024-03-08"], "2024-03-09"),
            3
        );
    }

    #[test]
    fn gap_of_two_days_ends_the_streak() {
        // today and yesterday count; 03-06 sits behind a gap.
        assert_eq!(
            streak(&["2024-03-09", "2024-03-08", "2024-03-06"], "2024-03-09"),
            2
        );
    }

    #[test]
    fn duplicate_days_count_once() {
        assert_eq!(
            streak(&["2024-03-09", "2024-03-09", "2024-03-08"], "2024-03-09"),
            2
        );
    }

    #[test]
    fn stale_history_has_no_streak() {
        assert_eq!(streak(&["2024-03-01", "2024-03-02"], "2024-03-09"), 0);
    }

    #[test]
    fn most_recent_two_days_ago_has_no_streak() {
        assert_eq!(streak(&["2024-03-07"], "2024-03-09"), 0);
    }

    #[test]
    fn input_order_is_irrelevant() {
        assert_eq!(
            streak(&["2024-03-07", "2024-03-09", "2024-03-08"], "2024-03-09"),
            3
        );
    }

    #[test]
    fn future_date_ends_the_walk_immediately() {
        // A date after the cursor yields a negative difference and stops.
        assert_eq!(streak(&["2024-03-10"], "2024-03-09"), 0);
    }

    #[test]
    fn long_unbroken_run_counts_every_day() {
        let dates: Vec<String> = (1..=9).map(|d| format!("2024-03-{d:02}")).collect();
        let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
        assert_eq!(streak(&refs, "2024-03-09"), 9);
    }
}
