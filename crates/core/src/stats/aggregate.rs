use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{PracticeDate, PracticeSession};

/// Per-calendar-day rollup of a user's practice sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    pub date: PracticeDate,
    pub total_minutes: u32,
    pub session_count: u32,
    /// Mean of the day's ratings. An unrated session enters the mean as a
    /// literal 0, matching the product's historical behavior; callers that
    /// want an unrated-excluded mean must compute it themselves. Unrounded.
    pub average_rating: f64,
}

/// Groups sessions by calendar day and totals minutes, counts, and mean
/// rating.
///
/// One output entry per distinct date in the input, sorted ascending by
/// date; days with no sessions are never interpolated. Empty input yields
/// an empty vector. The input is not mutated and the result depends only on
/// the input, so repeated calls are bit-identical.
#[must_use]
pub fn aggregate_by_day(sessions: &[PracticeSession]) -> Vec<DailyAggregate> {
    let mut by_day: BTreeMap<PracticeDate, DailyAggregate> = BTreeMap::new();

    for session in sessions {
        let rating = f64::from(session.rating().map_or(0, |r| r.value()));

        by_day
            .entry(session.date())
            .and_modify(|agg| {
                let prior = agg.session_count;
                agg.total_minutes += session.duration_minutes();
                agg.session_count += 1;
                agg.average_rating = (agg.average_rating * f64::from(prior) + rating)
                    / f64::from(agg.session_count);
            })
            .or_insert_with(|| DailyAggregate {
                date: session.date(),
                total_minutes: session.duration_minutes(),
                session_count: 1,
                average_rating: rating,
            });
    }

    by_day.into_values().collect()
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rating, SessionId, UserId};
    use uuid::Uuid;

    fn session(date: &str, minutes: u32, rating: u8) -> PracticeSession {
        PracticeSession::new(
            SessionId::generate(),
            UserId::new(Uuid::nil()),
            PracticeDate::parse(date).unwrap(),
            minutes,
            Rating::from_raw(rating).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_by_day(&[]).is_empty());
    }

    #[test]
    fn same_day_sessions_merge_into_one_entry() {
        let days = aggregate_by_day(&[
            session("2024-03-09", 30, 4),
            session("2024-03-09", 20, 5),
        ]);

        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.date.to_string(), "2024-03-09");
        assert_eq!(day.total_minutes, 50);
        assert_eq!(day.session_count, 2);
        assert!((day.average_rating - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn output_is_sorted_ascending_regardless_of_input_order() {
        let days = aggregate_by_day(&[
            session("2024-03-09", 10, 3),
            session("2024-03-07", 15, 3),
            session("2024-03-08", 20, 3),
        ]);

        let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, ["2024-03-07", "2024-03-08", "2024-03-09"]);
    }

    #[test]
    fn unrated_session_pulls_the_mean_toward_zero() {
        let days = aggregate_by_day(&[
            session("2024-03-09", 30, 4),
            session("2024-03-09", 30, 0),
        ]);

        assert_eq!(days.len(), 1);
        assert!((days[0].average_rating - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn incremental_mean_matches_plain_mean() {
        let ratings = [5_u8, 3, 4, 1, 2, 5, 4];
        let sessions: Vec<PracticeSession> = ratings
            .iter()
            .map(|&r| session("2024-03-09", 10, r))
            .collect();

        let days = aggregate_by_day(&sessions);
        let expected =
            ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64;

        assert_eq!(days.len(), 1);
        assert!((days[0].average_rating - expected).abs() < 1e-9);
    }

    #[test]
    fn distinct_dates_stay_distinct() {
        let days = aggregate_by_day(&[
            session("2024-03-08", 25, 4),
            session("2024-03-09", 40, 2),
        ]);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].total_minutes, 25);
        assert_eq!(days[1].total_minutes, 40);
        assert_eq!(days[0].session_count, 1);
        assert_eq!(days[1].session_count, 1);
    }

    #[test]
    fn rerunning_yields_identical_output() {
        let sessions = vec![
            session("2024-03-09", 30, 4),
            session("2024-03-08", 20, 0),
            session("2024-03-09", 10, 2),
        ];

        let first = aggregate_by_day(&sessions);
        let second = aggregate_by_day(&sessions);
        assert_eq!(first, second);
    }
}
