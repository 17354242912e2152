use crate::model::{SyllabusItem, SyllabusStatus};

/// Percentage (0–100) of syllabus items at `level` whose status is
/// `Completed`.
///
/// The level match is exact and case-sensitive; `"grade 3"` does not match
/// `"Grade 3"`. A level with no items yields 0 — an empty level is a valid
/// state, not an error. The quotient is rounded half away from zero, so
/// 1 of 3 completed gives 33 and 2 of 4 gives exactly 50.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level_progress(items: &[SyllabusItem], level: &str) -> u8 {
    let mut matched = 0_u32;
    let mut completed = 0_u32;

    for item in items {
        if item.level() == level {
            matched += 1;
            if item.status() == SyllabusStatus::Completed {
                completed += 1;
            }
        }
    }

    if matched == 0 {
        return 0;
    }

    // completed <= matched, so the result is always in 0..=100.
    (f64::from(completed) / f64::from(matched) * 100.0).round() as u8
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
