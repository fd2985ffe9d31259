use chrono::{DateTime, Utc};

use crate::models::{DecoratedTask, ProgressClass, Task};

/// Percentage of `task` elapsed at `now`, floored to a whole number.
///
/// A zero-length task reads as finished once `now` reaches its start.
pub fn progress(task: &Task, now: DateTime<Utc>) -> u8 {
    let total = (task.end - task.start).num_milliseconds();
    let elapsed = (now - task.start).num_milliseconds();

    if elapsed < 0 {
        return 0;
    }
    if elapsed > total || total <= 0 {
        return 100;
    }
    // elapsed <= total here, so the quotient is at most 100.
    ((elapsed as i128 * 100) / total as i128) as u8
}

pub fn classify(progress: u8) -> ProgressClass {
    match progress {
        0..=25 => ProgressClass::Low,
        26..=50 => ProgressClass::Medium,
        51..=75 => ProgressClass::High,
        _ => ProgressClass::Complete,
    }
}

pub fn decorate(task: &Task, now: DateTime<Utc>) -> DecoratedTask {
    let progress = progress(task, now);
    DecoratedTask {
        task: task.clone(),
        progress,
        class: classify(progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use rstest::rstest;

    fn task(hours: i64) -> Task {
        let start = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        Task::new("t", "Task", start, start + Duration::hours(hours))
    }

    #[test]
    fn test_before_start_is_zero() {
        let t = task(10);
        assert_eq!(progress(&t, t.start - Duration::seconds(1)), 0);
    }

    #[test]
    fn test_after_end_is_complete() {
        let t = task(10);
        assert_eq!(progress(&t, t.end), 100);
        assert_eq!(progress(&t, t.end + Duration::days(3)), 100);
    }

    #[test]
    fn test_progress_is_floored() {
        let t = task(3);
        // one hour of three: 33.33..
        assert_eq!(progress(&t, t.start + Duration::hours(1)), 33);
        assert_eq!(progress(&t, t.start + Duration::hours(2)), 66);
    }

    #[test]
    fn test_zero_duration_task() {
        let t = task(0);
        assert_eq!(progress(&t, t.start - Duration::milliseconds(1)), 0);
        assert_eq!(progress(&t, t.start), 100);
    }

    #[rstest]
    #[case(0, ProgressClass::Low)]
    #[case(25, ProgressClass::Low)]
    #[case(26, ProgressClass::Medium)]
    #[case(50, ProgressClass::Medium)]
    #[case(51, ProgressClass::High)]
    #[case(75, ProgressClass::High)]
    #[case(76, ProgressClass::Complete)]
    #[case(100, ProgressClass::Complete)]
    fn test_classify_boundaries(#[case] value: u8, #[case] expected: ProgressClass) {
        assert_eq!(classify(value), expected);
    }

    #[test]
    fn test_decorate_attaches_progress_and_class() {
        let t = task(4);
        let decorated = decorate(&t, t.start + Duration::hours(3));
        assert_eq!(decorated.progress, 75);
        assert_eq!(decorated.class, ProgressClass::High);
        assert_eq!(decorated.task, t);
    }

    proptest! {
        #[test]
        fn prop_progress_is_monotonic(
            hours in 1i64..2000,
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
        ) {
            let t = task(hours);
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let p_early = progress(&t, t.start + Duration::minutes(early));
            let p_late = progress(&t, t.start + Duration::minutes(late));
            prop_assert!(p_early <= p_late);
            prop_assert!(p_late <= 100);
        }
    }
}
