//! Daily quote selection
//!
//! The quote of the day is a deterministic function of the calendar
//! date: the number of days elapsed since [`DAILY_EPOCH`], wrapped
//! around the size of the curated list. No locking, no I/O; callable
//! concurrently without coordination.

use chrono::NaiveDate;

/// First day of service; day zero of the daily rotation.
pub const DAILY_EPOCH: (i32, u32, u32) = (2023, 6, 20);

/// Map a calendar date to a 1-based line number in the daily list
///
/// Dates `line_count` days apart map to the same line (wraparound).
/// Dates before the epoch are clamped to day zero.
///
/// # Panics
/// Panics if `line_count` is zero; line sources are non-empty by
/// construction.
pub fn daily_line_number(date: NaiveDate, line_count: usize) -> usize {
    assert!(line_count > 0, "daily line source cannot be empty");

    let (year, month, day) = DAILY_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day).expect("epoch is a valid date");
    let days = (date - epoch).num_days().max(0) as usize;

    (days % line_count) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_maps_to_first_line() {
        assert_eq!(daily_line_number(date(2023, 6, 20), 2195), 1);
    }

    #[test]
    fn test_consecutive_days_advance_by_one() {
        assert_eq!(daily_line_number(date(2023, 6, 21), 2195), 2);
        assert_eq!(daily_line_number(date(2023, 6, 22), 2195), 3);
    }

    #[test]
    fn test_same_date_is_deterministic() {
        let d = date(2024, 3, 9);
        assert_eq!(
            daily_line_number(d, 2195),
            daily_line_number(d, 2195),
        );
    }

    #[test]
    fn test_wraparound_after_line_count_days() {
        let d = date(2023, 7, 1);
        let wrapped = d + chrono::Days::new(2195);
        assert_eq!(
            daily_line_number(d, 2195),
            daily_line_number(wrapped, 2195),
        );
    }

    #[test]
    fn test_dates_before_epoch_clamp_to_day_zero() {
        assert_eq!(daily_line_number(date(2020, 1, 1), 2195), 1);
    }

    #[test]
    fn test_result_stays_in_range() {
        let mut d = date(2023, 6, 20);
        for _ in 0..10 {
            let number = daily_line_number(d, 7);
            assert!((1..=7).contains(&number));
            d = d + chrono::Days::new(1);
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_line_count_panics() {
        daily_line_number(date(2023, 6, 20), 0);
    }
}
