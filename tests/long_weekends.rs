#![forbid(unsafe_code)]
use chrono::NaiveDate;
use weekendly::holidays::{derive_long_weekends, Holiday};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const PAST: (i32, u32, u32) = (2025, 1, 1);

#[test]
fn monday_holiday_spans_back_over_the_weekend() {
    let holidays = [Holiday::new("Republic Day", "2026-01-26")];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    let w = &windows[0];
    assert_eq!(w.start_date, day(2026, 1, 24));
    assert_eq!(w.end_date, day(2026, 1, 26));
    assert_eq!(w.duration_days, 3);
    assert_eq!(w.labels, ["Saturday", "Sunday", "Republic Day"]);
}

#[test]
fn friday_holiday_spans_forward_over_the_weekend() {
    let holidays = [Holiday::new("Independence Day", "2025-08-15")];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    let w = &windows[0];
    assert_eq!(w.start_date, day(2025, 8, 15));
    assert_eq!(w.end_date, day(2025, 8, 17));
    assert_eq!(w.duration_days, 3);
    assert_eq!(w.labels, ["Independence Day", "Saturday", "Sunday"]);
}

#[test]
fn thursday_holiday_makes_a_four_day_window() {
    let holidays = [Holiday::new("Christmas", "2025-12-25")];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    let w = &windows[0];
    assert_eq!(w.start_date, day(2025, 12, 25));
    assert_eq!(w.end_date, day(2025, 12, 28));
    assert_eq!(w.duration_days, 4);
    assert_eq!(w.labels, ["Christmas", "Friday", "Saturday", "Sunday"]);
}

#[test]
fn tuesday_holiday_makes_a_four_day_window_backwards() {
    let holidays = [Holiday::new("Bridge Day", "2025-12-30")];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    let w = &windows[0];
    assert_eq!(w.start_date, day(2025, 12, 27));
    assert_eq!(w.end_date, day(2025, 12, 30));
    assert_eq!(w.duration_days, 4);
    assert_eq!(w.labels, ["Saturday", "Sunday", "Monday", "Bridge Day"]);
}

#[test]
fn wednesday_holiday_yields_no_candidate() {
    let holidays = [Holiday::new("Midweek Day", "2025-12-31")];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));
    assert!(windows.is_empty());
}

#[test]
fn same_iso_date_keeps_only_the_last_holiday() {
    let holidays = [
        Holiday::new("First Name", "2026-01-26"),
        Holiday::new("Second Name", "2026-01-26"),
    ];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].name, "Second Name");
}

#[test]
fn windows_sharing_a_start_date_are_deduplicated_first_wins() {
    // Lundi férié puis mardi férié : les deux fenêtres partent du même samedi.
    let holidays = [
        Holiday::new("Republic Day", "2026-01-26"),
        Holiday::new("Extra Day", "2026-01-27"),
    ];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].name, "Republic Day");
    assert_eq!(windows[0].duration_days, 3);
}

#[test]
fn output_is_sorted_ascending_by_start_date() {
    let holidays = [
        Holiday::new("Christmas", "2025-12-25"),
        Holiday::new("Independence Day", "2025-08-15"),
        Holiday::new("Republic Day", "2026-01-26"),
    ];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 3);
    assert!(windows.windows(2).all(|p| p[0].start_date < p[1].start_date));
}

#[test]
fn windows_not_strictly_in_the_future_are_dropped() {
    let holidays = [Holiday::new("Republic Day", "2026-01-26")];
    // Référence posée le jour du début de fenêtre : exclue (futur strict).
    let windows = derive_long_weekends(&holidays, day(2026, 1, 24));
    assert!(windows.is_empty());

    let windows = derive_long_weekends(&holidays, day(2026, 1, 23));
    assert_eq!(windows.len(), 1);
}

#[test]
fn malformed_date_skips_the_record_not_the_batch() {
    let holidays = [
        Holiday::new("Broken", "not-a-date"),
        Holiday::new("Republic Day", "2026-01-26"),
    ];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].name, "Republic Day");
}

#[test]
fn timestamped_iso_dates_are_read_as_calendar_dates() {
    let holidays = [Holiday::new("Republic Day", "2026-01-26T00:00:00+05:30")];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start_date, day(2026, 1, 24));
}

#[test]
fn overlapping_but_distinct_windows_are_both_kept() {
    // Jeudi férié puis mardi suivant : fenêtres qui se chevauchent, non fusionnées.
    let holidays = [
        Holiday::new("Christmas", "2025-12-25"),
        Holiday::new("Bridge Day", "2025-12-30"),
    ];
    let windows = derive_long_weekends(&holidays, day(PAST.0, PAST.1, PAST.2));
    assert_eq!(windows.len(), 2);
}
