//! Integration tests for `Date`, `Weekday`, and `Month`.

use bh_time::date::{days_in_month, is_leap_year};
use bh_time::{Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Consistency ──────────────────────────────────────────────────────────────

#[test]
fn consecutive_days_are_consistent() {
    // Walk every day of 1899..=2101 and check the fields advance correctly.
    let mut prev = date(1899, 12, 31);
    let end = date(2101, 12, 31);
    let mut d = prev + 1;
    while d <= end {
        assert_eq!(d - prev, 1);
        let (py, pm, pd) = (prev.year(), prev.month(), prev.day_of_month());
        let (y, m, dd) = (d.year(), d.month(), d.day_of_month());
        let same_month = y == py && m == pm && dd == pd + 1;
        let new_month = y == py && m.number() == pm.number() + 1 && dd == 1 && prev.is_end_of_month();
        let new_year = y == py + 1 && m == Month::January && dd == 1 && pm == Month::December;
        assert!(same_month || new_month || new_year, "{prev:?} -> {d:?}");
        assert_eq!(
            d.weekday().ordinal(),
            prev.weekday().ordinal() % 7 + 1,
            "weekday does not advance at {d:?}"
        );
        prev = d;
        d += 1;
    }
}

#[test]
fn weekday_anchors() {
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2022, 6, 19).weekday(), Weekday::Sunday);
    assert_eq!(date(2022, 7, 4).weekday(), Weekday::Monday);
    assert_eq!(date(9999, 12, 31).weekday(), Weekday::Friday);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(days_in_month(2024, Month::February), 29);
    assert_eq!(days_in_month(2100, Month::February), 28);
    assert_eq!(days_in_month(2023, Month::November), 30);
}

#[test]
fn aligned_week_boundaries() {
    for day in 1..=31u8 {
        let d = date(2023, 10, day);
        assert_eq!(d.aligned_week_of_month(), (day - 1) / 7 + 1);
    }
}

#[test]
fn nth_weekday_matches_aligned_week() {
    for month in 1..=12u8 {
        let m = Month::from_number(month).unwrap();
        for n in 1..=4u8 {
            let d = Date::nth_weekday(n, Weekday::Monday, 2025, m).unwrap();
            assert_eq!(d.weekday(), Weekday::Monday);
            assert_eq!(d.aligned_week_of_month(), n);
            assert_eq!(d.month(), m);
        }
    }
}

#[test]
fn parse_rejects_malformed_dates() {
    for bad in ["2022-02-30", "2023-02-29", "2022-13-01", "2022-00-10", "0000-01-01"] {
        assert!(bad.parse::<Date>().is_err(), "{bad} should be rejected");
    }
    assert_eq!("2024-02-29".parse::<Date>().unwrap(), date(2024, 2, 29));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_ymd_roundtrip(days in Date::MIN.days_since_epoch()..=Date::MAX.days_since_epoch()) {
        let d = Date::from_days_since_epoch(days).unwrap();
        let rebuilt = Date::from_ymd(d.year(), d.month().number(), d.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, d);
        prop_assert_eq!(format!("{:?}", d).len(), "Date(YYYY-MM-DD)".len());
    }

    #[test]
    fn prop_iso_text_roundtrip(days in Date::MIN.days_since_epoch()..=Date::MAX.days_since_epoch()) {
        let d = Date::from_days_since_epoch(days).unwrap();
        let text = format!("{:04}-{:02}-{:02}", d.year(), d.month().number(), d.day_of_month());
        prop_assert_eq!(text.parse::<Date>().unwrap(), d);
    }

    #[test]
    fn prop_last_weekday_is_in_final_week(year in 1i32..=9999, month in 1u8..=12, wd in 1u8..=7) {
        let m = Month::from_number(month).unwrap();
        let w = Weekday::from_ordinal(wd).unwrap();
        let last = Date::last_weekday(w, year, m).unwrap();
        prop_assert_eq!(last.weekday(), w);
        prop_assert_eq!(last.month(), m);
        prop_assert!(last.day_of_month() + 7 > days_in_month(year, m));
    }
}
