//! `Date` type.
//!
//! Dates are stored as a day count relative to 1970-01-01 in the proleptic
//! Gregorian calendar.
//!
//! # Day number convention
//! * Day 0 is January 1, 1970 (a Thursday).
//! * The valid date range is 0001-01-01 to 9999-12-31.
//! * Conversions to and from year/month/day use the civil-date algorithms
//!   described at <https://howardhinnant.github.io/date_algorithms.html>.

use std::str::FromStr;

use bh_core::ensure;
use bh_core::errors::{Error, Result};
use bh_core::utilities::data_parsers::parse_iso_date;

use crate::month::Month;
use crate::weekday::Weekday;

/// An immutable calendar date.
///
/// Construction validates the fields, so every `Date` value is a real day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    /// Smallest supported year.
    pub const MIN_YEAR: i32 = 1;

    /// Largest supported year.
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from its day number (days since 1970-01-01).
    pub fn from_days_since_epoch(days: i32) -> Result<Self> {
        let d = Date(days);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "day number {days} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    ///
    /// Rejects days that do not exist, such as February 30.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        let Some(m) = Month::from_number(month) else {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        };
        let days_in = days_in_month(year, m);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the day number (days since 1970-01-01).
    pub fn days_since_epoch(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        civil_from_days(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        Month::ALL[usize::from(civil_from_days(self.0).1 - 1)]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan_first = days_from_civil(self.year(), 1, 1);
        (self.0 - jan_first + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Day 0 is a Thursday.
        Weekday::ALL[(self.0 + 3).rem_euclid(7) as usize]
    }

    /// Return the aligned week of the month (1–5).
    ///
    /// Days 1–7 are week 1, days 8–14 week 2, and so on, whatever weekday
    /// the month starts on.
    pub fn aligned_week_of_month(&self) -> u8 {
        (self.day_of_month() - 1) / 7 + 1
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let days = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self:?} + {n} overflows"))
        })?;
        Self::from_days_since_epoch(days)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = civil_from_days(self.0);
        let last = Month::ALL[usize::from(m - 1)].length(y);
        Date(days_from_civil(y, m, last))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Iterate over every date in `[from, to]`, in order.
    ///
    /// The iterator is empty when `from > to`.
    pub fn range_inclusive(from: Date, to: Date) -> impl DoubleEndedIterator<Item = Date> {
        (from.0..=to.0).map(Date)
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2023, Month::November)`
    /// returns Thanksgiving 2023 (2023-11-23).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the year is out of range, or if the
    /// month has fewer than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month.number(), 1)?;
        let skip = u32::from(weekday.days_since(first.weekday()));
        let day = 1 + skip + 7 * (u32::from(n) - 1);
        let days_in = u32::from(days_in_month(year, month));
        if day > days_in {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {month} {year}"
            )));
        }
        Ok(Date(first.0 + day as i32 - 1))
    }

    /// Return the last occurrence of `weekday` in `month` of `year`.
    ///
    /// Walks backward from the last day of the month, so a month with five
    /// occurrences yields the fifth.
    pub fn last_weekday(weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        let last = Date::from_ymd(year, month.number(), 1)?.end_of_month();
        let back = last.weekday().days_since(weekday);
        Ok(Date(last.0 - i32::from(back)))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range; use
    /// [`Date::add_days`] to handle that case.
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range.
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = civil_from_days(self.0);
        write!(f, "{d} {} {y}", self.month())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse ISO `YYYY-MM-DD` text.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Date::from_ymd(y, m, d)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

/// `chrono` counts 0001-01-01 as day 1; this is its count for 1970-01-01.
#[cfg(feature = "chrono")]
const CE_DAYS_AT_EPOCH: i32 = 719_163;

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_days_since_epoch(value.num_days_from_ce() - CE_DAYS_AT_EPOCH)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(value: Date) -> Result<Self> {
        chrono::NaiveDate::from_num_days_from_ce_opt(value.0 + CE_DAYS_AT_EPOCH)
            .ok_or_else(|| Error::Date(format!("{value:?} not representable by chrono")))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: Month) -> u8 {
    month.length(year)
}

/// Convert (year, month, day) to a day number relative to 1970-01-01.
///
/// Years are shifted to start in March so the leap day is the last day of
/// the shifted year.
fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let m = i32::from(month);
    let d = i32::from(day);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let month_part = if m > 2 { m - 3 } else { m + 9 };
    let day_of_year = (153 * month_part + 2) / 5 + d - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Decompose a day number into (year, month, day).
fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_part = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_part + 2) / 5 + 1;
    let month = if month_part < 10 { month_part + 3 } else { month_part - 9 };
    let year = year_of_era + era * 400 + i32::from(month <= 2);
    (year, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
