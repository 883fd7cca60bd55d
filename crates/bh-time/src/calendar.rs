//! `Calendar` trait and the rule-based [`HolidayCalendar`].
//!
//! A calendar knows which dates are holidays, which are business days, and
//! can adjust dates according to a [`BusinessDayConvention`].

use bh_core::errors::Result;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::holiday::Holiday;

/// A bank holiday calendar.
///
/// Implementors only decide what a holiday is; weekends are handled by the
/// default methods. A weekend day is not a holiday unless a rule says so.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US (Bank)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is an observed holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        match date
            .add_days(1)
            .and_then(|next| self.adjust(next, BusinessDayConvention::Following))
        {
            Ok(next) => next.month() != date.month(),
            // Nothing follows the last supported date.
            Err(_) => true,
        }
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// # Errors
    /// Returns an error if the search for a business day leaves the
    /// supported date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while !self.is_business_day(d) {
                    d = d.add_days(1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while !self.is_business_day(d) {
                    d = d.add_days(-1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                let fwd = self.adjust(date, BusinessDayConvention::Following)?;
                let bwd = self.adjust(date, BusinessDayConvention::Preceding)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
            BusinessDayConvention::EndOfMonth => self.end_of_month(date),
        }
    }

    /// Advance `date` by `n` business days (backward when `n` is negative).
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = Date::range_inclusive(start, end)
            .skip(1)
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }

    /// Return every holiday in `[from, to]`, weekends included when a rule
    /// matches them.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<Date> {
        Date::range_inclusive(from, to)
            .filter(|&d| self.is_holiday(d))
            .collect()
    }
}

/// A calendar made of an ordered list of [`Holiday`] rules.
///
/// A date is a holiday when any rule matches it. The rule list is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Create a calendar from a name and its holiday rules.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// The holidays of this calendar, in construction order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Return the first holiday observed on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<&Holiday> {
        let found = self.holidays.iter().find(|h| h.matches(date));
        if let Some(h) = found {
            log::trace!("{}: {date:?} is {}", self.name, h.name);
        }
        found
    }

    /// Return every observed holiday date of `year` with the holiday it
    /// belongs to, in date order.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported range.
    pub fn holidays_in(&self, year: i32) -> Result<Vec<(Date, &Holiday)>> {
        let first = Date::from_ymd(year, 1, 1)?;
        let last = Date::from_ymd(year, 12, 31)?;
        Ok(Date::range_inclusive(first, last)
            .filter_map(|d| self.holiday_on(d).map(|h| (d, h)))
            .collect())
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.iter().any(|h| h.matches(date))
    }
}
