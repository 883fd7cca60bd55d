//! Holiday rules.
//!
//! A [`HolidayRule`] is a pure predicate over dates. Rules come in three
//! shapes: a fixed month/day observed on the following Monday when it falls
//! on a Sunday, the *n*-th weekday of a month, and the last weekday of a
//! month.

use bh_core::errors::Result;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// How a holiday's date is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// A fixed month/day.
    ///
    /// When the day falls on a Sunday the following Monday is observed as
    /// well. A Saturday occurrence is *not* moved to Friday.
    FixedDate {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The `week`-th aligned week of `month` on `weekday`, e.g. the third
    /// Monday of January.
    NthWeekday {
        /// Month of the holiday.
        month: Month,
        /// Weekday the holiday falls on.
        weekday: Weekday,
        /// Aligned week of month (1 = days 1–7, 2 = days 8–14, …).
        week: u8,
    },
    /// The last `weekday` of `month`, e.g. the last Monday of May.
    LastWeekday {
        /// Month of the holiday.
        month: Month,
        /// Weekday the holiday falls on.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// Return `true` if `date` is an observed occurrence of this holiday.
    pub fn matches(&self, date: Date) -> bool {
        match *self {
            HolidayRule::FixedDate { month, day } => {
                if date.month() != month {
                    return false;
                }
                let d = date.day_of_month();
                // The Monday after is only ever the day after a Sunday.
                d == day
                    || (date.weekday() == Weekday::Monday
                        && u16::from(d) == u16::from(day) + 1)
            }
            HolidayRule::NthWeekday { month, weekday, week } => {
                date.month() == month
                    && date.weekday() == weekday
                    && date.aligned_week_of_month() == week
            }
            HolidayRule::LastWeekday { month, weekday } => {
                date.month() == month
                    && Date::last_weekday(weekday, date.year(), month)
                        .is_ok_and(|last| last == date)
            }
        }
    }

    /// Return the unshifted date of the holiday in `year`.
    ///
    /// For [`HolidayRule::FixedDate`] this is the fixed month/day even when
    /// it falls on a weekend.
    ///
    /// # Errors
    /// Returns an error if the year is out of range or the rule names a day
    /// that does not exist in that year (e.g. the fifth Monday of a month
    /// that has only four).
    pub fn nominal_date(&self, year: i32) -> Result<Date> {
        match *self {
            HolidayRule::FixedDate { month, day } => Date::from_ymd(year, month.number(), day),
            HolidayRule::NthWeekday { month, weekday, week } => {
                Date::nth_weekday(week, weekday, year, month)
            }
            HolidayRule::LastWeekday { month, weekday } => {
                Date::last_weekday(weekday, year, month)
            }
        }
    }
}

/// A named holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// Human-readable name (e.g. `"Independence Day"`).
    pub name: &'static str,
    /// Rule deciding which dates the holiday is observed on.
    pub rule: HolidayRule,
}

impl Holiday {
    /// Create a holiday from a name and rule.
    pub const fn new(name: &'static str, rule: HolidayRule) -> Self {
        Self { name, rule }
    }

    /// Return `true` if `date` is an observed occurrence of this holiday.
    #[inline]
    pub fn matches(&self, date: Date) -> bool {
        self.rule.matches(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    const JULY_4: HolidayRule = HolidayRule::FixedDate {
        month: Month::July,
        day: 4,
    };

    #[test]
    fn fixed_date_on_weekday() {
        // 2022-07-04 is a Monday
        assert!(JULY_4.matches(date(2022, 7, 4)));
        assert!(!JULY_4.matches(date(2022, 7, 5)));
        assert!(!JULY_4.matches(date(2022, 7, 3)));
    }

    #[test]
    fn fixed_date_sunday_moves_to_monday() {
        // 2021-07-04 is a Sunday
        assert!(JULY_4.matches(date(2021, 7, 4)));
        assert!(JULY_4.matches(date(2021, 7, 5)));
    }

    #[test]
    fn fixed_date_saturday_is_not_moved_to_friday() {
        // 2020-07-04 is a Saturday
        assert!(JULY_4.matches(date(2020, 7, 4)));
        assert!(!JULY_4.matches(date(2020, 7, 3)));
        assert!(!JULY_4.matches(date(2020, 7, 6)));
    }

    #[test]
    fn fixed_date_other_month() {
        assert!(!JULY_4.matches(date(2022, 6, 4)));
        assert!(!JULY_4.matches(date(2022, 8, 4)));
    }

    #[test]
    fn fixed_date_end_of_month() {
        let rule = HolidayRule::FixedDate {
            month: Month::December,
            day: 31,
        };
        assert!(rule.matches(date(2023, 12, 31)));
        // The Monday after Dec 31, 2023 is in January and does not match
        assert!(!rule.matches(date(2024, 1, 1)));
    }

    #[test]
    fn nth_weekday_uses_aligned_week() {
        let columbus = HolidayRule::NthWeekday {
            month: Month::October,
            weekday: Weekday::Monday,
            week: 2,
        };
        assert!(columbus.matches(date(2022, 10, 10)));
        assert!(columbus.matches(date(2025, 10, 13)));
        assert!(!columbus.matches(date(2025, 10, 12)));
        assert!(!columbus.matches(date(2025, 10, 6)));
        assert!(!columbus.matches(date(2025, 10, 20)));
    }

    #[test]
    fn last_weekday_with_five_occurrences() {
        let memorial = HolidayRule::LastWeekday {
            month: Month::May,
            weekday: Weekday::Monday,
        };
        // May 2021 Mondays: 3, 10, 17, 24, 31
        assert!(memorial.matches(date(2021, 5, 31)));
        assert!(!memorial.matches(date(2021, 5, 24)));
        assert!(memorial.matches(date(2022, 5, 30)));
        assert!(!memorial.matches(date(2022, 6, 6)));
    }

    #[test]
    fn nominal_dates() {
        assert_eq!(JULY_4.nominal_date(2021).unwrap(), date(2021, 7, 4));
        let thanksgiving = HolidayRule::NthWeekday {
            month: Month::November,
            weekday: Weekday::Thursday,
            week: 4,
        };
        assert_eq!(thanksgiving.nominal_date(2022).unwrap(), date(2022, 11, 24));
        let memorial = HolidayRule::LastWeekday {
            month: Month::May,
            weekday: Weekday::Monday,
        };
        assert_eq!(memorial.nominal_date(2027).unwrap(), date(2027, 5, 31));
        assert!(JULY_4.nominal_date(0).is_err());
    }

    #[test]
    fn holiday_delegates_to_rule() {
        let h = Holiday::new("Independence Day", JULY_4);
        assert_eq!(h.name, "Independence Day");
        assert!(h.matches(date(2021, 7, 5)));
    }
}
