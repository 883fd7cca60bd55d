//! # bh-time
//!
//! Date, weekday, month, holiday-rule and calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the rule-based holiday calendar.
pub mod calendar;

/// Concrete calendar implementations (country specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `HolidayRule` and `Holiday`.
pub mod holiday;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, HolidayCalendar};
pub use calendars::united_states::{UnitedStates, UsHoliday};
pub use date::Date;
pub use holiday::{Holiday, HolidayRule};
pub use month::Month;
pub use weekday::Weekday;
