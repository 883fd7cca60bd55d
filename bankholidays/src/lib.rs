//! # bankholidays
//!
//! Decide whether a calendar date is an observed United States bank holiday.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bh-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bankholidays = "0.1"
//! ```
//!
//! ```rust
//! use bankholidays::time::{Calendar, Date};
//!
//! let calendar = bankholidays::us_bank_calendar();
//!
//! // Christmas 2022 fell on a Sunday and was observed on Monday the 26th.
//! let observed: Date = "2022-12-26".parse()?;
//! assert!(calendar.is_holiday(observed));
//!
//! // Holidays falling on a Saturday are not moved to Friday.
//! let friday = Date::from_ymd(2021, 12, 24)?;
//! assert!(!calendar.is_holiday(friday));
//! # Ok::<(), bankholidays::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsing helpers.
pub use bh_core as core;

/// Date, holiday rule, and calendar types.
pub use bh_time as time;

pub use bh_core::{Error, Result};
pub use bh_time::{Calendar, Date, HolidayCalendar, UsHoliday};

/// Build the United States bank holiday calendar.
///
/// Shorthand for [`bh_time::UnitedStates::bank`].
pub fn us_bank_calendar() -> HolidayCalendar {
    bh_time::UnitedStates::bank()
}

/// Return `true` if `date` is an observed US bank holiday.
///
/// Builds the calendar on every call; keep a [`HolidayCalendar`] from
/// [`us_bank_calendar`] around when checking many dates.
pub fn is_us_bank_holiday(date: Date) -> bool {
    us_bank_calendar().is_holiday(date)
}
