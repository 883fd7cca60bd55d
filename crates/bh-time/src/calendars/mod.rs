//! Concrete calendars.

/// United States bank holidays.
pub mod united_states;
