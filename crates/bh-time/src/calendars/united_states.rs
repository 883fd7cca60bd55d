//! United States bank holiday calendar.

use crate::calendar::HolidayCalendar;
use crate::holiday::{Holiday, HolidayRule};
use crate::month::Month;
use crate::weekday::Weekday;

/// The eleven observed US bank holidays.
///
/// Fixed-date holidays falling on a Sunday are also observed on the
/// following Monday. Fixed-date holidays falling on a Saturday are not
/// moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UsHoliday {
    /// New Year's Day (Jan 1; if Sun → Mon).
    NewYearsDay,
    /// Martin Luther King Jr. Day (3rd Mon in Jan).
    MartinLutherKingDay,
    /// Presidents' Day (3rd Mon in Feb).
    PresidentsDay,
    /// Memorial Day (last Mon in May).
    MemorialDay,
    /// Juneteenth (Jun 19; if Sun → Mon).
    Juneteenth,
    /// Independence Day (Jul 4; if Sun → Mon).
    IndependenceDay,
    /// Labor Day (1st Mon in Sep).
    LaborDay,
    /// Columbus Day (2nd Mon in Oct).
    ColumbusDay,
    /// Veterans Day (Nov 11; if Sun → Mon).
    VeteransDay,
    /// Thanksgiving Day (4th Thu in Nov).
    Thanksgiving,
    /// Christmas Day (Dec 25; if Sun → Mon).
    Christmas,
}

impl UsHoliday {
    /// Every US bank holiday, in calendar order.
    pub const ALL: [UsHoliday; 11] = [
        UsHoliday::NewYearsDay,
        UsHoliday::MartinLutherKingDay,
        UsHoliday::PresidentsDay,
        UsHoliday::MemorialDay,
        UsHoliday::Juneteenth,
        UsHoliday::IndependenceDay,
        UsHoliday::LaborDay,
        UsHoliday::ColumbusDay,
        UsHoliday::VeteransDay,
        UsHoliday::Thanksgiving,
        UsHoliday::Christmas,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            UsHoliday::NewYearsDay => "New Year's Day",
            UsHoliday::MartinLutherKingDay => "Martin Luther King Jr. Day",
            UsHoliday::PresidentsDay => "Presidents' Day",
            UsHoliday::MemorialDay => "Memorial Day",
            UsHoliday::Juneteenth => "Juneteenth",
            UsHoliday::IndependenceDay => "Independence Day",
            UsHoliday::LaborDay => "Labor Day",
            UsHoliday::ColumbusDay => "Columbus Day",
            UsHoliday::VeteransDay => "Veterans Day",
            UsHoliday::Thanksgiving => "Thanksgiving Day",
            UsHoliday::Christmas => "Christmas Day",
        }
    }

    /// The rule deciding which dates this holiday is observed on.
    pub fn rule(self) -> HolidayRule {
        use HolidayRule::{FixedDate, LastWeekday, NthWeekday};
        match self {
            UsHoliday::NewYearsDay => FixedDate {
                month: Month::January,
                day: 1,
            },
            UsHoliday::MartinLutherKingDay => NthWeekday {
                month: Month::January,
                weekday: Weekday::Monday,
                week: 3,
            },
            UsHoliday::PresidentsDay => NthWeekday {
                month: Month::February,
                weekday: Weekday::Monday,
                week: 3,
            },
            UsHoliday::MemorialDay => LastWeekday {
                month: Month::May,
                weekday: Weekday::Monday,
            },
            UsHoliday::Juneteenth => FixedDate {
                month: Month::June,
                day: 19,
            },
            UsHoliday::IndependenceDay => FixedDate {
                month: Month::July,
                day: 4,
            },
            UsHoliday::LaborDay => NthWeekday {
                month: Month::September,
                weekday: Weekday::Monday,
                week: 1,
            },
            UsHoliday::ColumbusDay => NthWeekday {
                month: Month::October,
                weekday: Weekday::Monday,
                week: 2,
            },
            UsHoliday::VeteransDay => FixedDate {
                month: Month::November,
                day: 11,
            },
            UsHoliday::Thanksgiving => NthWeekday {
                month: Month::November,
                weekday: Weekday::Thursday,
                week: 4,
            },
            UsHoliday::Christmas => FixedDate {
                month: Month::December,
                day: 25,
            },
        }
    }

    /// Look a holiday up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == name)
    }
}

impl From<UsHoliday> for Holiday {
    fn from(value: UsHoliday) -> Self {
        Holiday::new(value.name(), value.rule())
    }
}

impl std::fmt::Display for UsHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Factory for United States calendars.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl UnitedStates {
    /// Name of the calendar returned by [`UnitedStates::bank`].
    pub const BANK_NAME: &'static str = "US (Bank)";

    /// Build the US bank holiday calendar with all eleven holidays.
    pub fn bank() -> HolidayCalendar {
        log::debug!(
            "building {} calendar with {} holiday rules",
            Self::BANK_NAME,
            UsHoliday::ALL.len()
        );
        HolidayCalendar::new(Self::BANK_NAME, UsHoliday::ALL.map(Holiday::from))
    }
}
