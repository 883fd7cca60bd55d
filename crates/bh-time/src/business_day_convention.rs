//! Business-day conventions.

/// How to move a date that is not a business day onto one.
///
/// Bank calendars roll forward by default, so [`Default`] is
/// [`BusinessDayConvention::Following`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given date.
    #[default]
    Following,
    /// Choose the first business day after the given date unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the date.
    ModifiedFollowing,
    /// Choose the first business day before the given date.
    Preceding,
    /// Choose the first business day before the given date unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the date.
    ModifiedPreceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
    /// Choose the nearest business day.  In case of a tie, use the following
    /// business day.
    Nearest,
    /// End of month: choose the last business day of the same month.
    EndOfMonth,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "End of Month",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rolls_forward() {
        assert_eq!(BusinessDayConvention::default(), BusinessDayConvention::Following);
    }

    #[test]
    fn display_names() {
        assert_eq!(BusinessDayConvention::ModifiedFollowing.to_string(), "Modified Following");
        assert_eq!(BusinessDayConvention::EndOfMonth.to_string(), "End of Month");
    }
}
