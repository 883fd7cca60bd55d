//! Date text parsing helpers.
//!
//! Only the shape of the text is checked here. Whether the fields form a
//! real calendar date is decided by the date type that consumes them.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
///
/// # Errors
/// Returns [`Error::Parse`] if the text does not have three dash-separated
/// numeric fields with a four-digit year.
pub fn parse_iso_date(s: &str) -> Result<(i32, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
    };
    if y.len() != 4 || m.is_empty() || m.len() > 2 || d.is_empty() || d.len() > 2 {
        return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
    }
    let year = parse_field::<i32>(y, "year", s)?;
    let month = parse_field::<u8>(m, "month", s)?;
    let day = parse_field::<u8>(d, "day", s)?;
    Ok((year, month, day))
}

fn parse_field<T: std::str::FromStr>(field: &str, what: &str, whole: &str) -> Result<T> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(format!("invalid {what} {field:?} in {whole:?}")));
    }
    field
        .parse()
        .map_err(|_| Error::Parse(format!("invalid {what} {field:?} in {whole:?}")))
}
