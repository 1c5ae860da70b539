use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;

/// Parse a match date in the fixed `YYYY-MM-DD` layout.
///
/// The year must be exactly four digits; month and day may be unpadded.
pub(crate) fn parse_match_date(s: &str) -> Option<NaiveDate> {
    if !has_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

// chrono's %Y takes any digit count and a sign, and numeric fields skip
// leading whitespace, so only digits and dashes may reach the parser.
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 8
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..].iter().all(|b| b.is_ascii_digit() || *b == b'-')
}
