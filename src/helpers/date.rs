//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::html::escape_html;

/// Display format used for post dates, e.g. "January 1, 2024"
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Parse a raw front-matter date string
///
/// Offsets in RFC 3339 strings are kept as written rather than converted to
/// the local zone, so the same input always yields the same calendar day.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Format a raw date string for display
///
/// Unparseable input is returned unchanged.
///
/// # Examples
/// ```ignore
/// display_date("2024-01-01") // -> "January 1, 2024"
/// ```
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!("Unrecognized date {:?}, showing it verbatim", raw);
            raw.to_string()
        }
    }
}

/// Generate a <time> element carrying the raw string as its datetime
pub fn time_tag(raw: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        escape_html(raw),
        escape_html(&display_date(raw))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-01"), "January 1, 2024");
        assert_eq!(display_date("2023/05/30 08:00:00"), "May 30, 2023");
    }

    #[test]
    fn test_display_date_rfc3339_keeps_offset() {
        assert_eq!(display_date("2020-03-16T05:35:07.322Z"), "March 16, 2020");
        assert_eq!(display_date("2020-03-16T23:30:00-08:00"), "March 16, 2020");
    }

    #[test]
    fn test_unparseable_date_is_verbatim() {
        assert_eq!(display_date("sometime last spring"), "sometime last spring");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag("2024-01-15"),
            r#"<time datetime="2024-01-15">January 15, 2024</time>"#
        );
    }
}
