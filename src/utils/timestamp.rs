use chrono::{DateTime, Local, TimeZone};

pub fn format_upload_date(raw: &str) -> String {
    format_upload_date_in(raw, &Local)
}

/// RFC 3339 timestamps are shown in `tz`; anything unparseable is shown as received.
pub fn format_upload_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
