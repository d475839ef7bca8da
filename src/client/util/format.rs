use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Formats a timestamp in `tz` as `M/D/YYYY, h:mm:ss AM`.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Validates a voice message link.
///
/// Only absolute `http` and `https` URLs are accepted; the normalized URL is returned.
pub fn voice_link(raw: &str) -> Option<String> {
    let url = url::Url::parse(raw.trim()).ok()?;

    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_in_given_time_zone() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 4, 17, 5, 9).unwrap();

        assert_eq!(format_timestamp(&timestamp, &Utc), "3/4/2026, 5:05:09 PM");

        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(
            format_timestamp(&timestamp, &offset),
            "3/4/2026, 9:05:09 AM"
        );
    }

    #[test]
    fn accepts_http_links() {
        assert_eq!(
            voice_link("https://cdn.example.com/voice/1.ogg").as_deref(),
            Some("https://cdn.example.com/voice/1.ogg")
        );
    }

    #[test]
    fn rejects_script_and_relative_links() {
        assert_eq!(voice_link("javascript:alert(1)"), None);
        assert_eq!(voice_link("/voice/1.ogg"), None);
        assert_eq!(voice_link("not a url"), None);
    }

    #[test]
    fn normalizes_quotes_in_links() {
        let link = voice_link(r#"https://cdn.example.com/a"onmouseover="x.ogg"#).unwrap();

        assert!(!link.contains('"'));
    }
}
