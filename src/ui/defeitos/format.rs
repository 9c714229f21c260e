// SPDX-License-Identifier: MPL-2.0
//! Text formatting for the defect table.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Renders a `created_at` timestamp as `dd/mm/yyyy, HH:MM`.
///
/// Timestamps with an offset are shown in local time; naive ones are shown
/// as written. Absent values render as `-` and unparseable ones verbatim.
#[must_use]
pub fn created_at(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "-".to_string();
    };

    if let Ok(moment) = DateTime::parse_from_rfc3339(raw) {
        return moment.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return naive.format(DISPLAY_FORMAT).to_string();
    }

    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return midnight.format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}

/// `#12` style identifier.
#[must_use]
pub fn id(id: i64) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_renders_dash() {
        assert_eq!(created_at(None), "-");
        assert_eq!(created_at(Some("  ")), "-");
    }

    #[test]
    fn naive_timestamps_are_shown_as_written() {
        assert_eq!(created_at(Some("2024-05-03T14:07:00")), "03/05/2024, 14:07");
        assert_eq!(created_at(Some("2024-05-03T14:07:00.123456")), "03/05/2024, 14:07");
        assert_eq!(created_at(Some("2024-12-31 23:59:59")), "31/12/2024, 23:59");
        assert_eq!(created_at(Some("2024-01-02")), "02/01/2024, 00:00");
    }

    #[test]
    fn offset_timestamps_use_the_display_format() {
        let rendered = created_at(Some("2024-05-03T14:07:00Z"));
        // Local offset varies by machine; only the shape is stable.
        assert_eq!(rendered.len(), "03/05/2024, 14:07".len());
        assert_eq!(&rendered[2..3], "/");
        assert_eq!(&rendered[10..12], ", ");
    }

    #[test]
    fn garbage_is_shown_verbatim() {
        assert_eq!(created_at(Some("ontem")), "ontem");
    }

    #[test]
    fn id_is_prefixed() {
        assert_eq!(id(7), "#7");
    }
}
