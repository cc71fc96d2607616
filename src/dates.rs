use chrono::{DateTime, Local, NaiveDateTime};

use crate::error::AppError;

/// Wire format the appointments API stores.
pub const SUBMISSION_FORMAT: &str = "%d/%m/%Y %H:%M";
/// pt-BR long form used in the listing.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

const LOCAL_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const STORED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    SUBMISSION_FORMAT,
];

/// Turns a local date-time input (`2024-01-02T09:05`) into `02/01/2024 09:05`.
pub fn format_for_submission(input: &str) -> Result<String, AppError> {
    let parsed = parse_with(input.trim(), LOCAL_INPUT_FORMATS)
        .ok_or_else(|| AppError::Validation(format!("Data e Hora inválida: {}", input)))?;
    Ok(parsed.format(SUBMISSION_FORMAT).to_string())
}

/// Renders a stored date for the listing. Text that is not a recognizable
/// date is shown as stored.
pub fn format_for_display(stored: &str) -> String {
    match parse_stored(stored) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => stored.to_string(),
    }
}

fn parse_stored(stored: &str) -> Option<NaiveDateTime> {
    let stored = stored.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(stored) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    parse_with(stored, STORED_FORMATS)
}

fn parse_with(value: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_is_zero_padded() {
        assert_eq!(format_for_submission("2024-01-02T09:05").unwrap(), "02/01/2024 09:05");
        assert_eq!(format_for_submission("2024-12-31T23:59").unwrap(), "31/12/2024 23:59");
    }

    #[test]
    fn submission_drops_seconds() {
        assert_eq!(format_for_submission("2024-03-04T00:07:45").unwrap(), "04/03/2024 00:07");
    }

    #[test]
    fn submission_rejects_garbage() {
        assert!(matches!(format_for_submission(""), Err(AppError::Validation(_))));
        assert!(matches!(format_for_submission("02/01/2024"), Err(AppError::Validation(_))));
        assert!(matches!(format_for_submission("2024-02-30T10:00"), Err(AppError::Validation(_))));
    }

    #[test]
    fn display_reads_iso_local() {
        assert_eq!(format_for_display("2024-01-02T09:05"), "02/01/2024, 09:05:00");
        assert_eq!(format_for_display("2024-01-02 09:05:30"), "02/01/2024, 09:05:30");
    }

    #[test]
    fn display_reads_submission_format() {
        assert_eq!(format_for_display("02/01/2024 09:05"), "02/01/2024, 09:05:00");
    }

    #[test]
    fn display_keeps_unknown_text() {
        assert_eq!(format_for_display("amanhã cedo"), "amanhã cedo");
    }
}
