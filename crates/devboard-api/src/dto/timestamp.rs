//! Lenient parsing of the date strings clients send.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use devboard_core::error::AppError;

/// Parse an expiry timestamp.
///
/// Accepts RFC 3339 (`2025-01-31T10:00:00Z`, with any offset), a naive
/// datetime (`2025-01-31T10:00:00`, read as UTC) or a bare date
/// (`2025-01-31`, midnight UTC).
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(invalid(field, value))
}

/// Parse a calendar date, also accepting a full timestamp and keeping its
/// date part.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| parse_timestamp(field, trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| invalid(field, value))
}

fn invalid(field: &str, value: &str) -> AppError {
    let mut details = serde_json::Map::new();
    details.insert(
        field.to_string(),
        serde_json::json!([format!("Invalid date: '{value}'")]),
    );
    AppError::validation(format!("{field} must be an ISO 8601 date"))
        .with_details(serde_json::Value::Object(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_with_offset() {
        let dt = parse_timestamp("expiresAt", "2025-03-01T12:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_datetime_and_bare_date() {
        assert_eq!(
            parse_timestamp("expiresAt", "2025-03-01T08:30:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("expiresAt", "2025-03-01").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_timestamp("expiresAt", "next tuesday").unwrap_err();
        assert_eq!(err.message, "expiresAt must be an ISO 8601 date");
        assert!(err.details.is_some());
    }

    #[test]
    fn test_birth_date_from_timestamp() {
        assert_eq!(
            parse_date("birthDate", "1990-05-17T00:00:00.000Z").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        );
        assert!(parse_date("birthDate", "17/05/1990").is_err());
    }
}
