//! Typed path parameter helpers.

use devboard_core::error::AppError;

/// Parses a numeric id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devboard_core::error::ErrorKind;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        let err = parse_id("abc").unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert_eq!(err.message, "Invalid id: abc");
    }
}
