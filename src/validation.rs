use chrono::{NaiveDate, SecondsFormat, Utc};

use crate::api_error::{ApiError, ApiResult};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims `text`, rejecting it with `message` when nothing is left.
pub fn required_text(text: Option<&str>, message: &str) -> ApiResult<String> {
    match text.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ApiError::validation(message)),
    }
}

/// Normalises a due date: blank means "no due date", anything else must be
/// a calendar date.
pub fn due_date(date: Option<&str>) -> ApiResult<Option<String>> {
    match date.map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, DUE_DATE_FORMAT)
            .map(|parsed| Some(parsed.format(DUE_DATE_FORMAT).to_string()))
            .map_err(|_| ApiError::validation(format!("Invalid dueDate: expected YYYY-MM-DD, got {:?}", date))),
    }
}

/// Timestamp stamped onto new todos, in the same shape browsers produce
/// with `Date.toISOString()`.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text(Some("  Buy milk  "), "m"), Ok(String::from("Buy milk")));
    }

    #[test]
    fn required_text_rejects_blank_and_missing() {
        assert_eq!(required_text(Some(" \t\n"), "Title is required"), Err(ApiError::validation("Title is required")));
        assert_eq!(required_text(Some(""), "m"), Err(ApiError::validation("m")));
        assert_eq!(required_text(None, "m"), Err(ApiError::validation("m")));
    }

    #[test]
    fn due_date_accepts_calendar_dates() {
        assert_eq!(due_date(Some("2025-12-10")), Ok(Some(String::from("2025-12-10"))));
        assert_eq!(due_date(Some("")), Ok(None));
        assert_eq!(due_date(None), Ok(None));
    }

    #[test]
    fn due_date_rejects_garbage() {
        assert!(matches!(due_date(Some("tomorrow")), Err(ApiError::Validation(_))));
        assert!(matches!(due_date(Some("2025-02-30")), Err(ApiError::Validation(_))));
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let stamp = current_timestamp();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
