use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::constants::{DATE_FORMAT, MONTH_LABEL_FORMAT};
use crate::errors::ValidationError;

/// Human-readable label of the calendar month `now` falls in, e.g. `"March 2024"`.
///
/// Budgets are keyed by this exact string, so the format must stay stable.
pub fn month_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(MONTH_LABEL_FORMAT).to_string()
}

/// Label for the current month on the local clock.
pub fn current_month_label() -> String {
    month_label(&Local::now())
}

/// Parses a `YYYY-MM-DD` string into midnight of that day.
///
/// Returns `None` for anything else, empty input included. Callers treat `None`
/// as "keep the stored date".
pub fn parse_expense_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parses a user supplied monetary amount.
///
/// Surrounding whitespace is ignored. Sign is not checked; NaN and infinities
/// are rejected because the store cannot hold them.
pub fn parse_amount(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::InvalidAmount(trimmed.to_string())),
    }
}
