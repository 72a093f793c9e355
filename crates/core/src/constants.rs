/// `strftime` pattern for the human-readable month label used to key budgets.
pub const MONTH_LABEL_FORMAT: &str = "%B %Y";

/// Date format used by the wire/view representation of records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decimal places kept on the dashboard usage percentage
pub const USAGE_PCT_PRECISION: usize = 2;
