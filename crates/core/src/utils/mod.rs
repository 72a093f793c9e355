pub mod time_utils;

pub use time_utils::{current_month_label, month_label, parse_amount, parse_expense_date};
