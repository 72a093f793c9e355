use serde::Serialize;

use crate::budgets::Budget;
use crate::constants::USAGE_PCT_PRECISION;
use crate::expenses::Expense;

/// Everything the dashboard view needs in one bundle.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Newest first.
    pub expenses: Vec<Expense>,
    pub budget: Option<Budget>,
    /// Per-expense chart series, in the same order as `expenses`.
    pub categories: Vec<String>,
    pub amounts: Vec<f64>,
    /// Sum over every recorded expense, not just the budget's month.
    pub total_spent: f64,
    pub usage_pct: f64,
    pub category_totals: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// `total_spent / budget * 100` rounded to two places, or `0` without a
/// positive budget.
pub fn usage_percentage(total_spent: f64, budget_amount: Option<f64>) -> f64 {
    match budget_amount {
        Some(budget) if budget > 0.0 => {
            // Round the exact binary value: 1/800 is 0.12, not 0.13.
            let pct = total_spent / budget * 100.0;
            format!("{:.*}", USAGE_PCT_PRECISION, pct)
                .parse()
                .unwrap_or(pct)
        }
        _ => 0.0,
    }
}
