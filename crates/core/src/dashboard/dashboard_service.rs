use std::collections::BTreeMap;
use std::sync::Arc;

use crate::budgets::BudgetServiceTrait;
use crate::dashboard::dashboard_model::{usage_percentage, CategoryTotal, DashboardSummary};
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseServiceTrait};
use crate::utils::current_month_label;

pub struct DashboardService {
    expense_service: Arc<dyn ExpenseServiceTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
}

impl DashboardService {
    pub fn new(
        expense_service: Arc<dyn ExpenseServiceTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
    ) -> Self {
        DashboardService {
            expense_service,
            budget_service,
        }
    }

    pub fn get_summary(&self) -> Result<DashboardSummary> {
        self.get_summary_for_month(&current_month_label())
    }

    pub fn get_summary_for_month(&self, month: &str) -> Result<DashboardSummary> {
        let expenses = self.expense_service.get_expenses()?;
        let budget = self.budget_service.get_budget_for_month(month)?;

        let categories: Vec<String> = expenses.iter().map(|e| e.category.clone()).collect();
        let amounts: Vec<f64> = expenses.iter().map(|e| e.amount).collect();
        let total_spent: f64 = amounts.iter().sum();
        let usage_pct = usage_percentage(total_spent, budget.as_ref().map(|b| b.amount));

        Ok(DashboardSummary {
            category_totals: totals_by_category(&expenses),
            expenses,
            budget,
            categories,
            amounts,
            total_spent,
            usage_pct,
        })
    }
}

fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
    }
    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}
