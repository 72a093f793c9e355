use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::current_month_label;
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget_for_month(&self, month: &str) -> Result<Option<Budget>> {
        self.repository.get_latest_budget_for_month(month)
    }

    fn get_current_budget(&self) -> Result<Option<Budget>> {
        self.get_budget_for_month(&current_month_label())
    }

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        let month = new_budget
            .month
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(current_month_label);
        let created = self
            .repository
            .insert_new_budget(new_budget.amount, month, Utc::now().naive_utc())
            .await?;
        debug!("Created budget {} for {}", created.id, created.month);
        Ok(created)
    }

    async fn delete_budget(&self, budget_id: i32) -> Result<()> {
        match self.repository.delete_budget(budget_id).await? {
            0 => Err(Error::not_found(format!("budget {}", budget_id))),
            _ => Ok(()),
        }
    }
}
