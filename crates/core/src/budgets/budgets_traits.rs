use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, budget_id: i32) -> Result<Option<Budget>>;
    /// Latest-created budget whose label equals `month` exactly.
    fn get_latest_budget_for_month(&self, month: &str) -> Result<Option<Budget>>;
    async fn insert_new_budget(
        &self,
        amount: f64,
        month: String,
        created_at: NaiveDateTime,
    ) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: i32) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget_for_month(&self, month: &str) -> Result<Option<Budget>>;
    /// Budget in effect for the current calendar month, if any.
    fn get_current_budget(&self) -> Result<Option<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: i32) -> Result<()>;
}
