use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// All expenses, newest `date` first.
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>>;
    async fn insert_new_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    /// Returns `None` when no row has `expense_id`.
    async fn update_expense(
        &self,
        expense_id: i32,
        update: ExpenseUpdate,
    ) -> Result<Option<Expense>>;
    /// Returns the number of rows removed.
    async fn delete_expense(&self, expense_id: i32) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self) -> Result<Vec<Expense>>;
    fn get_expense(&self, expense_id: i32) -> Result<Expense>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense_id: i32, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: i32) -> Result<()>;
}
