use crate::errors::{Error, Result};
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }
}

fn expense_not_found(expense_id: i32) -> Error {
    Error::not_found(format!("expense {}", expense_id))
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self) -> Result<Vec<Expense>> {
        self.repository.load_expenses()
    }

    fn get_expense(&self, expense_id: i32) -> Result<Expense> {
        self.repository
            .get_expense(expense_id)?
            .ok_or_else(|| expense_not_found(expense_id))
    }

    async fn create_expense(&self, mut new_expense: NewExpense) -> Result<Expense> {
        if new_expense.date.is_none() {
            new_expense.date = Some(Utc::now().naive_utc());
        }
        let created = self.repository.insert_new_expense(new_expense).await?;
        debug!("Created expense {} ({})", created.id, created.category);
        Ok(created)
    }

    async fn update_expense(&self, expense_id: i32, update: ExpenseUpdate) -> Result<Expense> {
        self.repository
            .update_expense(expense_id, update)
            .await?
            .ok_or_else(|| expense_not_found(expense_id))
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<()> {
        match self.repository.delete_expense(expense_id).await? {
            0 => Err(expense_not_found(expense_id)),
            _ => {
                debug!("Deleted expense {}", expense_id);
                Ok(())
            }
        }
    }
}
