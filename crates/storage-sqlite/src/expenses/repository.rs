use budgetify_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use budgetify_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expense;
use crate::schema::expense::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expense
            .order((date.desc(), id.desc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expense
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Expense::from))
    }

    async fn insert_new_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let new_row = NewExpenseDB {
                    category: new_expense.category,
                    amount: new_expense.amount,
                    note: new_expense.note,
                    date: new_expense.date.unwrap_or_else(|| Utc::now().naive_utc()),
                };
                let created = diesel::insert_into(expense::table)
                    .values(&new_row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(created))
            })
            .await
    }

    async fn update_expense(
        &self,
        expense_id: i32,
        update: ExpenseUpdate,
    ) -> Result<Option<Expense>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Expense>> {
                let existing = expense
                    .find(expense_id)
                    .select(ExpenseDB::as_select())
                    .first::<ExpenseDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                let Some(existing) = existing else {
                    return Ok(None);
                };

                let mut domain = Expense::from(existing);
                update.apply_to(&mut domain);
                let row = ExpenseDB::from(domain);

                let saved = diesel::update(expense.find(expense_id))
                    .set(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(Expense::from(saved)))
            })
            .await
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(expense.find(expense_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
