use budgetify_core::budgets::{Budget, BudgetRepositoryTrait};
use budgetify_core::Result;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budget;
use crate::schema::budget::dsl::*;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget(&self, budget_id: i32) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budget
            .find(budget_id)
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    fn get_latest_budget_for_month(&self, month_label: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        // Equal timestamps fall back to insertion order.
        let row = budget
            .filter(month.eq(month_label))
            .order((created_at.desc(), id.desc()))
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    async fn insert_new_budget(
        &self,
        budget_amount: f64,
        month_label: String,
        created: NaiveDateTime,
    ) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let new_row = NewBudgetDB {
                    amount: budget_amount,
                    month: month_label,
                    created_at: created,
                };
                let saved = diesel::insert_into(budget::table)
                    .values(&new_row)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(saved))
            })
            .await
    }

    async fn delete_budget(&self, budget_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(budget.find(budget_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
