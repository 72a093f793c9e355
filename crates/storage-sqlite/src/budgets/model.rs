//! Database models for budgets.

use budgetify_core::budgets::Budget;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budget)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: i32,
    pub amount: f64,
    pub month: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budget)]
pub struct NewBudgetDB {
    pub amount: f64,
    pub month: String,
    pub created_at: NaiveDateTime,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            amount: db.amount,
            month: db.month,
            created_at: db.created_at,
        }
    }
}
