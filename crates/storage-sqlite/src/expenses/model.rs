//! Database models for expenses.

use budgetify_core::expenses::Expense;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for expenses
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expense)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseDB {
    pub id: i32,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    pub date: NaiveDateTime,
}

/// Database model for creating a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expense)]
pub struct NewExpenseDB {
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    pub date: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            category: db.category,
            amount: db.amount,
            note: db.note,
            date: db.date,
        }
    }
}

impl From<Expense> for ExpenseDB {
    fn from(domain: Expense) -> Self {
        Self {
            id: domain.id,
            category: domain.category,
            amount: domain.amount,
            note: domain.note,
            date: domain.date,
        }
    }
}
