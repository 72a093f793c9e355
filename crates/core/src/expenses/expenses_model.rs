//! Expense domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;

/// Domain model representing a recorded expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    pub date: NaiveDateTime,
}

/// Wire/view form of an expense: null notes become `""`, dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRepresentation {
    pub id: i32,
    pub category: String,
    pub amount: f64,
    pub note: String,
    pub date: String,
}

impl Expense {
    pub fn to_representation(&self) -> ExpenseRepresentation {
        ExpenseRepresentation {
            id: self.id,
            category: self.category.clone(),
            amount: self.amount,
            note: self.note.clone().unwrap_or_default(),
            date: self.date.format(DATE_FORMAT).to_string(),
        }
    }
}

impl From<&Expense> for ExpenseRepresentation {
    fn from(expense: &Expense) -> Self {
        expense.to_representation()
    }
}

/// Input model for creating a new expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    /// Defaults to the creation time when absent.
    pub date: Option<NaiveDateTime>,
}

/// Replacement values for an existing expense.
///
/// `date: None` keeps the stored date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseUpdate {
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    pub date: Option<NaiveDateTime>,
}

impl ExpenseUpdate {
    /// Applies the update onto `expense` in place.
    pub fn apply_to(self, expense: &mut Expense) {
        expense.category = self.category;
        expense.amount = self.amount;
        expense.note = self.note;
        if let Some(date) = self.date {
            expense.date = date;
        }
    }
}
