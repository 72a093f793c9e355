//! Budget domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;

/// Domain model representing a monthly spending ceiling.
///
/// `month` is a free-text label such as `"March 2024"`. Several rows may share
/// a label; the most recently created one is the one in effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: i32,
    pub amount: f64,
    pub month: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRepresentation {
    pub id: i32,
    pub amount: f64,
    pub month: String,
    pub created_at: String,
}

impl Budget {
    pub fn to_representation(&self) -> BudgetRepresentation {
        BudgetRepresentation {
            id: self.id,
            amount: self.amount,
            month: self.month.clone(),
            created_at: self.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

impl From<&Budget> for BudgetRepresentation {
    fn from(budget: &Budget) -> Self {
        budget.to_representation()
    }
}

/// Input model for creating a new budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBudget {
    pub amount: f64,
    /// Falls back to the current month label when absent or blank.
    pub month: Option<String>,
}
