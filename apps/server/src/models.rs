//! Request payloads and response envelopes for the HTTP surface.
//!
//! Inputs are parsed into explicit structs and validated here before any
//! service is called.

use budgetify_core::budgets::{BudgetRepresentation, NewBudget};
use budgetify_core::errors::ValidationError;
use budgetify_core::expenses::{ExpenseRepresentation, ExpenseUpdate, NewExpense};
use budgetify_core::utils::{parse_amount, parse_expense_date};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `POST /add-expense` form fields.
#[derive(Deserialize, Debug, Default)]
pub struct ExpenseForm {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub note: Option<String>,
}

impl ExpenseForm {
    pub fn validate(self) -> Result<NewExpense, ValidationError> {
        let category = self.category.unwrap_or_default().trim().to_string();
        let amount = self.amount.unwrap_or_default();
        if category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()));
        }
        let amount = parse_amount(&amount)?;
        Ok(NewExpense {
            category,
            amount,
            note: Some(self.note.unwrap_or_default().trim().to_string()),
            date: None,
        })
    }
}

/// `POST /set-budget` form fields.
#[derive(Deserialize, Debug, Default)]
pub struct BudgetForm {
    pub amount: Option<String>,
    pub month: Option<String>,
}

impl BudgetForm {
    pub fn validate(self) -> Result<NewBudget, ValidationError> {
        let amount = parse_amount(&self.amount.unwrap_or_default())?;
        Ok(NewBudget {
            amount,
            month: self.month,
        })
    }
}

/// The client posts amounts either as JSON numbers or as the raw input string.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// `null` counts as absent. Values of any other JSON type are kept as text
    /// and fail amount parsing.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => n.as_f64().map(AmountInput::Number),
            Value::String(s) => Some(AmountInput::Text(s.clone())),
            other => Some(AmountInput::Text(other.to_string())),
        }
    }

    fn to_amount(&self) -> Result<f64, ValidationError> {
        match self {
            AmountInput::Number(v) if v.is_finite() => Ok(*v),
            AmountInput::Number(v) => Err(ValidationError::InvalidAmount(v.to_string())),
            AmountInput::Text(s) => {
                parse_amount(s).map_err(|_| ValidationError::InvalidAmount(s.clone()))
            }
        }
    }
}

/// JSON body of `POST /api/expenses` and `PUT /api/expenses/{id}`.
#[derive(Debug, Default)]
pub struct ExpensePayload {
    pub category: Option<String>,
    pub amount: Option<AmountInput>,
    pub note: Option<String>,
    /// `YYYY-MM-DD`; unparseable values are ignored on update.
    pub date: Option<String>,
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            tracing::debug!(field = key, value = %other, "ignoring non-string field");
            None
        }
    }
}

impl ExpensePayload {
    /// Reads the known fields out of a JSON object body. A field of the wrong
    /// type is treated as absent on its own; a body that is not a JSON object
    /// is an empty payload. Both fail validation later when a required field
    /// ends up missing.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => ExpensePayload {
                category: text_field(&fields, "category"),
                amount: fields.get("amount").and_then(AmountInput::from_value),
                note: text_field(&fields, "note"),
                date: text_field(&fields, "date"),
            },
            _ => ExpensePayload::default(),
        }
    }

    fn required_fields(&self) -> Result<(String, f64), ValidationError> {
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ValidationError::MissingField("category".to_string()))?;
        let amount = self
            .amount
            .as_ref()
            .ok_or_else(|| ValidationError::MissingField("amount".to_string()))?
            .to_amount()?;
        Ok((category.to_string(), amount))
    }

    pub fn into_new_expense(self) -> Result<NewExpense, ValidationError> {
        let (category, amount) = self.required_fields()?;
        Ok(NewExpense {
            category,
            amount,
            note: self.note,
            date: None,
        })
    }

    pub fn into_update(self) -> Result<ExpenseUpdate, ValidationError> {
        let (category, amount) = self.required_fields()?;
        let date = self.date.as_deref().and_then(|raw| {
            let parsed = parse_expense_date(raw);
            if parsed.is_none() {
                tracing::debug!(date = raw, "ignoring unparseable expense date");
            }
            parsed
        });
        Ok(ExpenseUpdate {
            category,
            amount,
            note: self.note,
            date,
        })
    }
}

#[derive(Serialize, Debug)]
pub struct ExpenseEnvelope {
    pub ok: bool,
    pub expense: ExpenseRepresentation,
}

#[derive(Serialize, Debug)]
pub struct DeletedExpense {
    pub ok: bool,
    pub id: i32,
}

#[derive(Serialize, Debug)]
pub struct BudgetEnvelope {
    pub ok: bool,
    pub budget: Option<BudgetRepresentation>,
}

#[derive(Serialize, Debug)]
pub struct Ack {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_form_trims_and_requires_category_and_amount() {
        let expense = ExpenseForm {
            category: Some("  Food ".into()),
            amount: Some("12.5".into()),
            note: Some(" lunch ".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.note.as_deref(), Some("lunch"));

        let err = ExpenseForm {
            category: Some("   ".into()),
            amount: Some("1".into()),
            note: None,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingField(_)));

        let err = ExpenseForm {
            category: Some("Food".into()),
            amount: None,
            note: None,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingField(_)));

        let err = ExpenseForm {
            category: Some("Food".into()),
            amount: Some("twelve".into()),
            note: None,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount(_)));
    }

    #[test]
    fn payload_accepts_numeric_strings_and_numbers() {
        let p = ExpensePayload::from_body(br#"{"category":"Food","amount":"7.25"}"#);
        assert_eq!(p.into_new_expense().unwrap().amount, 7.25);

        let p = ExpensePayload::from_body(br#"{"category":"Food","amount":3}"#);
        assert_eq!(p.into_new_expense().unwrap().amount, 3.0);

        let p = ExpensePayload::from_body(br#"{"category":"Food","amount":"abc"}"#);
        assert!(matches!(
            p.into_new_expense(),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn malformed_body_is_an_empty_payload() {
        let p = ExpensePayload::from_body(b"not json");
        assert!(matches!(
            p.into_new_expense(),
            Err(ValidationError::MissingField(_))
        ));

        let p = ExpensePayload::from_body(br#"{"category":"Food"}"#);
        assert_eq!(
            p.into_new_expense(),
            Err(ValidationError::MissingField("amount".to_string()))
        );
    }

    #[test]
    fn mistyped_optional_field_does_not_discard_the_payload() {
        let p = ExpensePayload::from_body(br#"{"category":"Food","amount":4.5,"note":5}"#);
        let expense = p.into_new_expense().unwrap();
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 4.5);
        assert_eq!(expense.note, None);

        let p = ExpensePayload::from_body(br#"{"category":"Food","amount":[1]}"#);
        assert!(matches!(
            p.into_new_expense(),
            Err(ValidationError::InvalidAmount(_))
        ));

        let p = ExpensePayload::from_body(br#"{"category":"Food","amount":null}"#);
        assert_eq!(
            p.into_new_expense(),
            Err(ValidationError::MissingField("amount".to_string()))
        );
    }

    #[test]
    fn update_ignores_bad_dates() {
        let p = ExpensePayload::from_body(
            br#"{"category":"Food","amount":1,"date":"31/12/2024"}"#,
        );
        assert!(p.into_update().unwrap().date.is_none());

        let p = ExpensePayload::from_body(
            br#"{"category":"Food","amount":1,"date":"2024-12-31"}"#,
        );
        let date = p.into_update().unwrap().date.unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-12-31");
    }
}
