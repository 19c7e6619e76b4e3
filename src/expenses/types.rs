//! Types for the expense collection

use serde::{Deserialize, Serialize};

use crate::analytics::amount;
use crate::error::Error;

/// An expense record as returned by the API.
///
/// Seed data on the demo backend is inconsistent: `amount` arrives as either
/// a JSON number or a decorated string, and `category`/`date` may be absent.
/// The amount is coerced into a finite `f64` during deserialization; the
/// optional fields stay optional and are degraded gracefully downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// The record ID, assigned by the server
    pub id: String,

    /// Short display name
    pub name: String,

    /// The amount, normalized to a finite number
    #[serde(deserialize_with = "amount::deserialize_lenient")]
    pub amount: f64,

    /// Free-form description
    pub description: String,

    /// Spending category; absent records group under the
    /// [`UNCATEGORIZED`](crate::analytics::UNCATEGORIZED) sentinel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// ISO-8601 date string; absent or unparsable values are excluded from
    /// calendar-month analytics but still count toward the all-time total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Owning user, when the backend assigns one
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// The creation time, assigned by the server
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload for creating a new expense; `id` and `createdAt` are assigned
/// server-side
#[derive(Debug, Clone, Serialize)]
pub struct NewExpense {
    /// Short display name
    pub name: String,

    /// The amount
    pub amount: f64,

    /// Free-form description
    pub description: String,

    /// Spending category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// ISO-8601 date string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl NewExpense {
    /// Check the required form fields before any network call
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name is required"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation("description is required"));
        }
        if !self.amount.is_finite() {
            return Err(Error::validation("amount must be a finite number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_deserializes_string_amount_and_missing_optionals() {
        let json = r#"{
            "id": "12",
            "name": "Groceries",
            "amount": "$1,234.56",
            "description": "weekly shop",
            "createdAt": "2024-03-02T10:00:00.000Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.amount, 1234.56);
        assert!(expense.category.is_none());
        assert!(expense.date.is_none());
        assert!(expense.user_id.is_none());
    }

    #[test]
    fn expense_deserializes_numeric_amount() {
        let json = r#"{
            "id": "3",
            "name": "Coffee",
            "amount": 4.5,
            "description": "flat white",
            "category": "food",
            "date": "2024-03-02",
            "createdAt": "2024-03-02T10:00:00.000Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.amount, 4.5);
        assert_eq!(expense.category.as_deref(), Some("food"));
    }

    #[test]
    fn new_expense_requires_name_and_description() {
        let new = NewExpense {
            name: "  ".to_string(),
            amount: 10.0,
            description: "desc".to_string(),
            category: None,
            date: None,
        };
        assert!(matches!(new.validate(), Err(Error::Validation(_))));

        let new = NewExpense {
            name: "Lunch".to_string(),
            amount: 10.0,
            description: String::new(),
            category: None,
            date: None,
        };
        assert!(matches!(new.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn new_expense_serializes_without_absent_optionals() {
        let new = NewExpense {
            name: "Lunch".to_string(),
            amount: 12.0,
            description: "ramen".to_string(),
            category: None,
            date: None,
        };

        let json = serde_json::to_value(&new).unwrap();
        assert!(json.get("category").is_none());
        assert!(json.get("date").is_none());
    }
}
