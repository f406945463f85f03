// src/models/credit_cards.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    #[schema(example = 3)]
    pub id: i32,

    #[schema(example = "Visa Gold")]
    pub name: String,

    #[schema(example = 200.00)]
    pub balance: Decimal,

    #[schema(example = 0)]
    pub sort_order: i32,

    /// Se o saldo entra no "Due Balance"
    #[schema(example = true)]
    pub include_in_due_balance: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditCardPayload {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Visa Gold")]
    pub name: String,

    #[serde(default)]
    #[schema(example = 0.00)]
    pub balance: Decimal,

    #[serde(default = "default_include")]
    #[schema(example = true)]
    pub include_in_due_balance: bool,
}

fn default_include() -> bool {
    true
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCreditCardPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Visa Platinum")]
    pub name: Option<String>,

    #[schema(example = 350.25)]
    pub balance: Option<Decimal>,

    #[schema(example = false)]
    pub include_in_due_balance: Option<bool>,
}

impl UpdateCreditCardPayload {
    pub fn ensure_not_empty(&self) -> Result<(), AppError> {
        if self.name.is_none() && self.balance.is_none() && self.include_in_due_balance.is_none() {
            return Err(AppError::Validation(
                "Provide at least one of name, balance or includeInDueBalance".to_string(),
            ));
        }
        Ok(())
    }
}

// O front manda snake_case aqui ({id, sort_order})
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct CardPosition {
    #[schema(example = 3)]
    pub id: i32,

    #[schema(example = 1)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderCardsPayload {
    pub cards: Vec<CardPosition>,
}

impl ReorderCardsPayload {
    pub fn validated(self) -> Result<Vec<CardPosition>, AppError> {
        if self.cards.is_empty() {
            return Err(AppError::Validation("cards must be a non-empty array".to_string()));
        }
        if let Some(bad) = self.cards.iter().find(|c| c.sort_order < 0) {
            return Err(AppError::Validation(format!(
                "sort_order for card {} must not be negative",
                bad.id
            )));
        }
        Ok(self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults() {
        let payload: CreateCreditCardPayload = serde_json::from_str(r#"{"name": "Amex"}"#).unwrap();
        assert_eq!(payload.balance, Decimal::ZERO);
        assert!(payload.include_in_due_balance);
    }

    #[test]
    fn reorder_uses_snake_case_fields() {
        let payload: ReorderCardsPayload =
            serde_json::from_str(r#"{"cards": [{"id": 2, "sort_order": 0}, {"id": 1, "sort_order": 1}]}"#)
                .unwrap();
        let cards = payload.validated().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, 2);
    }

    #[test]
    fn reorder_rejects_empty_and_negative() {
        let empty = ReorderCardsPayload { cards: vec![] };
        assert!(empty.validated().is_err());

        let negative = ReorderCardsPayload {
            cards: vec![CardPosition { id: 1, sort_order: -1 }],
        };
        assert!(negative.validated().is_err());
    }

    #[test]
    fn update_requires_a_field() {
        assert!(UpdateCreditCardPayload::default().ensure_not_empty().is_err());
        let payload: UpdateCreditCardPayload =
            serde_json::from_str(r#"{"includeInDueBalance": false}"#).unwrap();
        assert!(payload.ensure_not_empty().is_ok());
    }
}
