// src/models/bills.rs

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::AppError,
    domain::{month::parse_date, schedule},
};

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "recurrence_pattern", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    Once,
}

// --- Structs ---

/// Modelo de conta recorrente ("Aluguel", "Netflix").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillMaster {
    #[schema(example = 7)]
    pub id: i32,

    #[schema(example = "Rent")]
    pub name: String,

    #[schema(example = "Housing")]
    pub category: String,

    pub recurrence_pattern: RecurrencePattern,

    #[schema(example = true)]
    pub is_active: bool,

    pub created_at: Option<DateTime<Utc>>,
}

/// Uma instância concreta (um período) de uma conta, já com o nome do modelo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[schema(example = 42)]
    pub id: i32,

    #[schema(example = 7)]
    pub master_id: i32,

    #[schema(example = "Rent")]
    pub name: String,

    #[schema(example = "Housing")]
    pub category: String,

    #[schema(example = 1200.00)]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-06-05")]
    pub due_date: NaiveDate,

    #[schema(example = false)]
    pub is_paid: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBillSeries {
    pub master: BillMaster,
    pub bills: Vec<Bill>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedCount {
    #[schema(example = 11)]
    pub updated: u64,
}

// --- Query strings ---

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BillsQuery {
    /// Mês exibido, "YYYY-MM" (obrigatório)
    pub month: Option<String>,
    /// "current_and_overdue" inclui também as contas vencidas e não pagas
    pub view: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillsView {
    Month,
    CurrentAndOverdue,
}

impl BillsView {
    pub fn from_query(view: Option<&str>) -> Self {
        match view {
            Some("current_and_overdue") => BillsView::CurrentAndOverdue,
            _ => BillsView::Month,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CascadeQuery {
    /// Apenas instâncias com vencimento estritamente depois desta data ("YYYY-MM-DD")
    pub from: Option<String>,
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillPayload {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Rent")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Housing")]
    pub category: String,

    #[schema(example = 1200.00)]
    pub amount: Decimal,

    #[schema(example = "2025-06-05")]
    pub due_date: String,

    #[serde(default)]
    pub recurrence_pattern: RecurrencePattern,

    #[validate(range(min = 1, max = 60, message = "occurrences must be between 1 and 60"))]
    #[schema(example = 12)]
    pub occurrences: Option<u32>,
}

/// Série pronta para gravar: modelo + datas de vencimento já calculadas.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBillSeries {
    pub name: String,
    pub category: String,
    pub pattern: RecurrencePattern,
    pub amount: Decimal,
    pub due_dates: Vec<NaiveDate>,
}

impl CreateBillPayload {
    pub fn into_series(self) -> Result<NewBillSeries, AppError> {
        self.validate()?;

        let amount = non_negative_amount(self.amount)?;
        let first_due = parse_date(&self.due_date)?;
        let occurrences = self
            .occurrences
            .unwrap_or_else(|| self.recurrence_pattern.default_occurrences());

        Ok(NewBillSeries {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            pattern: self.recurrence_pattern,
            amount,
            due_dates: schedule::due_dates(first_due, self.recurrence_pattern, occurrences),
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillPayload {
    #[schema(example = 80.00)]
    pub amount: Option<Decimal>,

    #[schema(example = "2025-06-20")]
    pub due_date: Option<String>,

    #[schema(example = true)]
    pub is_paid: Option<bool>,
}

/// Alterações validadas de uma única instância.
#[derive(Debug, Clone, PartialEq)]
pub struct BillChanges {
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub is_paid: Option<bool>,
}

impl UpdateBillPayload {
    pub fn into_changes(self) -> Result<BillChanges, AppError> {
        if self.amount.is_none() && self.due_date.is_none() && self.is_paid.is_none() {
            return Err(AppError::Validation(
                "Provide at least one of amount, dueDate or isPaid".to_string(),
            ));
        }
        Ok(BillChanges {
            amount: self.amount.map(non_negative_amount).transpose()?,
            due_date: self.due_date.as_deref().map(parse_date).transpose()?,
            is_paid: self.is_paid,
        })
    }
}

/// Corpo do PATCH em /master-bills/:id (qualquer subconjunto).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasterBillPatch {
    #[schema(example = 95.50)]
    pub amount: Option<Decimal>,

    #[schema(example = "Utilities")]
    pub category: Option<String>,

    /// Só o dia do mês é usado
    #[schema(example = "2025-06-20")]
    pub due_date: Option<String>,
}

/// Alterações validadas para a cascata de um modelo.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterBillChanges {
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub due_day: Option<u32>,
}

impl MasterBillPatch {
    pub fn into_changes(self) -> Result<MasterBillChanges, AppError> {
        if self.amount.is_none() && self.category.is_none() && self.due_date.is_none() {
            return Err(AppError::Validation(
                "Provide at least one of amount, category or dueDate".to_string(),
            ));
        }

        let category = match self.category {
            Some(c) if c.trim().is_empty() => {
                return Err(AppError::Validation("category must not be empty".to_string()));
            }
            other => other,
        };

        Ok(MasterBillChanges {
            amount: self.amount.map(non_negative_amount).transpose()?,
            category,
            due_day: self
                .due_date
                .as_deref()
                .map(parse_date)
                .transpose()?
                .map(|d| d.day()),
        })
    }
}

/// Maior valor que cabe em NUMERIC(12, 2).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

pub fn non_negative_amount(amount: Decimal) -> Result<Decimal, AppError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::Validation("amount must not be negative".to_string()));
    }
    // O Postgres arredonda para 2 casas antes de checar a precisão
    if amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero) > MAX_AMOUNT {
        return Err(AppError::Validation(format!("amount must not exceed {MAX_AMOUNT}")));
    }
    Ok(amount)
}
