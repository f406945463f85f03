// src/models/summary.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{domain::month::Month, models::bills::Bill};

// 1. GET /api/due-balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DueBalance {
    #[schema(example = 150.00)]
    pub bill_total: Decimal,
    #[schema(example = 200.00)]
    pub credit_card_total: Decimal,
    #[schema(example = 350.00)]
    pub total: Decimal,
}

impl DueBalance {
    pub fn new(bill_total: Decimal, credit_card_total: Decimal) -> Self {
        Self {
            bill_total,
            credit_card_total,
            total: bill_total + credit_card_total,
        }
    }
}

// 2. GET /api/summary (os totais que o painel mostra para o mês exibido)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    #[schema(value_type = String, example = "2025-06")]
    pub month: Month,
    #[schema(value_type = String, example = "2025-05")]
    pub previous_month: Month,
    #[schema(value_type = String, example = "2025-07")]
    pub next_month: Month,

    pub past_due_bills: Vec<Bill>,
    pub current_due_amt: Decimal,
    pub included_credit_card_total: Decimal,
    pub due_balance_total: Decimal,
    pub bank_balance: Decimal,
    pub net_position: Decimal,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// "YYYY-MM"; padrão: mês corrente
    pub month: Option<String>,
}
