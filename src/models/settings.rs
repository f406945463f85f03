// src/models/settings.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Usado tanto na resposta do GET quanto no corpo do PUT /api/balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BankBalance {
    #[schema(example = 2500.75)]
    pub balance: Decimal,
}
