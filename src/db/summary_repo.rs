// src/db/summary_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    domain::{totals::BILL_PREP_CATEGORY, Month},
};

// O DISTINCT no subselect evita contar a mesma conta duas vezes por causa do JOIN.
// Mesma regra de domain::totals::bill_due_total, com o mês como parâmetro.
pub(crate) const DUE_BILL_TOTAL_SQL: &str = r#"
    SELECT COALESCE(SUM(due_bills.amount), 0) AS total
    FROM (
        SELECT DISTINCT b.id, b.amount
        FROM bills b
        JOIN bill_master m ON m.id = b.master_id
        WHERE b.is_paid = FALSE
          AND b.is_deleted = FALSE
          AND m.is_active = TRUE
          AND (
                b.due_date < $1
             OR (b.due_date >= $1 AND b.due_date < $2)
             OR LOWER(b.category) = $3
          )
    ) AS due_bills
"#;

pub(crate) const INCLUDED_CARD_TOTAL_SQL: &str = r#"
    SELECT COALESCE(SUM(balance), 0) AS total
    FROM credit_cards
    WHERE include_in_due_balance = TRUE
"#;

#[derive(Clone, Default)]
pub struct SummaryRepository;

impl SummaryRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn due_bill_total<'e, E>(&self, executor: E, anchor: Month) -> Result<Decimal, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, Decimal>(DUE_BILL_TOTAL_SQL)
            .bind(anchor.first_day())
            .bind(anchor.next().first_day())
            .bind(BILL_PREP_CATEGORY)
            .fetch_one(executor)
            .await?;

        Ok(total)
    }

    pub async fn included_card_total<'e, E>(&self, executor: E) -> Result<Decimal, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, Decimal>(INCLUDED_CARD_TOTAL_SQL)
            .fetch_one(executor)
            .await?;

        Ok(total)
    }
}
