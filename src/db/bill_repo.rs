// src/db/bill_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    domain::{totals::BILL_PREP_CATEGORY, Month},
    models::bills::{Bill, BillChanges, BillsView},
};

// Nome vem do modelo; a categoria é da própria instância
const LIST_FOR_MONTH_SQL: &str = r#"
    SELECT b.id, b.master_id, m.name, b.category, b.amount, b.due_date, b.is_paid
    FROM bills b
    JOIN bill_master m ON m.id = b.master_id
    WHERE b.is_deleted = FALSE
      AND (
            (b.due_date >= $1 AND b.due_date < $2)
         OR ($3 AND b.is_paid = FALSE AND b.due_date < $1)
      )
    ORDER BY b.due_date ASC, b.id ASC
"#;

// Tudo o que pode entrar nos totais do mês exibido
const LIST_FOR_SUMMARY_SQL: &str = r#"
    SELECT b.id, b.master_id, m.name, b.category, b.amount, b.due_date, b.is_paid
    FROM bills b
    JOIN bill_master m ON m.id = b.master_id
    WHERE b.is_deleted = FALSE
      AND m.is_active = TRUE
      AND (
            (b.due_date >= $1 AND b.due_date < $2)
         OR (b.is_paid = FALSE AND b.due_date < $1)
         OR (b.is_paid = FALSE AND LOWER(b.category) = $3)
      )
    ORDER BY b.due_date ASC, b.id ASC
"#;

const INSERT_SQL: &str = r#"
    WITH inserted AS (
        INSERT INTO bills (master_id, category, amount, due_date)
        SELECT m.id, m.category, $2::NUMERIC, $3::DATE
        FROM bill_master m
        WHERE m.id = $1
        RETURNING id, master_id, category, amount, due_date, is_paid
    )
    SELECT i.id, i.master_id, m.name, i.category, i.amount, i.due_date, i.is_paid
    FROM inserted i
    JOIN bill_master m ON m.id = i.master_id
"#;

#[derive(Clone, Default)]
pub struct BillRepository;

impl BillRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_for_month<'e, E>(
        &self,
        executor: E,
        month: Month,
        view: BillsView,
    ) -> Result<Vec<Bill>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let bills = sqlx::query_as::<_, Bill>(LIST_FOR_MONTH_SQL)
            .bind(month.first_day())
            .bind(month.next().first_day())
            .bind(view == BillsView::CurrentAndOverdue)
            .fetch_all(executor)
            .await?;

        Ok(bills)
    }

    pub async fn list_for_summary<'e, E>(
        &self,
        executor: E,
        month: Month,
    ) -> Result<Vec<Bill>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let bills = sqlx::query_as::<_, Bill>(LIST_FOR_SUMMARY_SQL)
            .bind(month.first_day())
            .bind(month.next().first_day())
            .bind(BILL_PREP_CATEGORY)
            .fetch_all(executor)
            .await?;

        Ok(bills)
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        master_id: i32,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Result<Bill, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let bill = sqlx::query_as::<_, Bill>(INSERT_SQL)
            .bind(master_id)
            .bind(amount)
            .bind(due_date)
            .fetch_one(executor)
            .await?;

        Ok(bill)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        changes: &BillChanges,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE bills
            SET amount   = COALESCE($2, amount),
                due_date = COALESCE($3, due_date),
                is_paid  = COALESCE($4, is_paid)
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .bind(changes.amount)
        .bind(changes.due_date)
        .bind(changes.is_paid)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn soft_delete<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE bills SET is_deleted = TRUE WHERE id = $1 AND is_deleted = FALSE")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
