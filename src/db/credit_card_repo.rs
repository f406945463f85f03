// src/db/credit_card_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::credit_cards::{CreditCard, UpdateCreditCardPayload},
};

#[derive(Clone, Default)]
pub struct CreditCardRepository;

impl CreditCardRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<CreditCard>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cards = sqlx::query_as::<_, CreditCard>(
            r#"
            SELECT id, name, balance, sort_order, include_in_due_balance
            FROM credit_cards
            ORDER BY sort_order ASC, id ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(cards)
    }

    // Cartão novo entra no fim da ordenação
    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        balance: Decimal,
        include_in_due_balance: bool,
    ) -> Result<CreditCard, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let card = sqlx::query_as::<_, CreditCard>(
            r#"
            INSERT INTO credit_cards (name, balance, include_in_due_balance, sort_order)
            VALUES ($1, $2, $3, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM credit_cards))
            RETURNING id, name, balance, sort_order, include_in_due_balance
            "#,
        )
        .bind(name)
        .bind(balance)
        .bind(include_in_due_balance)
        .fetch_one(executor)
        .await?;

        Ok(card)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        input: &UpdateCreditCardPayload,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE credit_cards
            SET name                   = COALESCE($2, name),
                balance                = COALESCE($3, balance),
                include_in_due_balance = COALESCE($4, include_in_due_balance)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(input.name.as_deref())
        .bind(input.balance)
        .bind(input.include_in_due_balance)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM credit_cards WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn set_sort_order<'e, E>(
        &self,
        executor: E,
        id: i32,
        sort_order: i32,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE credit_cards SET sort_order = $2 WHERE id = $1")
            .bind(id)
            .bind(sort_order)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
