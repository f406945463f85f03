// src/services/credit_card_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::CreditCardRepository,
    models::credit_cards::{CardPosition, CreateCreditCardPayload, CreditCard, UpdateCreditCardPayload},
};

#[derive(Clone)]
pub struct CreditCardService {
    repo: CreditCardRepository,
}

impl CreditCardService {
    pub fn new(repo: CreditCardRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<CreditCard>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        input: CreateCreditCardPayload,
    ) -> Result<CreditCard, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .create(executor, input.name.trim(), input.balance, input.include_in_due_balance)
            .await
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        input: UpdateCreditCardPayload,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, &input).await
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }

    /// Grava a nova ordem inteira de uma vez.
    pub async fn reorder<'e, E>(&self, executor: E, cards: &[CardPosition]) -> Result<u64, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let mut updated = 0;
        for card in cards {
            updated += self.repo.set_sort_order(&mut *tx, card.id, card.sort_order).await?;
        }

        tx.commit().await?;

        tracing::debug!(cards = cards.len(), updated, "Ordem dos cartões atualizada");
        Ok(updated)
    }
}
