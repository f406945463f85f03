use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};

use crate::common::error::AppError;

#[derive(Clone, Default)]
pub struct SettingsRepository;

impl SettingsRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_bank_balance<'e, E>(&self, executor: E) -> Result<Decimal, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // A migração cria a linha; se alguém a apagou, tratamos "Not Found" como zero.
        let balance = sqlx::query_scalar::<_, Decimal>(
            "SELECT bank_balance FROM app_settings WHERE id = TRUE",
        )
        .fetch_optional(executor)
        .await?;

        Ok(balance.unwrap_or(Decimal::ZERO))
    }

    pub async fn set_bank_balance<'e, E>(
        &self,
        executor: E,
        balance: Decimal,
    ) -> Result<Decimal, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // UPSERT (Insert or Update)
        let balance = sqlx::query_scalar::<_, Decimal>(
            r#"
            INSERT INTO app_settings (id, bank_balance)
            VALUES (TRUE, $1)
            ON CONFLICT (id)
            DO UPDATE SET
                bank_balance = EXCLUDED.bank_balance,
                updated_at = NOW()
            RETURNING bank_balance
            "#,
        )
        .bind(balance)
        .fetch_one(executor)
        .await?;

        Ok(balance)
    }
}
