// src/services/summary_service.rs

use sqlx::{Acquire, Postgres};

use crate::{
    common::error::AppError,
    db::{BillRepository, CreditCardRepository, SettingsRepository, SummaryRepository},
    domain::{totals, Month},
    models::summary::{DueBalance, MonthSummary},
};

#[derive(Clone)]
pub struct SummaryService {
    repo: SummaryRepository,
    bill_repo: BillRepository,
    card_repo: CreditCardRepository,
    settings_repo: SettingsRepository,
}

impl SummaryService {
    pub fn new(
        repo: SummaryRepository,
        bill_repo: BillRepository,
        card_repo: CreditCardRepository,
        settings_repo: SettingsRepository,
    ) -> Self {
        Self {
            repo,
            bill_repo,
            card_repo,
            settings_repo,
        }
    }

    /// Total devido (contas + cartões incluídos) ancorado em `anchor`.
    pub async fn due_balance<'e, E>(&self, executor: E, anchor: Month) -> Result<DueBalance, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        // Snapshot consistente das duas somas
        let mut tx = executor.begin().await?;

        let bill_total = self.repo.due_bill_total(&mut *tx, anchor).await?;
        let credit_card_total = self.repo.included_card_total(&mut *tx).await?;

        tx.commit().await?;

        Ok(DueBalance::new(bill_total, credit_card_total))
    }

    /// Os totais do painel para o mês exibido.
    pub async fn month_summary<'e, E>(&self, executor: E, month: Month) -> Result<MonthSummary, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let bills = self.bill_repo.list_for_summary(&mut *tx, month).await?;
        let cards = self.card_repo.list(&mut *tx).await?;
        let bank_balance = self.settings_repo.get_bank_balance(&mut *tx).await?;

        tx.commit().await?;

        Ok(totals::summarize(&bills, &cards, bank_balance, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::{money, seed_series};
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    fn service() -> SummaryService {
        SummaryService::new(
            SummaryRepository::new(),
            BillRepository::new(),
            CreditCardRepository::new(),
            SettingsRepository::new(),
        )
    }

    fn june() -> Month {
        Month::new(2025, 6).unwrap()
    }

    async fn seed_june_ledger(pool: &PgPool) {
        seed_series(pool, "Rent", "Housing", "100", &["2025-05-05", "2025-06-05", "2025-08-05"]).await;
        // Junho casa com "no mês" e com "bill prep": conta uma vez só
        seed_series(pool, "Prep", "Bill Prep", "50", &["2025-06-20"]).await;
        seed_series(pool, "Prep later", "BILL PREP", "30", &["2026-01-10"]).await;

        let paid = seed_series(pool, "Netflix", "Streaming", "15", &["2025-06-15"]).await;
        sqlx::query("UPDATE bills SET is_paid = TRUE WHERE master_id = $1")
            .bind(paid)
            .execute(pool)
            .await
            .unwrap();

        let deleted = seed_series(pool, "Gym", "Health", "40", &["2025-06-10"]).await;
        sqlx::query("UPDATE bills SET is_deleted = TRUE WHERE master_id = $1")
            .bind(deleted)
            .execute(pool)
            .await
            .unwrap();

        let inactive = seed_series(pool, "Old", "Housing", "60", &["2025-06-01"]).await;
        sqlx::query("UPDATE bill_master SET is_active = FALSE WHERE id = $1")
            .bind(inactive)
            .execute(pool)
            .await
            .unwrap();

        let cards = CreditCardRepository::new();
        cards.create(pool, "Visa", money("200"), true).await.unwrap();
        cards.create(pool, "Store card", money("75"), false).await.unwrap();

        SettingsRepository::new()
            .set_bank_balance(pool, money("500"))
            .await
            .unwrap();
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn due_balance_counts_each_bill_once(pool: PgPool) {
        seed_june_ledger(&pool).await;

        let due = service().due_balance(&pool, june()).await.unwrap();

        // 100 (maio) + 100 (junho) + 50 + 30 (bill prep)
        assert_eq!(due.bill_total, money("280"));
        assert_eq!(due.credit_card_total, money("200"));
        assert_eq!(due.total, money("480"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn sql_and_month_summary_agree_on_the_due_balance(pool: PgPool) {
        seed_june_ledger(&pool).await;

        let due = service().due_balance(&pool, june()).await.unwrap();
        let summary = service().month_summary(&pool, june()).await.unwrap();

        assert_eq!(summary.due_balance_total, due.total);
        assert_eq!(summary.current_due_amt, money("150"));
        assert_eq!(summary.included_credit_card_total, money("200"));
        assert_eq!(summary.bank_balance, money("500"));
        assert_eq!(summary.net_position, money("150"));
        let past_due: Vec<_> = summary.past_due_bills.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(past_due, vec!["Rent"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn empty_ledger_totals_zero(pool: PgPool) {
        let due = service().due_balance(&pool, june()).await.unwrap();
        assert_eq!(due.total, Decimal::ZERO);
    }
}
