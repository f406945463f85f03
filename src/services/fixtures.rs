// src/services/fixtures.rs
//
// Dados de teste para os testes com banco (#[sqlx::test]).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    db::{BillRepository, MasterBillRepository},
    models::bills::{NewBillSeries, RecurrencePattern},
    services::BillService,
};

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn money(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

pub fn bill_service() -> BillService {
    BillService::new(BillRepository::new(), MasterBillRepository::new())
}

/// Cria um modelo com uma instância (valor `amount`) em cada data.
pub async fn seed_series(pool: &PgPool, name: &str, category: &str, amount: &str, dates: &[&str]) -> i32 {
    let series = NewBillSeries {
        name: name.to_string(),
        category: category.to_string(),
        pattern: RecurrencePattern::Monthly,
        amount: money(amount),
        due_dates: dates.iter().map(|d| date(d)).collect(),
    };
    let created = bill_service().create_series(pool, series).await.unwrap();
    created.master.id
}

/// (vencimento, valor, categoria) de cada instância do modelo, em ordem de data.
pub async fn bill_rows(pool: &PgPool, master_id: i32) -> Vec<(NaiveDate, Decimal, String)> {
    sqlx::query_as(
        "SELECT due_date, amount, category FROM bills WHERE master_id = $1 ORDER BY due_date",
    )
    .bind(master_id)
    .fetch_all(pool)
    .await
    .unwrap()
}

/// (categoria, ativo) do modelo.
pub async fn master_row(pool: &PgPool, master_id: i32) -> (String, bool) {
    sqlx::query_as("SELECT category, is_active FROM bill_master WHERE id = $1")
        .bind(master_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
