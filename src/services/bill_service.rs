// src/services/bill_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::{BillRepository, MasterBillRepository},
    domain::Month,
    models::bills::{Bill, BillChanges, BillsView, CreatedBillSeries, NewBillSeries},
};

#[derive(Clone)]
pub struct BillService {
    repo: BillRepository,
    master_repo: MasterBillRepository,
}

impl BillService {
    pub fn new(repo: BillRepository, master_repo: MasterBillRepository) -> Self {
        Self { repo, master_repo }
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
        self.repo.list_for_month(executor, month, view).await
    }

    /// Cria o modelo e todas as instâncias agendadas, tudo ou nada.
    pub async fn create_series<'e, E>(
        &self,
        executor: E,
        series: NewBillSeries,
    ) -> Result<CreatedBillSeries, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let master = self
            .master_repo
            .create(&mut *tx, &series.name, &series.category, series.pattern)
            .await?;

        let mut bills = Vec::with_capacity(series.due_dates.len());
        for due_date in &series.due_dates {
            let bill = self
                .repo
                .insert(&mut *tx, master.id, series.amount, *due_date)
                .await?;
            bills.push(bill);
        }

        tx.commit().await?;

        tracing::info!(
            master_id = master.id,
            instances = bills.len(),
            "Conta recorrente criada"
        );

        Ok(CreatedBillSeries { master, bills })
    }

    pub async fn update_bill<'e, E>(
        &self,
        executor: E,
        id: i32,
        changes: BillChanges,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, &changes).await
    }

    pub async fn delete_bill<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.soft_delete(executor, id).await
    }
}
