// src/services/master_bill_service.rs

use chrono::NaiveDate;
use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::MasterBillRepository,
    models::bills::{BillMaster, MasterBillChanges},
};

#[derive(Clone)]
pub struct MasterBillService {
    repo: MasterBillRepository,
}

impl MasterBillService {
    pub fn new(repo: MasterBillRepository) -> Self {
        Self { repo }
    }

    pub async fn list_active<'e, E>(&self, executor: E) -> Result<Vec<BillMaster>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_active(executor).await
    }

    /// Propaga alterações para as instâncias com vencimento depois de `from`.
    ///
    /// Instâncias com vencimento até `from` ficam intactas. A categoria também vai
    /// para o modelo (próximas instâncias geradas); valor e dia do mês não.
    /// Modelo e instâncias mudam na mesma transação.
    pub async fn cascade_update<'e, E>(
        &self,
        executor: E,
        id: i32,
        from: NaiveDate,
        changes: MasterBillChanges,
    ) -> Result<u64, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        if let Some(category) = changes.category.as_deref() {
            self.repo.update_category(&mut *tx, id, category).await?;
        }

        let updated = self
            .repo
            .cascade_update_bills(&mut *tx, id, from, &changes)
            .await?;

        tx.commit().await?;

        tracing::info!(master_id = id, %from, updated, "Cascata aplicada às contas futuras");
        Ok(updated)
    }

    /// Desativa o modelo e apaga as instâncias (só as posteriores a `from`, se houver).
    pub async fn cascade_delete<'e, E>(
        &self,
        executor: E,
        id: i32,
        from: Option<NaiveDate>,
    ) -> Result<u64, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        self.repo.deactivate(&mut *tx, id).await?;
        let deleted = self.repo.delete_bills(&mut *tx, id, from).await?;

        tx.commit().await?;

        tracing::info!(master_id = id, ?from, deleted, "Modelo desativado");
        Ok(deleted)
    }
}
