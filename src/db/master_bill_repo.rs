// src/db/master_bill_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::bills::{BillMaster, MasterBillChanges, RecurrencePattern},
};

// Novo vencimento = primeiro dia do próprio mês + (dia - 1), limitado ao fim do mês.
// Só instâncias futuras (due_date > from) e não apagadas.
pub(crate) const CASCADE_UPDATE_BILLS_SQL: &str = r#"
    UPDATE bills
    SET amount = COALESCE($3, amount),
        category = COALESCE($5, category),
        due_date = CASE
            WHEN $4::INT IS NULL THEN due_date
            ELSE date_trunc('month', due_date::timestamp)::date
                 + (LEAST(
                        $4::INT,
                        EXTRACT(DAY FROM date_trunc('month', due_date::timestamp) + INTERVAL '1 month - 1 day')::INT
                    ) - 1)
        END
    WHERE master_id = $1
      AND due_date > $2
      AND is_deleted = FALSE
"#;

pub(crate) const DELETE_BILLS_SQL: &str = r#"
    DELETE FROM bills
    WHERE master_id = $1
      AND ($2::DATE IS NULL OR due_date > $2::DATE)
"#;

const MASTER_COLUMNS: &str = r#"id, name, category, recurrence_pattern, is_active, created_at"#;

#[derive(Clone, Default)]
pub struct MasterBillRepository;

impl MasterBillRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        category: &str,
        pattern: RecurrencePattern,
    ) -> Result<BillMaster, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "INSERT INTO bill_master (name, category, recurrence_pattern) VALUES ($1, $2, $3) RETURNING {MASTER_COLUMNS}"
        );
        let master = sqlx::query_as::<_, BillMaster>(&sql)
            .bind(name)
            .bind(category)
            .bind(pattern)
            .fetch_one(executor)
            .await?;

        Ok(master)
    }

    pub async fn list_active<'e, E>(&self, executor: E) -> Result<Vec<BillMaster>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {MASTER_COLUMNS} FROM bill_master WHERE is_active = TRUE ORDER BY name ASC, id ASC"
        );
        let masters = sqlx::query_as::<_, BillMaster>(&sql)
            .fetch_all(executor)
            .await?;

        Ok(masters)
    }

    pub async fn update_category<'e, E>(
        &self,
        executor: E,
        id: i32,
        category: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE bill_master SET category = $2 WHERE id = $1")
            .bind(id)
            .bind(category)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn deactivate<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE bill_master SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Aplica valor, categoria e/ou novo dia do mês às instâncias futuras do modelo.
    pub async fn cascade_update_bills<'e, E>(
        &self,
        executor: E,
        id: i32,
        from: NaiveDate,
        changes: &MasterBillChanges,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(CASCADE_UPDATE_BILLS_SQL)
            .bind(id)
            .bind(from)
            .bind(changes.amount)
            .bind(changes.due_day.map(|d| d as i32))
            .bind(changes.category.as_deref())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Sem `from`, apaga todas as instâncias do modelo.
    pub async fn delete_bills<'e, E>(
        &self,
        executor: E,
        id: i32,
        from: Option<NaiveDate>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(DELETE_BILLS_SQL)
            .bind(id)
            .bind(from)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_only_touches_future_live_rows() {
        assert!(CASCADE_UPDATE_BILLS_SQL.contains("due_date > $2"));
        assert!(CASCADE_UPDATE_BILLS_SQL.contains("is_deleted = FALSE"));
        assert!(!CASCADE_UPDATE_BILLS_SQL.contains(">= $2"));
    }

    #[test]
    fn cascade_never_writes_to_the_master_table() {
        assert!(!CASCADE_UPDATE_BILLS_SQL.contains("bill_master"));
    }

    #[test]
    fn delete_without_from_removes_every_instance() {
        assert!(DELETE_BILLS_SQL.contains("$2::DATE IS NULL OR due_date > $2::DATE"));
    }
}
