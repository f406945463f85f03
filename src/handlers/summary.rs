// src/handlers/summary.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    domain::Month,
    models::summary::{DueBalance, MonthSummary, SummaryQuery},
};

// GET /api/due-balance
#[utoipa::path(
    get,
    path = "/api/due-balance",
    tag = "Summary",
    responses(
        (status = 200, description = "Contas vencidas, do mês corrente e 'bill prep' + cartões incluídos", body = DueBalance)
    )
)]
pub async fn get_due_balance(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let due = app_state
        .summary_service
        .due_balance(&app_state.db_pool, Month::current())
        .await?;

    Ok((StatusCode::OK, Json(due)))
}

// GET /api/summary?month=YYYY-MM
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "Summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Totais do painel para o mês exibido", body = MonthSummary),
        (status = 400, description = "Mês inválido")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let month = match query.month.as_deref() {
        Some(raw) => raw.parse::<Month>()?,
        None => Month::current(),
    };

    let summary = app_state
        .summary_service
        .month_summary(&app_state.db_pool, month)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}
