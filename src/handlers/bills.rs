// src/handlers/bills.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        error::AppError,
        extract::{parse_id, AppJson},
    },
    config::AppState,
    domain::Month,
    models::bills::{
        Bill, BillsQuery, BillsView, CreateBillPayload, CreatedBillSeries, UpdateBillPayload, UpdatedCount,
    },
};

// GET /api/bills?month=YYYY-MM[&view=current_and_overdue]
#[utoipa::path(
    get,
    path = "/api/bills",
    tag = "Bills",
    params(BillsQuery),
    responses(
        (status = 200, description = "Contas do mês (e, opcionalmente, as vencidas em aberto)", body = Vec<Bill>),
        (status = 400, description = "Mês ausente ou inválido")
    )
)]
pub async fn list_bills(
    State(app_state): State<AppState>,
    Query(query): Query<BillsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let month: Month = query
        .month
        .as_deref()
        .ok_or_else(|| AppError::Validation("month query parameter is required (YYYY-MM)".to_string()))?
        .parse()?;
    let view = BillsView::from_query(query.view.as_deref());

    let bills = app_state
        .bill_service
        .list_for_month(&app_state.db_pool, month, view)
        .await?;

    Ok((StatusCode::OK, Json(bills)))
}

// POST /api/bills
#[utoipa::path(
    post,
    path = "/api/bills",
    tag = "Bills",
    request_body = CreateBillPayload,
    responses(
        (status = 201, description = "Modelo criado com as instâncias agendadas", body = CreatedBillSeries),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_bill(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateBillPayload>,
) -> Result<impl IntoResponse, AppError> {
    let series = payload.into_series()?;

    let created = app_state
        .bill_service
        .create_series(&app_state.db_pool, series)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// PATCH /api/bills/{id}
#[utoipa::path(
    patch,
    path = "/api/bills/{id}",
    tag = "Bills",
    request_body = UpdateBillPayload,
    params(("id" = i32, Path, description = "ID da conta")),
    responses(
        (status = 200, description = "Quantidade de linhas alteradas", body = UpdatedCount),
        (status = 400, description = "Id ou dados inválidos")
    )
)]
pub async fn update_bill(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateBillPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let changes = payload.into_changes()?;

    let updated = app_state
        .bill_service
        .update_bill(&app_state.db_pool, id, changes)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCount { updated })))
}

// DELETE /api/bills/{id} (soft delete)
#[utoipa::path(
    delete,
    path = "/api/bills/{id}",
    tag = "Bills",
    params(("id" = i32, Path, description = "ID da conta")),
    responses(
        (status = 200, description = "Quantidade de linhas marcadas como apagadas", body = UpdatedCount),
        (status = 400, description = "Id inválido")
    )
)]
pub async fn delete_bill(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let updated = app_state
        .bill_service
        .delete_bill(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCount { updated })))
}
