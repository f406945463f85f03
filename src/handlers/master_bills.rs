// src/handlers/master_bills.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    common::{
        error::AppError,
        extract::{parse_id, AppJson},
    },
    config::AppState,
    domain::month::parse_date,
    models::bills::{BillMaster, CascadeQuery, MasterBillPatch, UpdatedCount},
};

// GET /api/master-bills
#[utoipa::path(
    get,
    path = "/api/master-bills",
    tag = "Master Bills",
    responses(
        (status = 200, description = "Modelos de contas ativos", body = Vec<BillMaster>)
    )
)]
pub async fn list_master_bills(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let masters = app_state
        .master_bill_service
        .list_active(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(masters)))
}

// PATCH /api/master-bills/{id}?from=YYYY-MM-DD
#[utoipa::path(
    patch,
    path = "/api/master-bills/{id}",
    tag = "Master Bills",
    request_body = MasterBillPatch,
    params(
        ("id" = i32, Path, description = "ID do modelo"),
        CascadeQuery
    ),
    responses(
        (status = 200, description = "Instâncias futuras alteradas", body = UpdatedCount),
        (status = 400, description = "Id inválido ou nenhum campo informado")
    )
)]
pub async fn update_master_bill(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CascadeQuery>,
    AppJson(payload): AppJson<MasterBillPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let changes = payload.into_changes()?;

    // Sem `from`, "daqui pra frente" é a partir de hoje
    let from = match query.from.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let updated = app_state
        .master_bill_service
        .cascade_update(&app_state.db_pool, id, from, changes)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCount { updated })))
}

// DELETE /api/master-bills/{id}?from=YYYY-MM-DD
#[utoipa::path(
    delete,
    path = "/api/master-bills/{id}",
    tag = "Master Bills",
    params(
        ("id" = i32, Path, description = "ID do modelo"),
        CascadeQuery
    ),
    responses(
        (status = 204, description = "Modelo desativado e instâncias removidas"),
        (status = 400, description = "Id inválido")
    )
)]
pub async fn delete_master_bill(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CascadeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    // `from` inválido = apaga todas as instâncias
    let from = query.from.as_deref().and_then(|raw| parse_date(raw).ok());

    app_state
        .master_bill_service
        .cascade_delete(&app_state.db_pool, id, from)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
