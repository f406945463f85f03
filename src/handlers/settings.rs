// src/handlers/settings.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::settings::BankBalance,
};

// GET /api/balance
#[utoipa::path(
    get,
    path = "/api/balance",
    tag = "Settings",
    responses(
        (status = 200, description = "Saldo bancário atual", body = BankBalance)
    )
)]
pub async fn get_balance(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let balance = app_state
        .settings_repo
        .get_bank_balance(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(BankBalance { balance })))
}

// PUT /api/balance
#[utoipa::path(
    put,
    path = "/api/balance",
    tag = "Settings",
    request_body = BankBalance,
    responses(
        (status = 200, description = "Saldo gravado", body = BankBalance),
        (status = 400, description = "Saldo ausente ou não numérico")
    )
)]
pub async fn update_balance(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<BankBalance>,
) -> Result<impl IntoResponse, AppError> {
    let balance = app_state
        .settings_repo
        .set_bank_balance(&app_state.db_pool, payload.balance)
        .await?;

    Ok((StatusCode::OK, Json(BankBalance { balance })))
}
