// src/handlers/credit_cards.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::{parse_id, AppJson},
    },
    config::AppState,
    models::{
        bills::UpdatedCount,
        credit_cards::{CreateCreditCardPayload, CreditCard, ReorderCardsPayload, UpdateCreditCardPayload},
    },
};

// GET /api/credit_cards
#[utoipa::path(
    get,
    path = "/api/credit_cards",
    tag = "Credit Cards",
    responses(
        (status = 200, description = "Cartões em ordem de exibição", body = Vec<CreditCard>)
    )
)]
pub async fn list_credit_cards(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cards = app_state
        .credit_card_service
        .list(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(cards)))
}

// POST /api/credit_cards
#[utoipa::path(
    post,
    path = "/api/credit_cards",
    tag = "Credit Cards",
    request_body = CreateCreditCardPayload,
    responses(
        (status = 201, description = "Cartão criado", body = CreditCard),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_credit_card(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateCreditCardPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let card = app_state
        .credit_card_service
        .create(&app_state.db_pool, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(card)))
}

// PATCH /api/credit_cards/{id}
#[utoipa::path(
    patch,
    path = "/api/credit_cards/{id}",
    tag = "Credit Cards",
    request_body = UpdateCreditCardPayload,
    params(("id" = i32, Path, description = "ID do cartão")),
    responses(
        (status = 200, description = "Quantidade de linhas alteradas", body = UpdatedCount),
        (status = 400, description = "Id ou dados inválidos")
    )
)]
pub async fn update_credit_card(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateCreditCardPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    payload.ensure_not_empty()?;
    payload.validate()?;

    let updated = app_state
        .credit_card_service
        .update(&app_state.db_pool, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCount { updated })))
}

// DELETE /api/credit_cards/{id}
#[utoipa::path(
    delete,
    path = "/api/credit_cards/{id}",
    tag = "Credit Cards",
    params(("id" = i32, Path, description = "ID do cartão")),
    responses(
        (status = 200, description = "Quantidade de linhas removidas", body = UpdatedCount),
        (status = 400, description = "Id inválido")
    )
)]
pub async fn delete_credit_card(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let updated = app_state
        .credit_card_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCount { updated })))
}

// PATCH /api/credit_cards/reorder
#[utoipa::path(
    patch,
    path = "/api/credit_cards/reorder",
    tag = "Credit Cards",
    request_body = ReorderCardsPayload,
    responses(
        (status = 200, description = "Nova ordem gravada", body = UpdatedCount),
        (status = 400, description = "Lista vazia ou posição negativa")
    )
)]
pub async fn reorder_credit_cards(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ReorderCardsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let cards = payload.validated()?;

    let updated = app_state
        .credit_card_service
        .reorder(&app_state.db_pool, &cards)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCount { updated })))
}
