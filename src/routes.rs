// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::cors::cors_middleware};

pub fn build_router(app_state: AppState) -> Router {
    let bill_routes = Router::new()
        .route("/"
               ,get(handlers::bills::list_bills)
               .post(handlers::bills::create_bill)
        )
        .route("/{id}"
               ,patch(handlers::bills::update_bill)
               .delete(handlers::bills::delete_bill)
        );

    let master_bill_routes = Router::new()
        .route("/", get(handlers::master_bills::list_master_bills))
        .route("/{id}"
               ,patch(handlers::master_bills::update_master_bill)
               .delete(handlers::master_bills::delete_master_bill)
        );

    let credit_card_routes = Router::new()
        .route("/"
               ,get(handlers::credit_cards::list_credit_cards)
               .post(handlers::credit_cards::create_credit_card)
        )
        // Rota estática tem prioridade sobre o parâmetro
        .route("/reorder", patch(handlers::credit_cards::reorder_credit_cards))
        .route("/{id}"
               ,patch(handlers::credit_cards::update_credit_card)
               .delete(handlers::credit_cards::delete_credit_card)
        );

    let api_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/balance"
               ,get(handlers::settings::get_balance)
               .put(handlers::settings::update_balance)
        )
        .route("/due-balance", get(handlers::summary::get_due_balance))
        .route("/summary", get(handlers::summary::get_summary))
        .nest("/bills", bill_routes)
        .nest("/master-bills", master_bill_routes)
        .nest("/credit_cards", credit_card_routes);

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state)
}
