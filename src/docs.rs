// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Bills ---
        handlers::bills::list_bills,
        handlers::bills::create_bill,
        handlers::bills::update_bill,
        handlers::bills::delete_bill,

        // --- Master Bills ---
        handlers::master_bills::list_master_bills,
        handlers::master_bills::update_master_bill,
        handlers::master_bills::delete_master_bill,

        // --- Credit Cards ---
        handlers::credit_cards::list_credit_cards,
        handlers::credit_cards::create_credit_card,
        handlers::credit_cards::update_credit_card,
        handlers::credit_cards::delete_credit_card,
        handlers::credit_cards::reorder_credit_cards,

        // --- Settings ---
        handlers::settings::get_balance,
        handlers::settings::update_balance,

        // --- Summary ---
        handlers::summary::get_due_balance,
        handlers::summary::get_summary,
    ),
    components(
        schemas(
            // --- Bills ---
            models::bills::RecurrencePattern,
            models::bills::BillMaster,
            models::bills::Bill,
            models::bills::CreatedBillSeries,
            models::bills::UpdatedCount,
            models::bills::CreateBillPayload,
            models::bills::UpdateBillPayload,
            models::bills::MasterBillPatch,

            // --- Credit Cards ---
            models::credit_cards::CreditCard,
            models::credit_cards::CreateCreditCardPayload,
            models::credit_cards::UpdateCreditCardPayload,
            models::credit_cards::CardPosition,
            models::credit_cards::ReorderCardsPayload,

            // --- Settings ---
            models::settings::BankBalance,

            // --- Summary ---
            models::summary::DueBalance,
            models::summary::MonthSummary,
        )
    ),
    tags(
        (name = "Bills", description = "Contas e suas instâncias mensais"),
        (name = "Master Bills", description = "Modelos de contas recorrentes (cascata para as instâncias futuras)"),
        (name = "Credit Cards", description = "Cartões de crédito e ordenação"),
        (name = "Settings", description = "Saldo bancário"),
        (name = "Summary", description = "Saldo devido e totais do painel")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/bills",
            "/api/bills/{id}",
            "/api/master-bills",
            "/api/master-bills/{id}",
            "/api/credit_cards",
            "/api/credit_cards/{id}",
            "/api/credit_cards/reorder",
            "/api/balance",
            "/api/due-balance",
            "/api/summary",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
