pub mod bill_service;
pub mod credit_card_service;
pub mod master_bill_service;
pub mod summary_service;

pub use bill_service::BillService;
pub use credit_card_service::CreditCardService;
pub use master_bill_service::MasterBillService;
pub use summary_service::SummaryService;

#[cfg(test)]
pub(crate) mod fixtures;
