pub mod bill_repo;
pub use bill_repo::BillRepository;
pub mod master_bill_repo;
pub use master_bill_repo::MasterBillRepository;
pub mod credit_card_repo;
pub use credit_card_repo::CreditCardRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
pub mod summary_repo;
pub use summary_repo::SummaryRepository;
