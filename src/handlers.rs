pub mod bills;
pub mod credit_cards;
pub mod master_bills;
pub mod settings;
pub mod summary;
