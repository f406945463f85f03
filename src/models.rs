pub mod bills;
pub mod credit_cards;
pub mod settings;
pub mod summary;
