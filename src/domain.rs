// src/domain.rs
//
// Regras puras de calendário e totais (sem banco, sem HTTP).

pub mod month;
pub mod schedule;
pub mod totals;

pub use month::Month;
