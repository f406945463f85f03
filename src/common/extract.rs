// src/common/extract.rs

use axum::extract::FromRequest;

use crate::common::error::AppError;

/// `Json` com rejeição convertida em `AppError`, para que todo erro saia como `{ "error": ... }`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Ids chegam como texto no path; qualquer coisa não numérica é 400.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation(format!("Invalid id '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("4.2").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
    }
}
