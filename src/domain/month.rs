// src/domain/month.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, Months, NaiveDate};
use serde::{Serialize, Serializer};

use crate::common::error::AppError;

/// Cursor de mês de calendário ("YYYY-MM").
///
/// É a âncora de todos os cálculos de vencimento: o que está "vencido" ou
/// "a vencer" depende do mês exibido, não necessariamente do mês corrente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Valida via chrono (ano fora do intervalo suportado também falha)
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Mês que contém a data informada.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Mês corrente segundo o relógio local do servidor.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn first_day(&self) -> NaiveDate {
        // Invariante garantida pelos construtores
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Volta exatamente um mês de calendário.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Avança exatamente um mês de calendário.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn plus_months(&self, months: u32) -> Option<Self> {
        self.first_day()
            .checked_add_months(Months::new(months))
            .map(Self::containing)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn is_before(&self, date: NaiveDate) -> bool {
        date < self.first_day()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::Validation(format!("Invalid month '{s}', expected YYYY-MM"));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Month::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aceita "YYYY-MM-DD" ou um timestamp RFC 3339 (o front envia os dois formatos).
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| AppError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_and_formats_year_month() {
        let month: Month = "2025-06".parse().unwrap();
        assert_eq!(month, Month::new(2025, 6).unwrap());
        assert_eq!(month.to_string(), "2025-06");
        assert_eq!(serde_json::to_string(&month).unwrap(), r#""2025-06""#);
    }

    #[test]
    fn rejects_malformed_months() {
        for raw in ["", "2025", "2025-13", "2025-00", "25-06", "2025-6", "abcd-ef", "2025-06-01"] {
            assert!(raw.parse::<Month>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let january = Month::new(2025, 1).unwrap();
        assert_eq!(january.previous(), Month::new(2024, 12).unwrap());
        assert_eq!(january.previous().next(), january);

        let december = Month::new(2024, 12).unwrap();
        assert_eq!(december.next(), Month::new(2025, 1).unwrap());
        assert_eq!(december.plus_months(14), Month::new(2026, 2));
    }

    #[test]
    fn month_bounds() {
        let feb_leap = Month::new(2024, 2).unwrap();
        assert_eq!(feb_leap.first_day(), date(2024, 2, 1));
        assert_eq!(feb_leap.last_day(), date(2024, 2, 29));
        assert_eq!(Month::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(Month::new(2025, 12).unwrap().last_day(), date(2025, 12, 31));
    }

    #[test]
    fn contains_and_is_before() {
        let june = Month::new(2025, 6).unwrap();
        assert!(june.contains(date(2025, 6, 1)));
        assert!(june.contains(date(2025, 6, 30)));
        assert!(!june.contains(date(2024, 6, 15)));
        assert!(june.is_before(date(2025, 5, 31)));
        assert!(!june.is_before(date(2025, 6, 1)));
    }

    #[test]
    fn parses_plain_and_timestamp_dates() {
        assert_eq!(parse_date("2025-06-20").unwrap(), date(2025, 6, 20));
        assert_eq!(parse_date("2025-06-20T00:00:00.000Z").unwrap(), date(2025, 6, 20));
        assert!(parse_date("20/06/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }
}
