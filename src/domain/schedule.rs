// src/domain/schedule.rs

use chrono::{Datelike, NaiveDate};

use crate::{domain::month::Month, models::bills::RecurrencePattern};

/// Limite de instâncias geradas de uma só vez para uma conta recorrente.
pub const MAX_OCCURRENCES: u32 = 60;

impl RecurrencePattern {
    /// Distância, em meses, entre duas instâncias consecutivas.
    pub fn step_months(&self) -> u32 {
        match self {
            RecurrencePattern::Monthly => 1,
            RecurrencePattern::Quarterly => 3,
            RecurrencePattern::Yearly => 12,
            RecurrencePattern::Once => 0,
        }
    }

    pub fn default_occurrences(&self) -> u32 {
        match self {
            RecurrencePattern::Monthly => 12,
            RecurrencePattern::Quarterly => 4,
            RecurrencePattern::Yearly => 2,
            RecurrencePattern::Once => 1,
        }
    }
}

/// Coloca `day` dentro do mês, limitado ao último dia (31 em fevereiro vira 28/29).
///
/// Mesma regra usada pela cascata em SQL: `primeiro_dia + (dia - 1)`, com limite.
pub fn with_day_clamped(month: Month, day: u32) -> NaiveDate {
    let day = day.clamp(1, month.days_in_month());
    month
        .first_day()
        .with_day(day)
        .unwrap_or_else(|| month.last_day())
}

/// Datas de vencimento de uma série a partir do primeiro vencimento.
///
/// Cada instância é calculada a partir do mês base (e não da instância anterior),
/// então o dia original sobrevive a meses curtos: 31/jan, 28/fev, 31/mar.
pub fn due_dates(first_due: NaiveDate, pattern: RecurrencePattern, occurrences: u32) -> Vec<NaiveDate> {
    let occurrences = match pattern {
        RecurrencePattern::Once => 1,
        _ => occurrences.clamp(1, MAX_OCCURRENCES),
    };
    let base = Month::containing(first_due);
    let day = first_due.day();

    (0..occurrences)
        .filter_map(|k| base.plus_months(k * pattern.step_months()))
        .map(|month| with_day_clamped(month, day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn clamps_day_to_month_length() {
        assert_eq!(with_day_clamped(Month::new(2025, 2).unwrap(), 31), date(2025, 2, 28));
        assert_eq!(with_day_clamped(Month::new(2024, 2).unwrap(), 30), date(2024, 2, 29));
        assert_eq!(with_day_clamped(Month::new(2025, 7).unwrap(), 20), date(2025, 7, 20));
        assert_eq!(with_day_clamped(Month::new(2025, 7).unwrap(), 0), date(2025, 7, 1));
    }

    #[test]
    fn monthly_series_keeps_original_day() {
        let dates = due_dates(date(2025, 1, 31), RecurrencePattern::Monthly, 4);
        assert_eq!(
            dates,
            vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31), date(2025, 4, 30)]
        );
    }

    #[test]
    fn quarterly_and_yearly_steps() {
        let quarterly = due_dates(date(2025, 11, 5), RecurrencePattern::Quarterly, 3);
        assert_eq!(quarterly, vec![date(2025, 11, 5), date(2026, 2, 5), date(2026, 5, 5)]);

        let yearly = due_dates(date(2024, 2, 29), RecurrencePattern::Yearly, 2);
        assert_eq!(yearly, vec![date(2024, 2, 29), date(2025, 2, 28)]);
    }

    #[test]
    fn once_ignores_occurrences() {
        assert_eq!(due_dates(date(2025, 6, 5), RecurrencePattern::Once, 12), vec![date(2025, 6, 5)]);
    }

    #[test]
    fn occurrences_are_bounded() {
        assert_eq!(due_dates(date(2025, 6, 5), RecurrencePattern::Monthly, 0).len(), 1);
        assert_eq!(
            due_dates(date(2025, 6, 5), RecurrencePattern::Monthly, 500).len(),
            MAX_OCCURRENCES as usize
        );
    }
}
