// src/domain/totals.rs
//
// Regras de "quanto devo" ancoradas em um mês. A consulta de /due-balance
// (db/summary_repo.rs) aplica a mesma regra em SQL, com o mês como parâmetro.

use rust_decimal::Decimal;

use crate::{
    domain::month::Month,
    models::{bills::Bill, credit_cards::CreditCard, summary::MonthSummary},
};

/// Categoria que entra no saldo devido independentemente da data.
pub const BILL_PREP_CATEGORY: &str = "bill prep";

// Mesma dobra de caixa do LOWER() do Postgres, não só ASCII
pub fn is_bill_prep(category: &str) -> bool {
    category.to_lowercase() == BILL_PREP_CATEGORY
}

/// Não pagas, fora de "bill prep", com vencimento antes do mês exibido.
pub fn past_due_bills(bills: &[Bill], month: Month) -> Vec<&Bill> {
    bills
        .iter()
        .filter(|b| !b.is_paid && !is_bill_prep(&b.category) && month.is_before(b.due_date))
        .collect()
}

/// Soma das não pagas que vencem dentro do mês exibido.
pub fn current_due_amount(bills: &[Bill], month: Month) -> Decimal {
    bills
        .iter()
        .filter(|b| !b.is_paid && month.contains(b.due_date))
        .map(|b| b.amount)
        .sum()
}

pub fn included_card_total(cards: &[CreditCard]) -> Decimal {
    cards
        .iter()
        .filter(|c| c.include_in_due_balance)
        .map(|c| c.balance)
        .sum()
}

/// Parte das contas no saldo devido: vencidas, do mês, ou "bill prep" (qualquer data).
pub fn bill_due_total(bills: &[Bill], month: Month) -> Decimal {
    bills
        .iter()
        .filter(|b| !b.is_paid)
        .filter(|b| month.is_before(b.due_date) || month.contains(b.due_date) || is_bill_prep(&b.category))
        .map(|b| b.amount)
        .sum()
}

pub fn due_balance_total(bills: &[Bill], cards: &[CreditCard], month: Month) -> Decimal {
    bill_due_total(bills, month) + included_card_total(cards)
}

pub fn net_position(bank_balance: Decimal, current_due: Decimal, included_cards: Decimal) -> Decimal {
    bank_balance - (current_due + included_cards)
}

pub fn summarize(bills: &[Bill], cards: &[CreditCard], bank_balance: Decimal, month: Month) -> MonthSummary {
    let current_due_amt = current_due_amount(bills, month);
    let included_credit_card_total = included_card_total(cards);

    MonthSummary {
        month,
        previous_month: month.previous(),
        next_month: month.next(),
        past_due_bills: past_due_bills(bills, month).into_iter().cloned().collect(),
        current_due_amt,
        included_credit_card_total,
        due_balance_total: due_balance_total(bills, cards, month),
        bank_balance,
        net_position: net_position(bank_balance, current_due_amt, included_credit_card_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(id: i32, amount: i64, due: NaiveDate, is_paid: bool, category: &str) -> Bill {
        Bill {
            id,
            master_id: id,
            name: format!("bill-{id}"),
            category: category.to_string(),
            amount: Decimal::from(amount),
            due_date: due,
            is_paid,
        }
    }

    fn card(id: i32, balance: i64, include: bool) -> CreditCard {
        CreditCard {
            id,
            name: format!("card-{id}"),
            balance: Decimal::from(balance),
            sort_order: id,
            include_in_due_balance: include,
        }
    }

    fn june() -> Month {
        Month::new(2025, 6).unwrap()
    }

    #[test]
    fn bill_prep_matches_case_insensitively() {
        assert!(is_bill_prep("Bill Prep"));
        assert!(is_bill_prep("BILL PREP"));
        assert!(!is_bill_prep("bill preparation"));
        assert!(!is_bill_prep("Rent"));
    }

    // Deve concordar com LOWER(category) = 'bill prep' do SQL
    #[test]
    fn bill_prep_uses_unicode_lowercase_folding() {
        for category in ["Bill Prep", "bILL pREP", "BİLL PREP", "Bill Prép", "bill prep "] {
            assert_eq!(
                is_bill_prep(category),
                category.to_lowercase() == BILL_PREP_CATEGORY,
                "{category}"
            );
        }
        assert!(!is_bill_prep("BİLL PREP"));
    }

    #[test]
    fn past_due_skips_paid_bill_prep_and_current() {
        let bills = vec![
            bill(1, 100, date(2025, 5, 1), false, "Rent"),
            bill(2, 10, date(2025, 5, 2), true, "Rent"),
            bill(3, 20, date(2025, 4, 2), false, "bill prep"),
            bill(4, 30, date(2025, 6, 1), false, "Phone"),
        ];
        let ids: Vec<i32> = past_due_bills(&bills, june()).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn current_due_only_counts_unpaid_in_month() {
        let bills = vec![
            bill(1, 100, date(2025, 6, 1), false, "Rent"),
            bill(2, 40, date(2025, 6, 30), false, "Bill Prep"),
            bill(3, 10, date(2025, 6, 15), true, "Phone"),
            bill(4, 70, date(2025, 7, 1), false, "Phone"),
            bill(5, 70, date(2025, 5, 31), false, "Phone"),
        ];
        assert_eq!(current_due_amount(&bills, june()), Decimal::from(140));
    }

    #[test]
    fn bill_prep_far_in_the_future_still_counts() {
        let bills = vec![bill(1, 75, date(2030, 1, 1), false, "Bill Prep")];
        assert_eq!(bill_due_total(&bills, june()), Decimal::from(75));
        assert_eq!(current_due_amount(&bills, june()), Decimal::ZERO);

        let paid = vec![bill(1, 75, date(2030, 1, 1), true, "Bill Prep")];
        assert_eq!(bill_due_total(&paid, june()), Decimal::ZERO);
    }

    #[test]
    fn future_regular_bills_are_not_due() {
        let bills = vec![bill(1, 75, date(2025, 7, 1), false, "Rent")];
        assert_eq!(due_balance_total(&bills, &[], june()), Decimal::ZERO);
    }

    #[test]
    fn excluded_cards_do_not_count() {
        let cards = vec![card(1, 200, true), card(2, 999, false), card(3, 50, true)];
        assert_eq!(included_card_total(&cards), Decimal::from(250));
    }

    #[test]
    fn end_to_end_with_bill_prep_outside_displayed_month() {
        let bills = vec![
            bill(1, 100, date(2025, 5, 10), false, "Rent"),
            bill(2, 50, date(2025, 7, 3), false, "Bill Prep"),
        ];
        let cards = vec![card(1, 200, true)];
        let summary = summarize(&bills, &cards, Decimal::from(500), june());

        assert_eq!(summary.past_due_bills, vec![bills[0].clone()]);
        assert_eq!(summary.current_due_amt, Decimal::ZERO);
        assert_eq!(summary.due_balance_total, Decimal::from(350));
        assert_eq!(summary.net_position, Decimal::from(300));
    }

    #[test]
    fn end_to_end_with_bill_prep_inside_displayed_month() {
        let bills = vec![
            bill(1, 100, date(2025, 5, 10), false, "Rent"),
            bill(2, 50, date(2025, 6, 3), false, "Bill Prep"),
        ];
        let cards = vec![card(1, 200, true)];
        let summary = summarize(&bills, &cards, Decimal::from(500), june());

        assert_eq!(summary.past_due_bills.len(), 1);
        assert_eq!(summary.current_due_amt, Decimal::from(50));
        assert_eq!(summary.due_balance_total, Decimal::from(350));
        assert_eq!(summary.net_position, Decimal::from(250));
        assert_eq!(summary.previous_month, Month::new(2025, 5).unwrap());
        assert_eq!(summary.next_month, Month::new(2025, 7).unwrap());
    }

    #[test]
    fn net_position_identity() {
        let bills = vec![
            bill(1, 120, date(2025, 6, 5), false, "Rent"),
            bill(2, 33, date(2025, 6, 9), false, "Gym"),
            bill(3, 80, date(2025, 3, 9), false, "Water"),
            bill(4, 15, date(2025, 6, 12), true, "Phone"),
        ];
        let cards = vec![card(1, 400, true), card(2, 60, false)];

        for bank in [-250, 0, 153, 10_000] {
            let bank = Decimal::from(bank);
            let s = summarize(&bills, &cards, bank, june());
            assert_eq!(
                s.net_position,
                bank - s.current_due_amt - s.included_credit_card_total
            );
        }
    }
}
