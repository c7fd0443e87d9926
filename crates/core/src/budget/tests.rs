//! Property-based tests for budget module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::BudgetService;
use super::types::BudgetStatus;

proptest! {
    /// Percentage stays within 0..=100 and remaining never goes negative,
    /// whatever the limit and spend.
    #[test]
    fn test_progress_is_bounded(
        amount_cents in -100_000i64..10_000_000,
        spent_cents in 0i64..20_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let spent = Decimal::new(spent_cents, 2);

        let progress = BudgetService::progress(amount, spent);

        prop_assert!(progress.percentage >= Decimal::ZERO);
        prop_assert!(progress.percentage <= Decimal::ONE_HUNDRED);
        prop_assert!(progress.remaining >= Decimal::ZERO);
        prop_assert_eq!(progress.spent, spent);
    }

    /// Spent plus remaining covers the limit exactly while under budget.
    #[test]
    fn test_remaining_complements_spent(
        amount_cents in 1i64..10_000_000,
        spent_cents in 0i64..10_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let spent = Decimal::new(spent_cents, 2);

        let progress = BudgetService::progress(amount, spent);

        if spent <= amount {
            prop_assert_eq!(progress.spent + progress.remaining, amount);
        } else {
            prop_assert_eq!(progress.remaining, Decimal::ZERO);
        }
    }

    /// Status follows the ordering of spent against the limit.
    #[test]
    fn test_status_matches_ordering(
        amount_cents in 1i64..1_000_000,
        spent_cents in 0i64..2_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let spent = Decimal::new(spent_cents, 2);

        let progress = BudgetService::progress(amount, spent);

        let expected = if spent < amount {
            BudgetStatus::UnderBudget
        } else if spent == amount {
            BudgetStatus::AtLimit
        } else {
            BudgetStatus::OverBudget
        };
        prop_assert_eq!(progress.status, expected);
        if progress.status == BudgetStatus::OverBudget {
            prop_assert_eq!(progress.percentage, Decimal::ONE_HUNDRED);
        }
    }
}
