//! Property-based tests for dashboard module.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::ExpenseId;

use super::service::DashboardService;
use crate::category::Category;
use crate::expense::Expense;

fn arb_expense() -> impl Strategy<Value = Expense> {
    (0i64..1_000_000, 0usize..8, 2024i32..=2026, 1u32..=12, 1u32..=28).prop_map(
        |(cents, category, year, month, day)| Expense {
            id: ExpenseId::new(),
            amount: Decimal::new(cents, 2),
            category: Category::ALL[category],
            description: None,
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        },
    )
}

proptest! {
    /// Monthly totals always cover Jan..Dec and add up to the year's spend.
    #[test]
    fn test_monthly_buckets_sum_to_year(
        expenses in prop::collection::vec(arb_expense(), 0..60),
        month in 1u32..=12,
    ) {
        let today = NaiveDate::from_ymd_opt(2025, month, 15).unwrap();

        let months = DashboardService::monthly_totals(&expenses, today);

        prop_assert_eq!(months.len(), 12);
        for (index, bucket) in months.iter().enumerate() {
            prop_assert_eq!(bucket.month as usize, index + 1);
        }

        let bucket_sum: Decimal = months.iter().map(|m| m.amount).sum();
        let year_sum: Decimal = expenses
            .iter()
            .filter(|e| e.date.year() == 2025)
            .map(|e| e.amount)
            .sum();
        prop_assert_eq!(bucket_sum, year_sum);
    }

    /// Category groups are sorted descending and add up to the month total.
    #[test]
    fn test_category_totals_sorted_and_complete(
        expenses in prop::collection::vec(arb_expense(), 0..60),
        month in 1u32..=12,
    ) {
        let today = NaiveDate::from_ymd_opt(2025, month, 10).unwrap();

        let totals = DashboardService::category_totals(&expenses, today);
        let summary = DashboardService::summary(&expenses, today);

        for pair in totals.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
        let group_sum: Decimal = totals.iter().map(|t| t.value).sum();
        prop_assert_eq!(group_sum, summary.current_month);

        match totals.first() {
            Some(first) => prop_assert_eq!(&summary.top_category.name, &first.name),
            None => prop_assert_eq!(summary.top_category.name.as_str(), "none"),
        }
    }
}
