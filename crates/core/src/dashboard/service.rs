//! Dashboard aggregation over fetched expenses.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{CATEGORY_PALETTE, CategoryTotal, ExpenseSummary, MonthlyTotal, TopCategory};
use crate::calendar::{self, DateRange};
use crate::category::Category;
use crate::expense::{Expense, ExpenseFilter, ExpenseService};

/// Service for dashboard aggregates.
///
/// Every function takes the reference day explicitly and ignores expenses
/// outside the window it reports on, so callers may pass a wider set.
pub struct DashboardService;

impl DashboardService {
    /// Twelve buckets, January through December, for the year of `today`.
    #[must_use]
    pub fn monthly_totals(expenses: &[Expense], today: NaiveDate) -> Vec<MonthlyTotal> {
        let year = calendar::year_window(today);
        let mut buckets = [Decimal::ZERO; 12];

        for expense in expenses.iter().filter(|e| year.contains(e.date)) {
            if let Some(bucket) = usize::try_from(expense.date.month0())
                .ok()
                .and_then(|index| buckets.get_mut(index))
            {
                *bucket += expense.amount;
            }
        }

        (1..=12)
            .zip(buckets)
            .map(|(month, amount)| MonthlyTotal {
                month,
                label: calendar::month_label(month).to_string(),
                amount: amount.normalize(),
            })
            .collect()
    }

    /// Per-category totals for the month of `today`, biggest first.
    ///
    /// Ties are ordered by category id. Colors follow position in the list.
    #[must_use]
    pub fn category_totals(expenses: &[Expense], today: NaiveDate) -> Vec<CategoryTotal> {
        Self::ranked_categories(expenses, calendar::month_window(today))
            .into_iter()
            .enumerate()
            .map(|(position, (category, value))| CategoryTotal {
                name: category.id().to_string(),
                label: category.display_name().to_string(),
                value: value.normalize(),
                color: CATEGORY_PALETTE[position % CATEGORY_PALETTE.len()].to_string(),
            })
            .collect()
    }

    /// Headline figures relative to `today`.
    #[must_use]
    pub fn summary(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
        let current_window = calendar::month_window(today);
        let current_month = ExpenseService::total(expenses, &ExpenseFilter::within(current_window));
        let previous_month = ExpenseService::total(
            expenses,
            &ExpenseFilter::within(calendar::previous_month_window(today)),
        );
        let year_to_date =
            ExpenseService::total(expenses, &ExpenseFilter::within(calendar::year_to_date(today)));

        let top_category = Self::ranked_categories(expenses, current_window)
            .into_iter()
            .next()
            .map_or_else(TopCategory::none, |(category, amount)| TopCategory {
                name: category.id().to_string(),
                amount: amount.normalize(),
            });

        ExpenseSummary {
            current_month: current_month.normalize(),
            previous_month: previous_month.normalize(),
            monthly_change: Self::monthly_change(previous_month, current_month),
            daily_average: Self::daily_average(current_month, today),
            year_to_date: year_to_date.normalize(),
            top_category,
        }
    }

    /// Month-over-month change in percent. A drop in spending is positive.
    #[must_use]
    pub fn monthly_change(previous: Decimal, current: Decimal) -> Decimal {
        if previous.is_zero() {
            return Decimal::ZERO;
        }
        (previous - current)
            .checked_div(previous)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
            .round_dp(2)
            .normalize()
    }

    /// Spend per elapsed day of the month, two decimal places.
    #[must_use]
    pub fn daily_average(month_total: Decimal, today: NaiveDate) -> Decimal {
        let days = Decimal::from(today.day().max(1));
        (month_total / days).round_dp(2).normalize()
    }

    fn ranked_categories(expenses: &[Expense], window: DateRange) -> Vec<(Category, Decimal)> {
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
        for expense in expenses.iter().filter(|e| window.contains(e.date)) {
            *totals.entry(expense.category).or_insert(Decimal::ZERO) += expense.amount;
        }

        let mut ranked: Vec<(Category, Decimal)> = totals.into_iter().collect();
        ranked.sort_by(|(a_cat, a_total), (b_cat, b_total)| {
            b_total.cmp(a_total).then_with(|| a_cat.id().cmp(b_cat.id()))
        });
        ranked
    }
}
