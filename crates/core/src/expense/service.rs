//! Expense validation and in-process querying.

use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::filter::ExpenseFilter;
use super::types::{CreateExpenseInput, Expense};

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Largest storable amount: twelve integer digits and four fractional ones,
/// matching the `decimal(16, 4)` column. Sums of stored amounts stay far
/// inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x6FC0_FFFF, 0x0023_86F2, 0, false, 4);

/// Expense service for business logic.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates and normalizes a new expense.
    ///
    /// Blank descriptions collapse to `None`; surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NegativeAmount` for amounts below zero,
    /// `ExpenseError::AmountTooLarge` above [`MAX_AMOUNT`] and
    /// `ExpenseError::DescriptionTooLong` past [`MAX_DESCRIPTION_LEN`].
    pub fn validate(input: CreateExpenseInput) -> Result<CreateExpenseInput, ExpenseError> {
        if input.amount < Decimal::ZERO {
            return Err(ExpenseError::NegativeAmount(input.amount));
        }
        if input.amount > MAX_AMOUNT {
            return Err(ExpenseError::AmountTooLarge {
                amount: input.amount,
                max: MAX_AMOUNT,
            });
        }

        let description = input
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        if description
            .as_ref()
            .is_some_and(|text| text.chars().count() > MAX_DESCRIPTION_LEN)
        {
            return Err(ExpenseError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(CreateExpenseInput {
            description,
            ..input
        })
    }

    /// Orders expenses newest first: date descending, then creation time descending.
    pub fn sort_newest_first(expenses: &mut [Expense]) {
        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
    }

    /// Returns the expenses matching `filter`, newest first.
    #[must_use]
    pub fn apply_filter(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
        let mut matched: Vec<Expense> = expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        Self::sort_newest_first(&mut matched);
        matched
    }

    /// Sums the amounts of the expenses matching `filter`.
    #[must_use]
    pub fn total<'a, I>(expenses: I, filter: &ExpenseFilter) -> Decimal
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        expenses
            .into_iter()
            .filter(|e| filter.matches(e))
            .map(|e| e.amount)
            .sum()
    }
}
