//! Budget validation and progress computation.

use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{Budget, BudgetProgress, BudgetStatus, CreateBudgetInput, UpdateBudgetInput};
use crate::expense::{Expense, ExpenseService, MAX_AMOUNT};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Validates and normalizes a new budget.
    ///
    /// The date range is not checked: an inverted range is accepted and simply
    /// never matches an expense.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EmptyName` for a blank name,
    /// `BudgetError::NonPositiveAmount` for a limit of zero or less and
    /// `BudgetError::AmountTooLarge` above [`MAX_AMOUNT`].
    pub fn validate_create(input: CreateBudgetInput) -> Result<CreateBudgetInput, BudgetError> {
        let name = Self::validate_name(&input.name)?;
        Self::validate_amount(input.amount)?;

        Ok(CreateBudgetInput { name, ..input })
    }

    /// Applies a partial update and re-validates the merged budget.
    ///
    /// `updated_at` is left for the caller to stamp.
    ///
    /// # Errors
    ///
    /// Same rules as [`Self::validate_create`].
    pub fn apply_update(budget: &Budget, update: UpdateBudgetInput) -> Result<Budget, BudgetError> {
        let name = match update.name {
            Some(name) => Self::validate_name(&name)?,
            None => budget.name.clone(),
        };

        let amount = update.amount.unwrap_or(budget.amount);
        Self::validate_amount(amount)?;

        Ok(Budget {
            id: budget.id,
            name,
            amount,
            category: update.category.unwrap_or(budget.category),
            start_date: update.start_date.unwrap_or(budget.start_date),
            end_date: update.end_date.unwrap_or(budget.end_date),
            created_at: budget.created_at,
            updated_at: budget.updated_at,
        })
    }

    /// Computes progress from the expenses that fall inside the budget's
    /// range and category scope. Other records in `expenses` are ignored.
    #[must_use]
    pub fn calculate_progress(budget: &Budget, expenses: &[Expense]) -> BudgetProgress {
        let spent = ExpenseService::total(expenses, &budget.expense_filter());
        Self::progress(budget.amount, spent)
    }

    /// Computes progress from a limit and an already-summed spend.
    ///
    /// A limit of zero or less reports 100% once anything is spent and 0%
    /// otherwise, instead of dividing by zero.
    #[must_use]
    pub fn progress(amount: Decimal, spent: Decimal) -> BudgetProgress {
        let remaining = (amount - spent).max(Decimal::ZERO);

        let percentage = if amount <= Decimal::ZERO {
            if spent > Decimal::ZERO {
                Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            }
        } else {
            spent
                .checked_div(amount)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ONE_HUNDRED)
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
                .round_dp(2)
                .normalize()
        };

        let status = match spent.cmp(&amount) {
            std::cmp::Ordering::Less => BudgetStatus::UnderBudget,
            std::cmp::Ordering::Equal => BudgetStatus::AtLimit,
            std::cmp::Ordering::Greater => BudgetStatus::OverBudget,
        };

        BudgetProgress {
            spent: spent.normalize(),
            remaining: remaining.normalize(),
            percentage,
            status,
        }
    }

    fn validate_name(name: &str) -> Result<String, BudgetError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BudgetError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    fn validate_amount(amount: Decimal) -> Result<(), BudgetError> {
        if amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(BudgetError::AmountTooLarge {
                amount,
                max: MAX_AMOUNT,
            });
        }
        Ok(())
    }
}
