//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tally_core::Category;

/// Stored expense category. Persisted as its lowercase id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "transport")]
    Transport,
    #[sea_orm(string_value = "utilities")]
    Utilities,
    #[sea_orm(string_value = "entertainment")]
    Entertainment,
    #[sea_orm(string_value = "shopping")]
    Shopping,
    #[sea_orm(string_value = "health")]
    Health,
    #[sea_orm(string_value = "travel")]
    Travel,
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<Category> for ExpenseCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Food => Self::Food,
            Category::Transport => Self::Transport,
            Category::Utilities => Self::Utilities,
            Category::Entertainment => Self::Entertainment,
            Category::Shopping => Self::Shopping,
            Category::Health => Self::Health,
            Category::Travel => Self::Travel,
            Category::Other => Self::Other,
        }
    }
}

impl From<ExpenseCategory> for Category {
    fn from(category: ExpenseCategory) -> Self {
        match category {
            ExpenseCategory::Food => Self::Food,
            ExpenseCategory::Transport => Self::Transport,
            ExpenseCategory::Utilities => Self::Utilities,
            ExpenseCategory::Entertainment => Self::Entertainment,
            ExpenseCategory::Shopping => Self::Shopping,
            ExpenseCategory::Health => Self::Health,
            ExpenseCategory::Travel => Self::Travel,
            ExpenseCategory::Other => Self::Other,
        }
    }
}
