//! `SeaORM` entities.

pub mod prelude;

pub mod budgets;
pub mod expenses;
pub mod sea_orm_active_enums;
