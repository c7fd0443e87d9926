//! Demo data seeder for Tally development.
//!
//! Seeds ninety days of expenses ending today plus two budgets for the
//! current month. Does nothing if the store already holds expenses.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use tally_core::Category;
use tally_core::budget::CreateBudgetInput;
use tally_core::calendar;
use tally_core::expense::CreateExpenseInput;
use tally_db::migration::{Migrator, MigratorTrait};
use tally_db::{BudgetRepository, ExpenseRepository, connect_with};
use tally_shared::AppConfig;

/// Days of history to generate.
const HISTORY_DAYS: u64 = 90;

/// Descriptions paired with each category, in `Category::ALL` order.
const DESCRIPTIONS: [&str; 8] = [
    "Groceries",
    "Transit pass top-up",
    "Electricity bill",
    "Cinema tickets",
    "New shoes",
    "Pharmacy",
    "Weekend trip deposit",
    "Miscellaneous",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None).await.context("Failed to run migrations")?;

    let expenses = ExpenseRepository::new(db.clone());
    if expenses.count().await? > 0 {
        println!("  Expenses already present, skipping...");
        return Ok(());
    }

    let today = Utc::now().date_naive();

    println!("Seeding expenses...");
    let created = seed_expenses(&expenses, today).await?;
    println!("  {created} expenses created");

    println!("Seeding budgets...");
    seed_budgets(&BudgetRepository::new(db.clone()), today).await?;

    db.close().await?;
    println!("Seeding complete!");
    Ok(())
}

/// One or two expenses per day, cycling through every category.
async fn seed_expenses(repo: &ExpenseRepository, today: NaiveDate) -> anyhow::Result<u64> {
    let mut created = 0;

    for offset in 0..HISTORY_DAYS {
        let Some(date) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };

        let per_day = if offset % 3 == 0 { 2 } else { 1 };
        for slot in 0..per_day {
            let index = usize::try_from((offset + slot) % 8).unwrap_or_default();
            let category = Category::ALL[index];
            // Whole and half units only: 5.00 through 124.50.
            let halves = i64::try_from((offset * 37 + slot * 11) % 240).unwrap_or_default() + 10;

            repo.create(CreateExpenseInput {
                amount: Decimal::new(halves * 5, 1),
                category,
                description: Some(DESCRIPTIONS[index].to_string()),
                date,
            })
            .await?;
            created += 1;
        }
    }

    Ok(created)
}

async fn seed_budgets(repo: &BudgetRepository, today: NaiveDate) -> anyhow::Result<()> {
    let month = calendar::month_window(today);

    for (name, amount, category) in [
        ("Monthly groceries", Decimal::new(400, 0), Some(Category::Food)),
        ("Everything this month", Decimal::new(1500, 0), None),
    ] {
        let budget = repo
            .create(CreateBudgetInput {
                name: name.to_string(),
                amount,
                category,
                start_date: month.start,
                end_date: month.end,
            })
            .await?;
        println!("  Budget '{}' created ({})", budget.name, budget.id);
    }

    Ok(())
}
