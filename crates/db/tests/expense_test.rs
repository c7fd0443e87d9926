//! Integration tests for Expense repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tally_core::Category;
use tally_core::expense::{CreateExpenseInput, ExpenseError, ExpenseFilter, MAX_AMOUNT};
use tally_db::ExpenseRepository;
use tally_db::migration::{Migrator, MigratorTrait};
use tally_db::repositories::ExpenseRepoError;
use tally_shared::ExpenseId;

/// Connects to a fresh in-memory database with the schema applied.
async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn input(amount: Decimal, category: Category, on: NaiveDate) -> CreateExpenseInput {
    CreateExpenseInput {
        amount,
        category,
        description: None,
        date: on,
    }
}

async fn seed(repo: &ExpenseRepository) {
    for (amount, category, on) in [
        (dec!(100), Category::Food, date(2025, 1, 5)),
        (dec!(50), Category::Food, date(2025, 1, 20)),
        (dec!(200), Category::Transport, date(2025, 1, 10)),
        (dec!(0), Category::Other, date(2025, 1, 31)),
        (dec!(12.5), Category::Health, date(2025, 2, 1)),
    ] {
        repo.create(input(amount, category, on))
            .await
            .expect("Failed to create expense");
    }
}

#[tokio::test]
async fn test_migrations_roll_back_and_reapply_on_sqlite() {
    let db = setup().await;

    Migrator::down(&db, None).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repo = ExpenseRepository::new(db);
    seed(&repo).await;
    assert_eq!(repo.count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_expense_create_and_list() {
    let repo = ExpenseRepository::new(setup().await);

    let created = repo
        .create(CreateExpenseInput {
            amount: dec!(12.5),
            category: Category::Food,
            description: Some("  Lunch  ".to_string()),
            date: date(2025, 1, 5),
        })
        .await
        .expect("Failed to create expense");

    assert_eq!(created.amount, dec!(12.5));
    assert_eq!(created.description.as_deref(), Some("Lunch"));

    let all = repo
        .list(&ExpenseFilter::all())
        .await
        .expect("Failed to list expenses");

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].category, Category::Food);
    assert_eq!(all[0].date, date(2025, 1, 5));
}

#[tokio::test]
async fn test_expense_list_is_newest_first() {
    let repo = ExpenseRepository::new(setup().await);
    seed(&repo).await;

    let all = repo.list(&ExpenseFilter::all()).await.unwrap();
    let dates: Vec<NaiveDate> = all.iter().map(|e| e.date).collect();

    assert_eq!(
        dates,
        vec![
            date(2025, 2, 1),
            date(2025, 1, 31),
            date(2025, 1, 20),
            date(2025, 1, 10),
            date(2025, 1, 5),
        ]
    );
}

#[tokio::test]
async fn test_expense_rejects_negative_amount() {
    let repo = ExpenseRepository::new(setup().await);

    let result = repo
        .create(input(dec!(-1), Category::Food, date(2025, 1, 1)))
        .await;

    assert!(matches!(
        result,
        Err(ExpenseRepoError::Validation(ExpenseError::NegativeAmount(_)))
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_expense_rejects_amount_past_column_range() {
    let repo = ExpenseRepository::new(setup().await);

    let result = repo
        .create(input(
            MAX_AMOUNT + dec!(0.0001),
            Category::Food,
            date(2025, 1, 1),
        ))
        .await;

    assert!(matches!(
        result,
        Err(ExpenseRepoError::Validation(ExpenseError::AmountTooLarge { .. }))
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_expense_amounts_round_trip_exactly() {
    let repo = ExpenseRepository::new(setup().await);
    let amounts = [dec!(19.99), dec!(0.1), dec!(0.2), dec!(123456.78)];
    for amount in amounts {
        repo.create(input(amount, Category::Shopping, date(2025, 4, 2)))
            .await
            .unwrap();
    }

    let mut stored: Vec<Decimal> = repo
        .list(&ExpenseFilter::all())
        .await
        .unwrap()
        .iter()
        .map(|e| e.amount.normalize())
        .collect();
    stored.sort();
    assert_eq!(stored, vec![dec!(0.1), dec!(0.2), dec!(19.99), dec!(123456.78)]);

    let exact = ExpenseFilter {
        min_amount: Some(dec!(19.99)),
        max_amount: Some(dec!(19.99)),
        ..ExpenseFilter::default()
    };
    let matched = repo.list(&exact).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].amount.normalize(), dec!(19.99));
}

#[tokio::test]
async fn test_expense_filter_by_category_and_range() {
    let repo = ExpenseRepository::new(setup().await);
    seed(&repo).await;

    let food = repo
        .list(&ExpenseFilter::all().in_category(Some(Category::Food)))
        .await
        .unwrap();
    assert_eq!(food.len(), 2);
    assert!(food.iter().all(|e| e.category == Category::Food));

    let range = ExpenseFilter {
        start_date: Some(date(2025, 1, 10)),
        end_date: Some(date(2025, 1, 31)),
        ..ExpenseFilter::default()
    };
    let in_range = repo.list(&range).await.unwrap();
    assert_eq!(in_range.len(), 3);
    assert!(
        in_range
            .iter()
            .all(|e| e.date >= date(2025, 1, 10) && e.date <= date(2025, 1, 31))
    );
}

#[tokio::test]
async fn test_expense_zero_amount_bound_is_applied() {
    let repo = ExpenseRepository::new(setup().await);
    seed(&repo).await;

    let zero_only = ExpenseFilter {
        max_amount: Some(dec!(0)),
        ..ExpenseFilter::default()
    };
    let result = repo.list(&zero_only).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].category, Category::Other);
}

#[tokio::test]
async fn test_expense_inverted_range_is_empty() {
    let repo = ExpenseRepository::new(setup().await);
    seed(&repo).await;

    let inverted = ExpenseFilter {
        start_date: Some(date(2025, 2, 1)),
        end_date: Some(date(2025, 1, 1)),
        ..ExpenseFilter::default()
    };

    assert!(repo.list(&inverted).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_expense_recent_limit() {
    let repo = ExpenseRepository::new(setup().await);
    seed(&repo).await;

    let recent = repo.recent(2).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, date(2025, 2, 1));
    assert_eq!(recent[1].date, date(2025, 1, 31));
}

#[tokio::test]
async fn test_expense_delete_is_idempotent() {
    let repo = ExpenseRepository::new(setup().await);
    let created = repo
        .create(input(dec!(10), Category::Shopping, date(2025, 1, 1)))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(ExpenseId::new()).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}
