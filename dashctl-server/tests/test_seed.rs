//! Seeder integration tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p dashctl-server -- --ignored

mod common;

use common::TestDb;
use dashctl_core::{CustomerRecord, SeedData};
use dashctl_server::seed::password::verify_password;
use dashctl_server::seed::{seed, SeedError};
use uuid::Uuid;

const TABLES: [&str; 4] = ["users", "customers", "invoices", "revenue"];

#[tokio::test]
#[ignore = "requires database"]
async fn seed_populates_all_tables() {
    let db = TestDb::new().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let report = seed(&mut conn, &SeedData::placeholder()).await.unwrap();
    drop(conn);

    assert_eq!(report.users, 1);
    assert_eq!(report.customers, 6);
    assert_eq!(report.invoices, 13);
    assert_eq!(report.revenue, 12);
    assert_eq!(db.count("invoices").await, 13);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn seed_twice_is_idempotent() {
    let db = TestDb::new().await;
    let data = SeedData::placeholder();
    let mut conn = db.pool.acquire().await.unwrap();

    seed(&mut conn, &data).await.unwrap();
    let mut after_first = Vec::new();
    for table in TABLES {
        after_first.push(db.count(table).await);
    }

    let second = seed(&mut conn, &data).await.unwrap();
    drop(conn);

    assert_eq!(second.total(), 0);
    for (table, expected) in TABLES.iter().zip(after_first) {
        assert_eq!(db.count(table).await, expected, "row count changed for {table}");
    }

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn reseed_fills_only_missing_rows() {
    let db = TestDb::new().await;
    let mut conn = db.pool.acquire().await.unwrap();

    let mut partial = SeedData::placeholder();
    partial.revenue.truncate(6);
    seed(&mut conn, &partial).await.unwrap();

    let report = seed(&mut conn, &SeedData::placeholder()).await.unwrap();
    drop(conn);

    assert_eq!(report.revenue, 6);
    assert_eq!(report.invoices, 0);
    assert_eq!(db.count("revenue").await, 12);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn failed_revenue_insert_rolls_back_everything() {
    let db = TestDb::new().await;

    // A pre-existing revenue table that rejects every seed row. CREATE TABLE
    // IF NOT EXISTS keeps it, so the failure happens at the last step.
    sqlx::query(
        "CREATE TABLE revenue (month VARCHAR(4) NOT NULL UNIQUE, revenue INT NOT NULL CHECK (revenue < 0))",
    )
    .execute(&db.pool)
    .await
    .unwrap();

    let mut conn = db.pool.acquire().await.unwrap();
    let err = seed(&mut conn, &SeedData::placeholder()).await.unwrap_err();
    drop(conn);

    assert!(matches!(err, SeedError::Insert { table: "revenue", .. }));
    for table in TABLES {
        assert_eq!(db.count(table).await, 0, "{table} not rolled back");
    }

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn invalid_dataset_touches_nothing() {
    let db = TestDb::new().await;
    let mut data = SeedData::placeholder();
    data.invoices[0].customer_id = Uuid::new_v4();

    let mut conn = db.pool.acquire().await.unwrap();
    let err = seed(&mut conn, &data).await.unwrap_err();
    drop(conn);

    assert!(matches!(err, SeedError::Dataset(_)));
    for table in TABLES {
        assert_eq!(db.count(table).await, 0);
    }

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn passwords_are_stored_hashed() {
    let db = TestDb::new().await;
    let data = SeedData::placeholder();
    let mut conn = db.pool.acquire().await.unwrap();
    seed(&mut conn, &data).await.unwrap();
    drop(conn);

    for user in &data.users {
        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&db.pool)
            .await
            .unwrap();

        assert_ne!(stored, user.password);
        assert!(verify_password(&user.password, &stored));
    }

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn customers_without_invoices_are_seeded() {
    let db = TestDb::new().await;
    let mut data = SeedData::placeholder();
    data.customers.push(CustomerRecord {
        id: Uuid::new_v4(),
        name: "Quiet Customer".into(),
        email: "quiet@example.com".into(),
        image_url: "/customers/quiet.png".into(),
    });

    let mut conn = db.pool.acquire().await.unwrap();
    let report = seed(&mut conn, &data).await.unwrap();
    drop(conn);

    assert_eq!(report.customers, 7);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn overlong_revenue_month_aborts_before_any_write() {
    let db = TestDb::new().await;
    let mut data = SeedData::placeholder();
    data.revenue[0].month = "January".into();

    let mut conn = db.pool.acquire().await.unwrap();
    let err = seed(&mut conn, &data).await.unwrap_err();
    drop(conn);

    assert!(matches!(err, SeedError::Dataset(_)));
    for table in TABLES {
        assert_eq!(db.count(table).await, 0);
    }

    db.teardown().await;
}
