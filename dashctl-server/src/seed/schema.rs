//! Table definitions for the dashboard schema
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so re-running is a no-op.
//! PostgreSQL DDL is transactional; these run inside the seeding
//! transaction and roll back with it. Ids always come from the dataset, so
//! no extension or server-side uuid default is needed.

use sqlx::PgConnection;

use super::SeedError;

pub(crate) const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

pub(crate) const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

pub(crate) const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID PRIMARY KEY,
        customer_id UUID NOT NULL REFERENCES customers(id),
        amount INT NOT NULL CHECK (amount >= 0),
        status VARCHAR(255) NOT NULL CHECK (status IN ('pending', 'paid')),
        date DATE NOT NULL
    )
"#;

pub(crate) const CREATE_REVENUE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

/// Create `table` with `ddl` if it doesn't exist yet.
pub(crate) async fn create_table(
    conn: &mut PgConnection,
    table: &'static str,
    ddl: &'static str,
) -> Result<(), SeedError> {
    sqlx::query(ddl)
        .execute(&mut *conn)
        .await
        .map_err(|source| SeedError::CreateTable { table, source })?;

    tracing::debug!(table, "Table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_is_idempotent() {
        for ddl in [CREATE_USERS, CREATE_CUSTOMERS, CREATE_INVOICES, CREATE_REVENUE] {
            assert!(ddl.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }

    #[test]
    fn invoices_reference_customers() {
        assert!(CREATE_INVOICES.contains("REFERENCES customers(id)"));
    }

    #[test]
    fn ids_have_no_server_default() {
        for ddl in [CREATE_USERS, CREATE_CUSTOMERS, CREATE_INVOICES] {
            assert!(ddl.contains("id UUID PRIMARY KEY"));
            assert!(!ddl.contains("DEFAULT"));
        }
    }
}
