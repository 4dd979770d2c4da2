use crate::error::{AppError, Result};
use sqlx::SqlitePool;
use tracing::info;

const SCHEMA_STATEMENTS: &[(&str, &str)] = &[
    (
        "contact_submissions",
        r#"
        CREATE TABLE IF NOT EXISTS contact_submissions (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            organization TEXT,
            interest TEXT,
            message TEXT NOT NULL,
            submitted_at TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'new'
        )
        "#,
    ),
    (
        "idx_contact_submissions_submitted_at",
        "CREATE INDEX IF NOT EXISTS idx_contact_submissions_submitted_at ON contact_submissions(submitted_at)",
    ),
    (
        "status_checks",
        r#"
        CREATE TABLE IF NOT EXISTS status_checks (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            client_name TEXT NOT NULL,
            timestamp TEXT NOT NULL
        )
        "#,
    ),
];

/// Creates the tables the service writes to. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    for &(name, statement) in SCHEMA_STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create {}: {}", name, e)))?;
    }

    info!("Database schema is ready");
    Ok(())
}
