use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error connecting to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Failed to run database migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

pub async fn connect(database_url: &str) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("{:}", err);
            Error::Connect(err)
        })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::Migrate(err)
    })
}

/// SQLSTATE 23503, raised when a row is still referenced from another table.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|err| err.code())
        .map(|code| code == "23503")
        .unwrap_or(false)
}
