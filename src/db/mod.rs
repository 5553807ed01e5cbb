// Database module - provides data access layer

use std::path::Path;

use color_eyre::{eyre::ensure, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};

pub mod models;
pub use models::*;

mod question;
mod schema;

/// Handle to the question store.
///
/// Holds only the connection settings; every operation opens its own
/// connection and closes it before returning.
#[derive(Clone)]
pub struct Db {
    options: SqliteConnectOptions,
}

impl Db {
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        let db = Self { options };

        let mut conn = db.connect().await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&mut conn).await?;
        ensure!(one == 1, "connection check failed");

        schema::create_schema(&mut conn).await?;
        conn.close().await?;

        tracing::info!(path = %path.as_ref().display(), "database connection has been verified");

        Ok(db)
    }

    async fn connect(&self) -> Result<SqliteConnection> {
        Ok(self.options.connect().await?)
    }
}
