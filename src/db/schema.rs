// Database schema initialization

use color_eyre::Result;
use sqlx::SqliteConnection;

pub async fn create_schema(conn: &mut SqliteConnection) -> Result<()> {
    // AUTOINCREMENT keeps ids from being handed out again after a clear.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            options TEXT NOT NULL,
            correct_answer TEXT NOT NULL,
            explanation TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}
