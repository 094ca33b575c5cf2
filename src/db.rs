use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

/// Connects and verifies the connection before the server accepts requests.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .test_before_acquire(true)
        .connect(database_url)
        .await
}
