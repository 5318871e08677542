//! # Database Store
//!
//! Connection pool, migrations, and the account repository.

// region: --- Modules
pub mod account_repository;
pub mod models;
// endregion: --- Modules

// region: --- Re-exports
pub use account_repository::AccountRepository;
pub use models::{Account, AccountField, AccountForCreate, AccountForUpdate, FieldUpdate};
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a new SQLite connection pool.
///
/// In-memory databases are private to a single connection, so for those the
/// pool is pinned to one connection that is never recycled.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options.connect_with(options).await?;

    Ok(pool)
}

/// Apply the embedded migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../../migrations").run(pool).await?;
    Ok(())
}
// endregion: --- Types and Functions
