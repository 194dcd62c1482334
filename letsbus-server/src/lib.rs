//! letsbus-server: the Remote Directory Service and bus report store
//!
//! Users CRUD and bus reports over axum, persisted to SQLite via sqlx.

pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use error::{ServerError, ServerResult};
pub use http::{build_router, run_server, AppState, ServerConfig};

/// Open the database, apply migrations, and serve until shutdown.
pub async fn serve(database_url: &str, config: ServerConfig) -> ServerResult<()> {
    let pool = db::create_pool(database_url).await?;
    db::migrations::run(&pool).await?;
    run_server(pool, config).await
}
