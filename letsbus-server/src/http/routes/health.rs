//! Liveness plus a database round trip

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health - always 200; `database` says whether SQLite answered
async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the database");
            "unavailable"
        }
    };

    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn reports_database_ok() {
        let pool = create_memory_pool().await.unwrap();
        let Json(body) = health(State(Arc::new(AppState { pool }))).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "ok");
    }

    #[tokio::test]
    async fn closed_pool_is_unavailable() {
        let pool = create_memory_pool().await.unwrap();
        pool.close().await;
        let Json(body) = health(State(Arc::new(AppState { pool }))).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "unavailable");
    }
}
