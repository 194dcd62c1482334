//! Bus report endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use letsbus_core::{NewReport, Report};

use crate::db::repos::ReportRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::validate_report;

/// GET /reports - newest first
async fn list_reports(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Report>>, ApiError> {
    let reports = ReportRepo::new(&state.pool).list().await?;
    Ok(Json(reports))
}

/// POST /reports
async fn create_report(
    State(state): State<Arc<AppState>>,
    ValidJson(report): ValidJson<NewReport>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let report = validate_report(report)?;
    let stored = ReportRepo::new(&state.pool).create(report).await?;
    tracing::info!(
        id = stored.id,
        kind = %stored.kind,
        line = stored.line,
        station = stored.station,
        "report stored"
    );
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Report routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reports", get(list_reports).post(create_report))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::{create_memory_pool, migrations};
    use crate::http::server::{build_router, AppState};

    async fn post_report(app: &axum::Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn report_round_trip() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let app = build_router(AppState { pool }, false);

        let (status, stored) = post_report(
            &app,
            json!({"kind": "too_full_did_not_stop", "line": 12, "station": 3, "direction": "north"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(stored["kind"], "too_full_did_not_stop");
        assert!(stored["reported_at"].is_string());

        let response = app
            .oneshot(Request::builder().uri("/reports").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bad_reports_are_400() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let app = build_router(AppState { pool }, false);

        for body in [
            json!({"kind": "late", "line": 12, "station": 3}),
            json!({"kind": "bus_missing", "line": 0, "station": 3}),
            json!({"kind": "bus_missing", "line": 12}),
        ] {
            let (status, response) = post_report(&app, body.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response["error"], "validation_error");
        }
    }
}
