//! Bus report repository

use chrono::{DateTime, Utc};
use letsbus_core::{NewReport, Report};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

#[derive(Debug, FromRow)]
struct ReportRow {
    id: i64,
    kind: String,
    line: i64,
    station: i64,
    direction: Option<String>,
    reported_at: DateTime<Utc>,
}

impl TryFrom<ReportRow> for Report {
    type Error = DbError;

    fn try_from(row: ReportRow) -> Result<Self, Self::Error> {
        let number = |field: &str, value: i64| {
            u32::try_from(value)
                .map_err(|_| DbError::Decode(format!("report {} has {} {}", row.id, field, value)))
        };

        Ok(Report {
            id: row.id,
            kind: row.kind.parse().map_err(DbError::Decode)?,
            line: number("line", row.line)?,
            station: number("station", row.station)?,
            direction: row.direction,
            reported_at: row.reported_at,
        })
    }
}

pub struct ReportRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReportRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a report stamped with the current time.
    pub async fn create(&self, report: NewReport) -> Result<Report, DbError> {
        let row: ReportRow = sqlx::query_as(
            r#"
            INSERT INTO reports (kind, line, station, direction, reported_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, kind, line, station, direction, reported_at
            "#,
        )
        .bind(report.kind.as_str())
        .bind(i64::from(report.line))
        .bind(i64::from(report.station))
        .bind(report.direction.as_deref())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Newest first
    pub async fn list(&self) -> Result<Vec<Report>, DbError> {
        let rows: Vec<ReportRow> = sqlx::query_as(
            r#"
            SELECT id, kind, line, station, direction, reported_at
            FROM reports
            ORDER BY reported_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Report::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};
    use letsbus_core::ReportKind;

    #[tokio::test]
    async fn create_and_list_newest_first() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let repo = ReportRepo::new(&pool);

        let first = repo
            .create(NewReport {
                kind: ReportKind::BusMissing,
                line: 12,
                station: 3,
                direction: None,
            })
            .await
            .unwrap();
        let second = repo
            .create(NewReport {
                kind: ReportKind::RoadWork,
                line: 5,
                station: 40,
                direction: Some("north".into()),
            })
            .await
            .unwrap();

        assert_eq!(first.kind, ReportKind::BusMissing);
        assert_eq!(second.direction.as_deref(), Some("north"));

        let ids: Vec<i64> = repo.list().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
