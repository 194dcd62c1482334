//! Bus report submission

use letsbus_core::{NewReport, Report};
use reqwest::Client;

use crate::directory::read_json;
use crate::error::FetchError;

/// Posts finished reports to the reports service
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
    endpoint: String,
}

impl ReportClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn submit(&self, report: &NewReport) -> Result<Report, FetchError> {
        tracing::info!(
            kind = %report.kind,
            line = report.line,
            station = report.station,
            "submitting report"
        );
        let response = self.client.post(&self.endpoint).json(report).send().await?;
        read_json(response).await
    }

    pub async fn list(&self) -> Result<Vec<Report>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        read_json(response).await
    }
}
