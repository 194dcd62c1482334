//! Remote Directory Service access

use async_trait::async_trait;
use letsbus_core::{UserId, UserRecord};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Source of user records
#[async_trait]
pub trait Directory: Send + Sync {
    /// All records, in server order
    async fn list_users(&self) -> Result<Vec<UserRecord>, FetchError>;

    /// One record by id
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, FetchError>;
}

/// Directory reached over HTTP.
///
/// `endpoint` is the collection URL, e.g. `http://localhost:5000/users`.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    endpoint: String,
}

impl HttpDirectory {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `<endpoint>/<id>` with the id as one percent-encoded path segment
    pub fn user_url(&self, id: &UserId) -> Result<Url, FetchError> {
        let bad_endpoint = |reason: &str| FetchError::Endpoint {
            endpoint: self.endpoint.clone(),
            reason: reason.to_string(),
        };

        let mut url = Url::parse(&self.endpoint).map_err(|e| bad_endpoint(&e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| bad_endpoint("cannot hold a path"))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "GET users");
        let response = self.client.get(&self.endpoint).send().await?;
        read_json(response).await
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, FetchError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "GET user");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }
}

/// Decode a success body, or turn the status into an error.
///
/// The body is read as bytes first so transport errors and payload errors
/// stay distinguishable in the logs.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FetchError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_trimmed() {
        let directory = HttpDirectory::new("http://localhost:5000/users/");
        assert_eq!(directory.endpoint(), "http://localhost:5000/users");
    }

    #[test]
    fn user_url_appends_one_segment() {
        let directory = HttpDirectory::new("http://localhost:5000/users");
        let url = directory.user_url(&UserId::Number(7)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/users/7");
    }

    #[test]
    fn user_url_encodes_text_ids() {
        let directory = HttpDirectory::new("http://localhost:5000/users");

        let url = directory.user_url(&UserId::from("1?x")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/users/1%3Fx");
        assert_eq!(url.query(), None);

        let url = directory.user_url(&UserId::from("a/b")).unwrap();
        assert_eq!(url.path(), "/users/a%2Fb");
    }

    #[test]
    fn unparsable_endpoint_is_reported() {
        let directory = HttpDirectory::new("not a url");
        let err = directory.user_url(&UserId::Number(1)).unwrap_err();
        assert!(matches!(err, FetchError::Endpoint { .. }));
        assert_eq!(err.status(), None);
    }
}
