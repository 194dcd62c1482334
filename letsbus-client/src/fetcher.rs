//! List fetcher: the only writer of a users page's `ViewState`

use std::sync::Arc;

use letsbus_core::UserRecord;

use crate::directory::Directory;
use crate::error::FetchError;
use crate::view_state::ViewState;

/// What happened to a fetch result
#[derive(Debug)]
pub enum FetchOutcome {
    /// Snapshot replaced with `rows` records
    Applied { rows: usize },
    /// Fetch failed; snapshot untouched
    Failed(FetchError),
    /// Page was remounted while the fetch was in flight
    Discarded,
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied { .. })
    }
}

/// Issues the one directory read a mount is allowed.
#[derive(Clone)]
pub struct ListFetcher {
    directory: Arc<dyn Directory>,
}

impl ListFetcher {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    pub async fn fetch(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.directory.list_users().await
    }

    /// Apply a fetch result to the snapshot.
    ///
    /// Success replaces everything, in server order. Failure is logged and
    /// the snapshot is left exactly as it was.
    pub(crate) fn apply(
        state: &mut ViewState,
        result: Result<Vec<UserRecord>, FetchError>,
    ) -> FetchOutcome {
        match result {
            Ok(records) => {
                let rows = records.len();
                state.replace(records);
                tracing::debug!(rows, "users loaded");
                FetchOutcome::Applied { rows }
            }
            Err(err) => {
                tracing::error!(error = %err, "There was an error fetching users");
                FetchOutcome::Failed(err)
            }
        }
    }
}
