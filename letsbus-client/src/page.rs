//! Users page container
//!
//! Owns the snapshot for one page instance. Each mount starts from empty and
//! gets exactly one ticket; a result arriving with an older ticket belongs
//! to a previous mount and is dropped.

use std::sync::Arc;

use letsbus_core::UserRecord;

use crate::directory::Directory;
use crate::error::FetchError;
use crate::fetcher::{FetchOutcome, ListFetcher};
use crate::render::ListView;
use crate::view_state::ViewState;

/// Proof of which mount a fetch was started for
#[derive(Debug)]
pub struct MountTicket {
    generation: u64,
}

pub struct UsersPage {
    fetcher: ListFetcher,
    state: ViewState,
    generation: u64,
    mounted: bool,
}

impl UsersPage {
    pub const TITLE: &'static str = "Users";

    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            fetcher: ListFetcher::new(directory),
            state: ViewState::new(),
            generation: 0,
            mounted: false,
        }
    }

    /// Activate the page. Any previous snapshot is discarded.
    pub fn mount(&mut self) -> MountTicket {
        self.generation += 1;
        self.mounted = true;
        self.state.clear();
        tracing::debug!(generation = self.generation, "users page mounted");
        MountTicket {
            generation: self.generation,
        }
    }

    /// Deactivate the page. Outstanding tickets go stale.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.mounted = false;
        self.state.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Hand a fetch result back to the page.
    pub fn resolve(
        &mut self,
        ticket: MountTicket,
        result: Result<Vec<UserRecord>, FetchError>,
    ) -> FetchOutcome {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding result from a previous mount"
            );
            return FetchOutcome::Discarded;
        }
        ListFetcher::apply(&mut self.state, result)
    }

    /// Mount, fetch once, and apply the result.
    pub async fn load(&mut self) -> FetchOutcome {
        let ticket = self.mount();
        let result = self.fetcher.fetch().await;
        self.resolve(ticket, result)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> ListView<'_> {
        ListView::new(Self::TITLE, &self.state)
    }
}
