//! The snapshot a users page renders from

use letsbus_core::UserRecord;

/// Ordered records from the last successful fetch, or nothing.
///
/// Only the list fetcher can replace the contents, and only wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    records: Vec<UserRecord>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn replace(&mut self, records: Vec<UserRecord>) {
        self.records = records;
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
