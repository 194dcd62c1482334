//! List renderer: `ViewState` in, keyed rows out

use std::fmt;

use letsbus_core::UserId;

use crate::view_state::ViewState;

/// One line of the users list, keyed by record id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub key: &'a UserId,
    pub name: &'a str,
    pub email: &'a str,
}

impl fmt::Display for RowView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.name, self.email)
    }
}

/// Lazily project the snapshot into rows. Calling again starts over.
pub fn rows(state: &ViewState) -> impl ExactSizeIterator<Item = RowView<'_>> + '_ {
    state.records().iter().map(|record| RowView {
        key: &record.id,
        name: &record.name,
        email: &record.email,
    })
}

/// A header followed by the rows of a snapshot
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a> {
    header: &'static str,
    state: &'a ViewState,
}

impl<'a> ListView<'a> {
    pub fn new(header: &'static str, state: &'a ViewState) -> Self {
        Self { header, state }
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = RowView<'a>> + 'a {
        rows(self.state)
    }
}

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
