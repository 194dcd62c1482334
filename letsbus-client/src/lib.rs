//! letsbus-client: pages backed by the Remote Directory Service
//!
//! The users page mounts, issues one fetch, and renders whatever snapshot
//! it holds. Failures are logged and otherwise swallowed.

pub mod app;
pub mod directory;
pub mod error;
pub mod fetcher;
pub mod page;
pub mod render;
pub mod reports;
pub mod routes;
pub mod view_state;
pub mod views;

pub use app::render_route;
pub use directory::{Directory, HttpDirectory};
pub use error::FetchError;
pub use fetcher::{FetchOutcome, ListFetcher};
pub use page::{MountTicket, UsersPage};
pub use render::{ListView, RowView};
pub use reports::ReportClient;
pub use routes::Route;
pub use view_state::ViewState;
