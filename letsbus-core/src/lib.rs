//! letsbus-core: shared domain types for the letsbus workspace
//!
//! - Directory records (`UserRecord`, `UserId`)
//! - Bus incident reports and the report disclosure flow
//! - Delay statistics over GTFS schedules
//! - Configuration loading

pub mod config;
pub mod error;
pub mod flow;
pub mod report;
pub mod statistics;
pub mod user;

pub use config::LetsbusConfig;
pub use error::{LetsbusError, Result};
pub use flow::{FlowEvent, FlowState, ReportFlow};
pub use report::{NewReport, Report, ReportKind};
pub use statistics::{minutes_of_day, BusLine, Schedule};
pub use user::{UserId, UserRecord};
