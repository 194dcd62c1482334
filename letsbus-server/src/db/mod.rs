//! Database layer - connection pool, migrations and repositories
//!
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Single statement per write, using RETURNING

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
