//! Data models for the Spark Runs roster.
//!
//! Field names follow the JSON layout already present in persisted rosters.

mod event;
mod participants;
mod query;
mod request;

pub use event::*;
pub use participants::*;
pub use query::*;
pub use request::*;
