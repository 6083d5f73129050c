//! Job module.
//!
//! Job definitions come from a JSON file with a top-level `jobs` array and are
//! re-read on every access.

mod definition;
pub mod routes;
mod store;

pub use definition::{CommitRequest, CommitResponse, JobRecord, JobView, JobsDocument};
pub use store::{FileJobStore, JobStore, MemoryJobStore};
