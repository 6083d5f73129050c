//! # jobrelay API
//!
//! HTTP layer for jobrelay.
//!
//! - **Job**: job definitions read from a local JSON file on every request
//! - **Commit**: create-or-update of a job's file in the remote repository,
//!   delegated to [`jobrelay_gitlab::CommitRelay`]
//!
//! ```text
//! GET  /jobs                 -> JobStore::load_all
//! GET  /jobs/{id}            -> JobStore::load + raw file URL
//! POST /jobs/{id}/commit     -> JobStore::load -> CommitRelay::commit
//! ```

pub mod error;
pub mod http;
pub mod job;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use job::{
    CommitRequest, CommitResponse, FileJobStore, JobRecord, JobStore, JobView, MemoryJobStore,
};
pub use server::ApiServer;
pub use state::AppState;
