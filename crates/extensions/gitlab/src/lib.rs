//! GitLab repository files integration for jobrelay.
//!
//! [`GitLabClient`] talks to the v4 `repository/files` API. [`CommitRelay`]
//! layers the create-or-update decision on top of any [`RepositoryFiles`]
//! implementation.

mod client;
mod error;
mod relay;
mod urls;

pub use client::{FileCommit, GitLabClient, RepositoryFiles};
pub use error::RemoteError;
pub use relay::{CommitAction, CommitRelay, CommitResult, CommitStatus};
pub use urls::{encode_path_segment, raw_file_url};
