//! # jobrelay Config
//!
//! Process-wide settings for jobrelay, built once at startup from the
//! environment and handed to the job store and commit relay explicitly.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
