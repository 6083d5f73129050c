//! HTTP interface module.
//!
//! Route table and health checks.

pub mod routes;

pub(crate) mod monitoring;
