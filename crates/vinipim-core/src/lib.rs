//! Shared service plumbing: error codes, configuration, datastore
//! acquisition, tracing and HTTP middleware.

pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
