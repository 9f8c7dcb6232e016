//! Test utilities for the Vinipim API.
//!
//! Provides `MockAuth` for minting session cookies, domain fixtures, and
//! request/response helpers for driving a `Router` in-process.
//! Import from tests only, never from production code.

pub mod auth;
pub mod fixture;
pub mod http;
