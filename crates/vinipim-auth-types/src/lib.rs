//! Authentication primitives for the Vinipim backend.
//!
//! Provides admin password hashing, the session cookie policy and cookie
//! builders, and signed token issuance/verification for both the admin
//! session and the general user session.

pub mod cookie;
pub mod password;
pub mod token;
