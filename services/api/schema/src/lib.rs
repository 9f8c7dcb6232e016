//! sea-orm entities for the API datastore.

pub mod admin_credentials;
pub mod media;
pub mod posts;
pub mod reviews;
pub mod users;
