//! Domain types shared across the Vinipim portfolio backend.
//!
//! Pure types with no framework dependencies. Storage rows are mapped into
//! these in `infra/`, and handlers serialize them as-is.

pub mod admin;
pub mod media;
pub mod post;
pub mod review;
pub mod user;

/// Returned by `FromStr` impls when a wire value is not one of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
