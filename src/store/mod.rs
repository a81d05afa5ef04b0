//! Saved request persistence.
//!
//! Records belong to the identity that created them; only that identity may
//! read, update or delete them.

pub mod memory;
pub mod model;

pub use memory::RequestStore;
pub use model::*;

use thiserror::Error;
use uuid::Uuid;

/// Which operation an ownership check was guarding, for the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Update,
    Delete,
}

impl Access {
    fn verb(&self) -> &'static str {
        match self {
            Access::Read => "access",
            Access::Update => "update",
            Access::Delete => "delete",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Request not found")]
    NotFound(Uuid),

    #[error("Not authorized to {} this request", .0.verb())]
    NotOwner(Access),

    #[error("{0}")]
    Invalid(String),
}
