// Domain layer module exports
// Domain is independent of infrastructure concerns: no store-native types here

pub mod championship;
pub mod document_id;
pub mod errors;
pub mod repositories;
pub mod team;

pub use document_id::DocumentId;
pub use errors::{DomainError, DomainResult};
