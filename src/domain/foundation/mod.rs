//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the ticket office domain.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::AccountId;
