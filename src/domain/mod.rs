//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ticket` - Ticket categories, requests, totals and purchase rules

pub mod foundation;
pub mod ticket;
