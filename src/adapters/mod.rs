//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `mock` - Call-recording payment and seat reservation services

pub mod mock;

pub use mock::{CallJournal, CollaboratorCall, MockPaymentService, MockSeatReservationService};
