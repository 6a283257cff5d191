//! Mock collaborator adapters.
//!
//! Call-recording implementations of the purchase ports for unit and
//! integration tests. Supports:
//! - Per-mock call tracking
//! - A shared, ordered `CallJournal` across mocks

mod call_journal;
mod payment_service;
mod seat_reservation_service;

pub use call_journal::{CallJournal, CollaboratorCall};
pub use payment_service::{MockPaymentService, PaymentRecord};
pub use seat_reservation_service::{MockSeatReservationService, ReservationRecord};
