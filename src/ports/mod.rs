//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Purchase Ports
//!
//! - `TicketPaymentService` - Charges the account for a validated purchase
//! - `SeatReservationService` - Reserves seats for a validated purchase

mod seat_reservation_service;
mod ticket_payment_service;

pub use seat_reservation_service::SeatReservationService;
pub use ticket_payment_service::TicketPaymentService;
