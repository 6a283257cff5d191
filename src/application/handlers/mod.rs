//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.
//!
//! ## Commands
//! - Purchasing tickets (validate, charge, reserve seats)

mod purchase_tickets;

pub use purchase_tickets::PurchaseTicketsHandler;
