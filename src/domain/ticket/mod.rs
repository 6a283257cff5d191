//! Ticket domain module.
//!
//! Ticket categories, purchase requests, per-category totals and the rules
//! every purchase must satisfy.
//!
//! # Module Structure
//!
//! - `category` - TicketCategory with its price and seat rules
//! - `request` - TicketRequest value object
//! - `counts` - TicketCounts aggregation, pricing and seat totals
//! - `rules` - Purchase limits and validation
//! - `errors` - InvalidPurchase rejection reasons

mod category;
mod counts;
mod errors;
mod request;
mod rules;

pub use category::TicketCategory;
pub use counts::TicketCounts;
pub use errors::InvalidPurchase;
pub use request::TicketRequest;
pub use rules::MAX_TICKETS_PER_PURCHASE;

pub(crate) use rules::{validate_account, validate_requests};
