//! Purchase-specific error types.
//!
//! # Error Codes
//!
//! | Error | Code |
//! |-------|------|
//! | InvalidAccount | INVALID_ACCOUNT |
//! | EmptyRequest | EMPTY_REQUEST |
//! | InvalidTicketCount | INVALID_TICKET_COUNT |
//! | TooManyTickets | TOO_MANY_TICKETS |
//! | MissingAdult | MISSING_ADULT |

use thiserror::Error;

use super::TicketCategory;
use crate::domain::foundation::ErrorCode;

/// Reasons a ticket purchase is rejected.
///
/// Every variant is raised before any payment or reservation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    #[error("Account ID must be a positive integer, got {account_id}")]
    InvalidAccount { account_id: i64 },

    #[error("A purchase must contain at least one ticket request")]
    EmptyRequest,

    #[error("Ticket request #{index} ({category}) has invalid quantity {quantity}")]
    InvalidTicketCount {
        index: usize,
        category: TicketCategory,
        quantity: u32,
    },

    #[error("Cannot purchase more than {max} tickets at once, requested {requested}")]
    TooManyTickets { requested: u32, max: u32 },

    #[error("Child and infant tickets cannot be purchased without an adult ticket")]
    MissingAdult,
}

impl InvalidPurchase {
    pub fn invalid_account(account_id: i64) -> Self {
        InvalidPurchase::InvalidAccount { account_id }
    }

    pub fn invalid_ticket_count(index: usize, category: TicketCategory, quantity: u32) -> Self {
        InvalidPurchase::InvalidTicketCount {
            index,
            category,
            quantity,
        }
    }

    pub fn too_many_tickets(requested: u32, max: u32) -> Self {
        InvalidPurchase::TooManyTickets { requested, max }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            InvalidPurchase::InvalidAccount { .. } => ErrorCode::InvalidAccount,
            InvalidPurchase::EmptyRequest => ErrorCode::EmptyRequest,
            InvalidPurchase::InvalidTicketCount { .. } => ErrorCode::InvalidTicketCount,
            InvalidPurchase::TooManyTickets { .. } => ErrorCode::TooManyTickets,
            InvalidPurchase::MissingAdult => ErrorCode::MissingAdult,
        }
    }
}
