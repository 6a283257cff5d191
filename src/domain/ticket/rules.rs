//! Purchase rules applied to every ticket order.
//!
//! # Rules
//!
//! | Rule | Limit |
//! |------|-------|
//! | Tickets per purchase | at most 25 across all categories |
//! | Accompaniment | child and infant tickets need at least one adult ticket |

use super::{InvalidPurchase, TicketCounts, TicketRequest};
use crate::domain::foundation::AccountId;

/// Maximum number of tickets, across all categories, in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Checks the account identifier.
pub(crate) fn validate_account(account_id: i64) -> Result<AccountId, InvalidPurchase> {
    AccountId::new(account_id).map_err(|_| InvalidPurchase::invalid_account(account_id))
}

/// Checks the requests and returns their per-category totals.
///
/// Rules are applied in order and the first violation wins.
pub(crate) fn validate_requests(requests: &[TicketRequest]) -> Result<TicketCounts, InvalidPurchase> {
    if requests.is_empty() {
        return Err(InvalidPurchase::EmptyRequest);
    }

    if let Some((index, request)) = requests
        .iter()
        .enumerate()
        .find(|(_, request)| request.quantity() == 0)
    {
        return Err(InvalidPurchase::invalid_ticket_count(
            index,
            request.category(),
            request.quantity(),
        ));
    }

    let counts = TicketCounts::tally(requests);

    if counts.total() > MAX_TICKETS_PER_PURCHASE {
        return Err(InvalidPurchase::too_many_tickets(
            counts.total(),
            MAX_TICKETS_PER_PURCHASE,
        ));
    }

    if counts.needs_adult() && !counts.has_adult() {
        return Err(InvalidPurchase::MissingAdult);
    }

    Ok(counts)
}
