//! PurchaseTicketsHandler - Command handler for buying venue tickets.
//!
//! Validates a purchase, prices it, then charges the account and reserves
//! seats:
//! - Adult 25, child 15, infant free
//! - Infants sit on an adult's lap and get no seat
//! - At most 25 tickets per purchase
//! - Child and infant tickets need at least one adult ticket

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::AccountId;
use crate::domain::ticket::{
    validate_account, validate_requests, InvalidPurchase, TicketCategory, TicketCounts,
    TicketRequest,
};
use crate::ports::{SeatReservationService, TicketPaymentService};

/// Handler for ticket purchases.
///
/// Stateless apart from its collaborators, so a single instance can serve
/// concurrent callers provided the collaborators can.
pub struct PurchaseTicketsHandler {
    payment_service: Arc<dyn TicketPaymentService>,
    reservation_service: Arc<dyn SeatReservationService>,
}

impl PurchaseTicketsHandler {
    pub fn new(
        payment_service: Arc<dyn TicketPaymentService>,
        reservation_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment_service,
            reservation_service,
        }
    }

    /// Purchase tickets for an account.
    ///
    /// Either both collaborators are called (payment first, then seats) or
    /// neither is and the rejection reason is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidAccount` if `account_id` is zero or negative
    /// - `EmptyRequest` if `requests` is empty
    /// - `InvalidTicketCount` if a request has a zero quantity
    /// - `TooManyTickets` if more than 25 tickets are requested in total
    /// - `MissingAdult` if child or infant tickets are requested without an adult
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), InvalidPurchase> {
        let (account_id, counts) = Self::validate(account_id, requests).map_err(|err| {
            warn!(code = %err.code(), "Rejected ticket purchase: {}", err);
            err
        })?;

        let total_amount = counts.total_amount();
        let total_seats = counts.total_seats();

        self.payment_service.make_payment(account_id, total_amount);
        self.reservation_service.reserve_seats(account_id, total_seats);

        info!(
            account_id = %account_id,
            total_amount,
            total_seats,
            "Ticket purchase completed"
        );
        Ok(())
    }

    fn validate(
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(AccountId, TicketCounts), InvalidPurchase> {
        // 1. Account must be positive
        let account_id = validate_account(account_id)?;

        // 2-6. Non-empty, positive quantities, ticket limit, accompaniment
        let counts = validate_requests(requests)?;

        debug!(
            account_id = %account_id,
            adults = counts.get(TicketCategory::Adult),
            children = counts.get(TicketCategory::Child),
            infants = counts.get(TicketCategory::Infant),
            "Ticket request validated"
        );

        Ok((account_id, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        CallJournal, CollaboratorCall, MockPaymentService, MockSeatReservationService,
    };

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    struct Fixture {
        handler: PurchaseTicketsHandler,
        payment: Arc<MockPaymentService>,
        reservation: Arc<MockSeatReservationService>,
        journal: CallJournal,
    }

    fn fixture() -> Fixture {
        let journal = CallJournal::new();
        let payment = Arc::new(MockPaymentService::with_journal(journal.clone()));
        let reservation = Arc::new(MockSeatReservationService::with_journal(journal.clone()));
        let handler = PurchaseTicketsHandler::new(payment.clone(), reservation.clone());
        Fixture {
            handler,
            payment,
            reservation,
            journal,
        }
    }

    fn adult(n: u32) -> TicketRequest {
        TicketRequest::adult(n).unwrap()
    }

    fn child(n: u32) -> TicketRequest {
        TicketRequest::child(n).unwrap()
    }

    fn infant(n: u32) -> TicketRequest {
        TicketRequest::infant(n).unwrap()
    }

    fn account(id: i64) -> AccountId {
        AccountId::new(id).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn charges_and_reserves_for_mixed_purchase() {
        let f = fixture();

        f.handler
            .purchase(7, &[adult(10), child(10), infant(5)])
            .unwrap();

        assert_eq!(
            f.journal.entries(),
            vec![
                CollaboratorCall::Payment {
                    account_id: account(7),
                    total_amount: 400
                },
                CollaboratorCall::Reservation {
                    account_id: account(7),
                    total_seats: 20
                },
            ]
        );
    }

    #[test]
    fn adults_only_purchase() {
        let f = fixture();

        f.handler.purchase(1, &[adult(3)]).unwrap();

        assert_eq!(f.payment.payments()[0].total_amount, 75);
        assert_eq!(f.reservation.reservations()[0].total_seats, 3);
    }

    #[test]
    fn infants_are_free_and_seatless() {
        let f = fixture();

        f.handler.purchase(2, &[adult(1), infant(1)]).unwrap();

        assert_eq!(f.payment.payments()[0].total_amount, 25);
        assert_eq!(f.reservation.reservations()[0].total_seats, 1);
    }

    #[test]
    fn collaborators_called_exactly_once() {
        let f = fixture();

        f.handler
            .purchase(3, &[adult(2), adult(3), child(1)])
            .unwrap();

        assert_eq!(f.payment.call_count(), 1);
        assert_eq!(f.reservation.call_count(), 1);
        assert_eq!(f.payment.payments()[0].total_amount, 5 * 25 + 15);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn fails_for_non_positive_account() {
        let f = fixture();

        let result = f.handler.purchase(0, &[adult(1)]);

        assert_eq!(result, Err(InvalidPurchase::invalid_account(0)));
        assert!(f.journal.is_empty());
    }

    #[test]
    fn account_is_checked_before_requests() {
        let f = fixture();

        let result = f.handler.purchase(-1, &[]);

        assert!(matches!(result, Err(InvalidPurchase::InvalidAccount { account_id: -1 })));
    }

    #[test]
    fn fails_for_empty_request() {
        let f = fixture();

        let result = f.handler.purchase(5, &[]);

        assert_eq!(result, Err(InvalidPurchase::EmptyRequest));
        assert!(f.journal.is_empty());
    }

    #[test]
    fn fails_for_too_many_tickets() {
        let f = fixture();

        let result = f.handler.purchase(5, &[adult(26)]);

        assert!(matches!(result, Err(InvalidPurchase::TooManyTickets { requested: 26, .. })));
        assert!(!f.payment.was_called());
        assert!(!f.reservation.was_called());
    }

    #[test]
    fn fails_for_child_without_adult() {
        let f = fixture();

        let result = f.handler.purchase(5, &[child(1), infant(1)]);

        assert_eq!(result, Err(InvalidPurchase::MissingAdult));
        assert!(f.journal.is_empty());
    }
}
