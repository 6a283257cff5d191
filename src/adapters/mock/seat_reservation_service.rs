//! Mock seat reservation service for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{CallJournal, CollaboratorCall};
use crate::domain::foundation::AccountId;
use crate::ports::SeatReservationService;

/// A recorded `reserve_seats` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationRecord {
    pub account_id: AccountId,
    pub total_seats: u32,
}

/// Mock seat reservation service that records reservations.
#[derive(Debug, Clone, Default)]
pub struct MockSeatReservationService {
    reservations: Arc<Mutex<Vec<ReservationRecord>>>,
    journal: Option<CallJournal>,
}

impl MockSeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that also writes its calls to a shared journal.
    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            reservations: Arc::default(),
            journal: Some(journal),
        }
    }

    /// Get all recorded reservations.
    pub fn reservations(&self) -> Vec<ReservationRecord> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    pub fn clear_calls(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReservationRecord>> {
        self.reservations.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seats(&self, account_id: AccountId, total_seats: u32) {
        self.lock().push(ReservationRecord {
            account_id,
            total_seats,
        });
        if let Some(journal) = &self.journal {
            journal.record(CollaboratorCall::Reservation {
                account_id,
                total_seats,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_reservations() {
        let account_id = AccountId::new(8).unwrap();
        let mock = MockSeatReservationService::new();
        mock.reserve_seats(account_id, 3);

        assert_eq!(
            mock.reservations(),
            vec![ReservationRecord {
                account_id,
                total_seats: 3
            }]
        );
    }

    #[test]
    fn clear_calls_resets_log() {
        let mock = MockSeatReservationService::new();
        mock.reserve_seats(AccountId::new(1).unwrap(), 1);
        mock.clear_calls();
        assert!(!mock.was_called());
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn writes_to_journal_when_attached() {
        let journal = CallJournal::new();
        let mock = MockSeatReservationService::with_journal(journal.clone());
        mock.reserve_seats(AccountId::new(2).unwrap(), 5);

        assert!(matches!(
            journal.entries()[..],
            [CollaboratorCall::Reservation { total_seats: 5, .. }]
        ));
    }
}
