//! Mock payment service for testing.
//!
//! Records every charge so tests can assert on the account and amount, and
//! optionally mirrors calls into a shared [`CallJournal`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{CallJournal, CollaboratorCall};
use crate::domain::foundation::AccountId;
use crate::ports::TicketPaymentService;

/// A recorded `make_payment` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRecord {
    pub account_id: AccountId,
    pub total_amount: u32,
}

/// Mock payment service that records charges.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentService {
    payments: Arc<Mutex<Vec<PaymentRecord>>>,
    journal: Option<CallJournal>,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that also writes its calls to a shared journal.
    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            payments: Arc::default(),
            journal: Some(journal),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded payments.
    pub fn payments(&self) -> Vec<PaymentRecord> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Sum of every amount charged so far.
    pub fn total_charged(&self) -> u64 {
        self.lock()
            .iter()
            .map(|payment| u64::from(payment.total_amount))
            .sum()
    }

    pub fn clear_calls(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PaymentRecord>> {
        self.payments.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketPaymentService for MockPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) {
        self.lock().push(PaymentRecord {
            account_id,
            total_amount,
        });
        if let Some(journal) = &self.journal {
            journal.record(CollaboratorCall::Payment {
                account_id,
                total_amount,
            });
        }
    }
}
