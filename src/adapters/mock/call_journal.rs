//! Ordered record of collaborator calls shared between mocks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::AccountId;

/// A single call made to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorCall {
    Payment {
        account_id: AccountId,
        total_amount: u32,
    },
    Reservation {
        account_id: AccountId,
        total_seats: u32,
    },
}

/// Append-only journal of collaborator calls.
///
/// Clones share the same underlying log, so handing one journal to several
/// mocks records their calls in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct CallJournal {
    entries: Arc<Mutex<Vec<CollaboratorCall>>>,
}

impl CallJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: CollaboratorCall) {
        self.lock().push(call);
    }

    /// Returns all recorded calls, oldest first.
    pub fn entries(&self) -> Vec<CollaboratorCall> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking test thread must not hide the calls recorded before it.
    fn lock(&self) -> MutexGuard<'_, Vec<CollaboratorCall>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
