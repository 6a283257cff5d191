//! Seat reservation port.
//!
//! Reserves seats for an account after its payment has been taken. Infants
//! are never included in the seat count.

use crate::domain::foundation::AccountId;

/// Port for the external seat reservation service.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `total_seats` seats for the account.
    fn reserve_seats(&self, account_id: AccountId, total_seats: u32);
}
