//! Payment port for charging ticket purchases.
//!
//! Defines the contract for the payment gateway that charges an account once
//! a purchase has passed validation.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any payment backend
//! - **Fire and forget**: Charges are assumed to succeed; there is no error contract
//! - **Pre-validated input**: Callers only pass positive account IDs and computed totals

use crate::domain::foundation::AccountId;

/// Port for the external payment service.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `total_amount` whole currency units to the account.
    fn make_payment(&self, account_id: AccountId, total_amount: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn ticket_payment_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn TicketPaymentService) {}
    }
}
