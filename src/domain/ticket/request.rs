//! Ticket request value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TicketCategory;
use crate::domain::foundation::ValidationError;

/// A request for a number of tickets of a single category.
///
/// Immutable once built. The quantity is always at least one, whether the
/// value was built with [`TicketRequest::new`] or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest")]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: u32,
}

impl TicketRequest {
    /// Creates a ticket request, rejecting a zero quantity.
    pub fn new(category: TicketCategory, quantity: u32) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::not_positive("quantity", 0));
        }
        Ok(Self { category, quantity })
    }

    pub fn adult(quantity: u32) -> Result<Self, ValidationError> {
        Self::new(TicketCategory::Adult, quantity)
    }

    pub fn child(quantity: u32) -> Result<Self, ValidationError> {
        Self::new(TicketCategory::Child, quantity)
    }

    pub fn infant(quantity: u32) -> Result<Self, ValidationError> {
        Self::new(TicketCategory::Infant, quantity)
    }

    /// Bypasses validation so tests can reach the defensive quantity checks.
    #[cfg(test)]
    pub(crate) fn unchecked(category: TicketCategory, quantity: u32) -> Self {
        Self { category, quantity }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.category)
    }
}

/// Wire shape accepted on deserialization, before validation.
#[derive(Deserialize)]
struct RawTicketRequest {
    category: TicketCategory,
    quantity: i64,
}

impl TryFrom<RawTicketRequest> for TicketRequest {
    type Error = ValidationError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        if raw.quantity <= 0 {
            return Err(ValidationError::not_positive("quantity", raw.quantity));
        }
        let quantity = u32::try_from(raw.quantity).map_err(|_| {
            ValidationError::out_of_range("quantity", 1, i64::from(u32::MAX), raw.quantity)
        })?;
        Self::new(raw.category, quantity)
    }
}
