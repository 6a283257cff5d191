//! Per-category ticket totals for a single purchase.

use super::{TicketCategory, TicketRequest};

/// Number of tickets requested per category.
///
/// Derived from a sequence of [`TicketRequest`]s by summing quantities of the
/// same category. Sums saturate instead of wrapping, so an absurdly large
/// request still trips the ticket limit rather than overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    adult: u32,
    child: u32,
    infant: u32,
}

impl TicketCounts {
    /// Sums the requested quantities per category.
    pub fn tally<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketRequest>,
    {
        requests
            .into_iter()
            .fold(Self::default(), |mut counts, request| {
                let slot = counts.slot_mut(request.category());
                *slot = slot.saturating_add(request.quantity());
                counts
            })
    }

    /// Returns the number of tickets requested for a category.
    pub fn get(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    /// Returns the number of tickets across all categories.
    pub fn total(&self) -> u32 {
        self.adult.saturating_add(self.child).saturating_add(self.infant)
    }

    pub fn has_adult(&self) -> bool {
        self.adult > 0
    }

    /// Returns true if any ticket needs an accompanying adult.
    pub fn needs_adult(&self) -> bool {
        TicketCategory::ALL
            .into_iter()
            .any(|category| category.requires_adult() && self.get(category) > 0)
    }

    /// Total price in whole currency units.
    pub fn total_amount(&self) -> u32 {
        TicketCategory::ALL.into_iter().fold(0u32, |amount, category| {
            amount.saturating_add(self.get(category).saturating_mul(category.unit_price()))
        })
    }

    /// Number of seats to reserve. Infants are not allocated a seat.
    pub fn total_seats(&self) -> u32 {
        TicketCategory::ALL
            .into_iter()
            .filter(TicketCategory::occupies_seat)
            .fold(0u32, |seats, category| seats.saturating_add(self.get(category)))
    }

    fn slot_mut(&mut self, category: TicketCategory) -> &mut u32 {
        match category {
            TicketCategory::Adult => &mut self.adult,
            TicketCategory::Child => &mut self.child,
            TicketCategory::Infant => &mut self.infant,
        }
    }
}
