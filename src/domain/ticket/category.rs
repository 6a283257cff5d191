//! Ticket category definitions.
//!
//! Each category carries its fixed unit price and whether it occupies a seat.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Ticket category.
///
/// # Price Table
///
/// | Category | Price | Seat |
/// |----------|-------|------|
/// | Adult | 25 | Yes |
/// | Child | 15 | Yes |
/// | Infant | 0 | No (sits on an adult's lap) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// All categories, in price-table order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Returns the price of a single ticket in whole currency units.
    pub fn unit_price(&self) -> u32 {
        match self {
            TicketCategory::Adult => 25,
            TicketCategory::Child => 15,
            TicketCategory::Infant => 0,
        }
    }

    /// Returns true if a ticket of this category needs its own seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }

    /// Returns true if this category may only be bought alongside an adult ticket.
    pub fn requires_adult(&self) -> bool {
        !matches!(self, TicketCategory::Adult)
    }

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown ticket type '{}'", s))
            })
    }
}
