//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier of the account a purchase is made for.
///
/// Always strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an AccountId, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::not_positive("account_id", value));
        }
        Ok(Self(value as u64))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        // Constructed from a positive i64, so this never truncates.
        id.0 as i64
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_accepts_positive_values() {
        assert_eq!(AccountId::new(1).unwrap().value(), 1);
        assert_eq!(AccountId::new(i64::MAX).unwrap().value(), i64::MAX as u64);
    }

    #[test]
    fn account_id_rejects_zero() {
        let err = AccountId::new(0).unwrap_err();
        assert_eq!(err, ValidationError::not_positive("account_id", 0));
    }

    #[test]
    fn account_id_rejects_negative_values() {
        assert!(AccountId::new(-1).is_err());
        assert!(AccountId::new(i64::MIN).is_err());
    }

    #[test]
    fn account_id_displays_number() {
        assert_eq!(AccountId::new(42).unwrap().to_string(), "42");
    }

    #[test]
    fn account_id_converts_back_to_i64() {
        let id = AccountId::try_from(7).unwrap();
        assert_eq!(i64::from(id), 7);
    }
}
