use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A monetary amount in Rand.
///
/// Stored as the bare number; the `R` prefix exists only in the display and
/// serialized forms (`R80`), matching the shape of the menu's data records.
/// Amounts are validated to be finite and non-negative on the way in, so a
/// constructed `Price` is always safe to average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Price(f64);

impl Price {
    /// Parses a raw price entry, with or without the `R` prefix.
    ///
    /// Whitespace is trimmed first; an empty entry, a non-numeric entry,
    /// and a negative amount are each rejected with their own reason.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPrice);
        }

        let digits = trimmed.strip_prefix('R').unwrap_or(trimmed);
        let amount: f64 = digits.parse().map_err(|_| ValidationError::PriceNotNumeric {
            raw: trimmed.to_string(),
        })?;

        if !amount.is_finite() {
            return Err(ValidationError::PriceNotNumeric {
                raw: trimmed.to_string(),
            });
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativePrice { amount });
        }

        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}
