use thiserror::Error;

/// Why an add-dish payload was rejected.
///
/// Each variant carries a message the presentation layer can show verbatim
/// next to the offending form field. A missing id is never an error:
/// removal treats it as a no-op and lookup returns `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Dish name is empty or whitespace-only.
    #[error("dish name must not be empty")]
    EmptyName,

    /// Description is empty or whitespace-only.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Price entry is empty or whitespace-only.
    #[error("price must not be empty")]
    EmptyPrice,

    /// Price entry does not parse as a number.
    #[error("price is not a number: {raw:?}")]
    PriceNotNumeric { raw: String },

    /// Price parsed but is below zero.
    #[error("price must not be negative: {amount}")]
    NegativePrice { amount: f64 },
}
