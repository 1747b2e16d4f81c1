use serde::{Deserialize, Serialize};

use super::{Course, Price};

/// One menu item.
///
/// Dishes are immutable once created: there is no update operation, only
/// add and remove. The `id` is assigned by the store from its monotonic
/// counter and is unique for the lifetime of the store, including across
/// removals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
}

/// Raw add-dish form payload.
///
/// `price` is the untouched text entry (with or without the `R` prefix);
/// the store validates and converts it. Name and description are likewise
/// taken as typed, then trimmed and checked for emptiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDishInput {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}
