//! Domain models for the menu store.
//!
//! # Core Concepts
//!
//! - [`Dish`]: one menu item record (name, description, course, price).
//!   Immutable once created; the store assigns its id.
//! - [`Course`]: the closed category enumeration (starter, main, dessert).
//! - [`CourseFilter`]: what a filter control supplies, either one concrete
//!   course or the `All` sentinel.
//! - [`Price`]: a Rand-denominated amount. Stored numerically, rendered and
//!   serialized with the `R` prefix (`R80`).
//! - [`CreateDishInput`]: the raw add-dish form payload, validated by the
//!   store before anything is appended.

mod course;
mod dish;
mod price;

pub use course::*;
pub use dish::*;
pub use price::*;
