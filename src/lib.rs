//! In-memory menu management core.
//!
//! The crate owns one aggregate, [`store::MenuStore`]: an ordered collection
//! of [`models::Dish`] records with explicit add/remove operations and
//! derived read views (course filtering, average price). A presentation
//! layer renders whatever the store returns and calls back into it on user
//! action; the store itself pushes no change notifications, so consumers
//! re-fetch after every mutation.
//!
//! Everything is synchronous and single-threaded. The store is ephemeral:
//! each session starts from a seed collection and nothing is persisted.

pub mod error;
pub mod models;
pub mod store;

pub use error::ValidationError;
pub use models::{Course, CourseFilter, CreateDishInput, Dish, Price};
pub use store::MenuStore;
