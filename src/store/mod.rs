mod seed;

use crate::error::ValidationError;
use crate::models::{CourseFilter, CreateDishInput, Dish, Price};

/// The in-memory dish collection and its operations.
///
/// Owns an ordered sequence of [`Dish`] records (insertion order preserved)
/// plus the counter that mints dish ids. All reads are pure functions of the
/// current collection; all mutations are single-step and atomic, so a
/// rejected add leaves the collection exactly as it was.
///
/// The store is single-threaded and ephemeral. A session constructs it from
/// a seed (usually [`MenuStore::seeded`]), mutates it through
/// [`add_dish`](Self::add_dish) / [`remove_dish`](Self::remove_dish), and
/// drops it on exit; nothing is persisted.
pub struct MenuStore {
    dishes: Vec<Dish>,
    /// Next id to assign. Monotonic for the lifetime of the store and never
    /// derived from the current collection length, so a removal followed by
    /// an add cannot mint a duplicate id.
    next_id: u64,
}

impl MenuStore {
    /// Creates a store over the given seed collection.
    ///
    /// The id counter starts one past the largest numeric id in the seed,
    /// so newly added dishes never collide with seeded ones.
    pub fn new(dishes: Vec<Dish>) -> Self {
        let next_id = dishes
            .iter()
            .filter_map(|dish| dish.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self { dishes, next_id }
    }

    /// Creates a store over the fixed default menu.
    pub fn seeded() -> Self {
        Self::new(seed::default_menu())
    }

    /// Validates the payload and appends the new dish.
    ///
    /// Checks run in field order and the first failure wins; on any failure
    /// the collection is untouched. On success the dish gets the next
    /// counter id, is appended at the end, and a copy of it is returned.
    pub fn add_dish(&mut self, input: CreateDishInput) -> Result<Dish, ValidationError> {
        let dish = self.validate(input).inspect_err(|reason| {
            tracing::warn!(%reason, "rejected add-dish payload");
        })?;

        tracing::debug!(id = %dish.id, name = %dish.name, "added dish");
        self.dishes.push(dish.clone());
        Ok(dish)
    }

    fn validate(&mut self, input: CreateDishInput) -> Result<Dish, ValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let description = input.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let price = Price::parse(&input.price)?;

        let id = self.next_id.to_string();
        self.next_id += 1;

        Ok(Dish {
            id,
            name: name.to_string(),
            description: description.to_string(),
            course: input.course,
            price,
        })
    }

    /// Removes the dish with the matching id, preserving the order of the
    /// rest. Returns whether anything was removed; a missing id is a
    /// normal no-op, so removal is idempotent.
    pub fn remove_dish(&mut self, id: &str) -> bool {
        let Some(position) = self.dishes.iter().position(|dish| dish.id == id) else {
            return false;
        };

        let removed = self.dishes.remove(position);
        tracing::debug!(id = %removed.id, name = %removed.name, "removed dish");
        true
    }

    /// The full collection in insertion order.
    pub fn list_all(&self) -> &[Dish] {
        &self.dishes
    }

    /// The subsequence passing the filter, relative order preserved.
    /// [`CourseFilter::All`] returns the whole collection.
    pub fn filter_by_course(&self, filter: CourseFilter) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|dish| filter.matches(dish.course))
            .cloned()
            .collect()
    }

    /// Filters by a raw label as supplied by a filter control.
    ///
    /// A label that is neither `"All"` nor a course name selects nothing.
    pub fn filter_by_label(&self, label: &str) -> Vec<Dish> {
        match CourseFilter::from_str(label) {
            Some(filter) => self.filter_by_course(filter),
            None => Vec::new(),
        }
    }

    /// Arithmetic mean of all price amounts.
    ///
    /// An empty collection has no average: the result is `f64::NAN`, never
    /// a fabricated zero. Callers rendering the value should check
    /// [`is_empty`](Self::is_empty) (or `is_nan`) first.
    pub fn average_price(&self) -> f64 {
        if self.dishes.is_empty() {
            return f64::NAN;
        }

        let total: f64 = self.dishes.iter().map(|dish| dish.price.amount()).sum();
        total / self.dishes.len() as f64
    }

    /// The dish with the matching id, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
