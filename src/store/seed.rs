//! The fixed menu every session starts from.

use crate::models::{Course, Dish, Price};

fn dish(id: &str, name: &str, description: &str, course: Course, amount: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        course,
        price: Price::parse(amount).expect("seed prices are valid"),
    }
}

/// The ten dishes of the default menu, ids `"1"` through `"10"`.
pub fn default_menu() -> Vec<Dish> {
    vec![
        dish("1", "Starter 1", "Delicious Starter 1", Course::Starter, "R100"),
        dish("2", "Main 1", "Hearty Main Course 1", Course::Main, "R200"),
        dish("3", "Dessert 1", "Sweet Dessert 1", Course::Dessert, "R80"),
        dish("4", "Starter 2", "Delicious Starter 2", Course::Starter, "R110"),
        dish("5", "Main 2", "Hearty Main Course 2", Course::Main, "R250"),
        dish("6", "Dessert 2", "Sweet Dessert 2", Course::Dessert, "R90"),
        dish("7", "Starter 3", "Delicious Starter 3", Course::Starter, "R120"),
        dish("8", "Main 3", "Hearty Main Course 3", Course::Main, "R300"),
        dish("9", "Dessert 3", "Sweet Dessert 3", Course::Dessert, "R100"),
        dish("10", "Starter 4", "Delicious Starter 4", Course::Starter, "R130"),
    ]
}
