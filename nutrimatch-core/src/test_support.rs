//! Test-only catalog fixtures shared by unit, behaviour, and property tests.

use crate::{FoodItem, Nutrients};

/// Build a food from columns in [`Nutrient::ALL`](crate::Nutrient::ALL) order.
#[must_use]
pub fn food(name: &str, columns: [f64; crate::NUTRIENT_COUNT]) -> FoodItem {
    FoodItem::new(name, Nutrients::from_array(columns))
}

/// Ten everyday foods with realistic per-100g values.
///
/// Columns: calories, fat, saturated fat, carbohydrates, sugars, protein,
/// fibre, sodium.
#[must_use]
pub fn sample_catalog() -> Vec<FoodItem> {
    vec![
        food("Poulet grillé", [165.0, 3.6, 1.0, 0.0, 0.0, 31.0, 0.0, 74.0]),
        food("Riz complet", [370.0, 2.9, 0.6, 77.0, 0.8, 7.9, 3.5, 7.0]),
        food("Brocoli", [34.0, 0.4, 0.1, 6.6, 1.7, 2.8, 2.6, 33.0]),
        food("Saumon", [208.0, 13.0, 3.0, 0.0, 0.0, 20.0, 0.0, 59.0]),
        food("Œufs", [155.0, 11.0, 3.5, 1.1, 0.6, 13.0, 0.0, 124.0]),
        food("Quinoa", [368.0, 6.0, 0.7, 64.0, 0.0, 14.0, 7.0, 7.0]),
        food("Avocat", [160.0, 15.0, 2.1, 9.0, 0.7, 2.0, 7.0, 7.0]),
        food("Amandes", [579.0, 49.0, 3.8, 22.0, 4.4, 21.0, 12.0, 1.0]),
        food("Yaourt grec", [59.0, 0.4, 0.1, 3.6, 3.6, 10.0, 0.0, 36.0]),
        food("Banane", [89.0, 0.3, 0.1, 23.0, 12.0, 1.1, 2.6, 1.0]),
    ]
}

/// Chicken, rice, and broccoli: the smallest catalog with a clear ranking.
#[must_use]
pub fn staple_catalog() -> Vec<FoodItem> {
    vec![
        food("Chicken", [165.0, 3.6, 1.0, 0.0, 0.0, 31.0, 0.0, 74.0]),
        food("Rice", [370.0, 2.9, 0.6, 77.0, 0.8, 7.9, 3.5, 7.0]),
        food("Broccoli", [34.0, 0.4, 0.1, 6.6, 1.7, 2.8, 2.6, 33.0]),
    ]
}
