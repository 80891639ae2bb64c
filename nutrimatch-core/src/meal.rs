//! Meal types and the component slots they split a target across.
//!
//! Each meal type divides the caller's target between a fixed set of slots
//! (main, side, vegetable, fruit). The slot ratios scale calories, carbs, and
//! fat; protein is concentrated in the main slot.
//!
//! # Examples
//! ```
//! use nutrimatch_core::{MealSlot, MealType};
//!
//! let slots: Vec<MealSlot> = MealType::Snack.portions().iter().map(|p| p.slot).collect();
//! assert_eq!(slots, vec![MealSlot::Main, MealSlot::Fruit]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{NutritionalTarget, Recommendation};

const MAIN_PROTEIN_SHARE: f64 = 0.6;
const SIDE_PROTEIN_SHARE: f64 = 0.2;

/// The meal being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MealType {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    #[default]
    Lunch,
    /// Evening meal.
    Dinner,
    /// Between-meal snack.
    Snack,
}

/// A component slot within a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MealSlot {
    /// Main dish, carrying most of the protein.
    Main,
    /// Side dish.
    Side,
    /// Vegetable portion.
    Vegetable,
    /// Fruit portion.
    Fruit,
}

/// Share of a meal target assigned to one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portion {
    /// Slot receiving the share.
    pub slot: MealSlot,
    /// Fraction of calories, carbs, and fat assigned to the slot.
    pub ratio: f64,
}

const fn portion(slot: MealSlot, ratio: f64) -> Portion {
    Portion { slot, ratio }
}

const BREAKFAST: [Portion; 3] = [
    portion(MealSlot::Main, 0.5),
    portion(MealSlot::Side, 0.3),
    portion(MealSlot::Fruit, 0.2),
];
const LUNCH: [Portion; 3] = [
    portion(MealSlot::Main, 0.45),
    portion(MealSlot::Side, 0.35),
    portion(MealSlot::Vegetable, 0.2),
];
const DINNER: [Portion; 3] = [
    portion(MealSlot::Main, 0.4),
    portion(MealSlot::Side, 0.3),
    portion(MealSlot::Vegetable, 0.3),
];
const SNACK: [Portion; 2] = [portion(MealSlot::Main, 0.7), portion(MealSlot::Fruit, 0.3)];

impl MealType {
    /// Slots and ratios for this meal, in presentation order.
    #[must_use]
    pub const fn portions(self) -> &'static [Portion] {
        match self {
            Self::Breakfast => &BREAKFAST,
            Self::Lunch => &LUNCH,
            Self::Dinner => &DINNER,
            Self::Snack => &SNACK,
        }
    }

    /// Return the meal type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(format!("unknown meal type '{s}'")),
        }
    }
}

impl MealSlot {
    /// Return the slot as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Side => "side",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Portion {
    /// Derive the target for this slot from the whole-meal target.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::{Goal, MealType, NutritionalTarget};
    ///
    /// let meal = NutritionalTarget::new(1000.0, 50.0, 100.0, 40.0, Goal::WeightGain).unwrap();
    /// let main = MealType::Lunch.portions()[0].target_for(&meal);
    /// assert_eq!(main.calories, 450.0);
    /// assert_eq!(main.protein, 30.0);
    /// assert_eq!(main.goal, Goal::WeightGain);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "slot targets scale the meal target by fixed ratios"
    )]
    #[must_use]
    pub fn target_for(&self, meal: &NutritionalTarget) -> NutritionalTarget {
        let protein_share = match self.slot {
            MealSlot::Main => MAIN_PROTEIN_SHARE,
            MealSlot::Side | MealSlot::Vegetable | MealSlot::Fruit => SIDE_PROTEIN_SHARE,
        };
        NutritionalTarget {
            calories: meal.calories * self.ratio,
            protein: meal.protein * protein_share,
            carbs: meal.carbs * self.ratio,
            fat: meal.fat * self.ratio,
            goal: meal.goal,
        }
    }
}

/// Ranked foods proposed for one slot of a composed meal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MealComponent {
    /// Slot these foods fill.
    pub slot: MealSlot,
    /// Best matches for the slot target, best first.
    pub foods: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Goal;
    use rstest::rstest;

    #[rstest]
    #[case(MealType::Breakfast)]
    #[case(MealType::Lunch)]
    #[case(MealType::Dinner)]
    #[case(MealType::Snack)]
    #[expect(
        clippy::float_arithmetic,
        reason = "ratios are compared with a tolerance"
    )]
    fn ratios_cover_the_whole_meal(#[case] meal: MealType) {
        let total: f64 = meal.portions().iter().map(|p| p.ratio).sum();
        assert!((total - 1.0).abs() < 1e-9, "{meal} ratios sum to {total}");
    }

    #[rstest]
    fn side_slots_receive_reduced_protein() {
        let meal = NutritionalTarget::new(800.0, 50.0, 90.0, 25.0, Goal::Maintenance)
            .expect("valid target");
        let [_, side, vegetable] = LUNCH;
        assert_eq!(side.target_for(&meal).protein, 10.0);
        assert_eq!(vegetable.target_for(&meal).calories, 160.0);
    }

    #[rstest]
    fn parsing_is_case_insensitive() {
        assert_eq!("Dinner".parse::<MealType>(), Ok(MealType::Dinner));
        assert!("brunch".parse::<MealType>().is_err());
    }
}
