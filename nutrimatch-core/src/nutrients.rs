//! Per-100g nutrient composition of a food.
//!
//! [`Nutrient`] names the eight feature columns in the fixed order used by the
//! ranking engine, and [`Nutrients`] stores one value per column.
//!
//! # Examples
//! ```
//! use nutrimatch_core::{Nutrient, Nutrients};
//!
//! let nutrients = Nutrients {
//!     calories: 165.0,
//!     protein: 31.0,
//!     ..Nutrients::default()
//! };
//! assert_eq!(nutrients.get(Nutrient::Protein), 31.0);
//! assert_eq!(nutrients.to_array()[0], 165.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of nutrient feature columns.
pub const NUTRIENT_COUNT: usize = 8;

/// A single nutrient feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    /// Energy in kilocalories.
    Calories,
    /// Total fat in grams.
    Fat,
    /// Saturated fat in grams.
    SaturatedFat,
    /// Carbohydrates in grams.
    Carbohydrates,
    /// Sugars in grams.
    Sugars,
    /// Protein in grams.
    Protein,
    /// Dietary fibre in grams.
    Fiber,
    /// Sodium in milligrams.
    Sodium,
}

impl Nutrient {
    /// Every column in feature-vector order.
    pub const ALL: [Self; NUTRIENT_COUNT] = [
        Self::Calories,
        Self::Fat,
        Self::SaturatedFat,
        Self::Carbohydrates,
        Self::Sugars,
        Self::Protein,
        Self::Fiber,
        Self::Sodium,
    ];

    /// Position of the column inside a feature vector.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Calories => 0,
            Self::Fat => 1,
            Self::SaturatedFat => 2,
            Self::Carbohydrates => 3,
            Self::Sugars => 4,
            Self::Protein => 5,
            Self::Fiber => 6,
            Self::Sodium => 7,
        }
    }

    /// Return the column name as a `snake_case` `&str`.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::Nutrient;
    ///
    /// assert_eq!(Nutrient::SaturatedFat.as_str(), "saturated_fat");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturated_fat",
            Self::Carbohydrates => "carbohydrates",
            Self::Sugars => "sugars",
            Self::Protein => "protein",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrient values expressed per 100g.
///
/// Absent and `null` fields deserialize as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Nutrients {
    /// Energy in kilocalories.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub calories: f64,
    /// Total fat in grams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub fat: f64,
    /// Saturated fat in grams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub saturated_fat: f64,
    /// Carbohydrates in grams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub carbohydrates: f64,
    /// Sugars in grams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub sugars: f64,
    /// Protein in grams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub protein: f64,
    /// Dietary fibre in grams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub fiber: f64,
    /// Sodium in milligrams.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "missing_as_zero"))]
    pub sodium: f64,
}

impl Nutrients {
    /// Read a single column.
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Fat => self.fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Sugars => self.sugars,
            Nutrient::Protein => self.protein,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
        }
    }

    /// Lay the columns out in [`Nutrient::ALL`] order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; NUTRIENT_COUNT] {
        [
            self.calories,
            self.fat,
            self.saturated_fat,
            self.carbohydrates,
            self.sugars,
            self.protein,
            self.fiber,
            self.sodium,
        ]
    }

    /// Rebuild nutrients from a feature vector in [`Nutrient::ALL`] order.
    #[must_use]
    pub const fn from_array(values: [f64; NUTRIENT_COUNT]) -> Self {
        let [
            calories,
            fat,
            saturated_fat,
            carbohydrates,
            sugars,
            protein,
            fiber,
            sodium,
        ] = values;
        Self {
            calories,
            fat,
            saturated_fat,
            carbohydrates,
            sugars,
            protein,
            fiber,
            sodium,
        }
    }

    /// Replace NaN columns with `0.0`, leaving every other value untouched.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::Nutrients;
    ///
    /// let nutrients = Nutrients { protein: f64::NAN, fat: 3.0, ..Nutrients::default() };
    /// let filled = nutrients.with_missing_as_zero();
    /// assert_eq!(filled.protein, 0.0);
    /// assert_eq!(filled.fat, 3.0);
    /// ```
    #[must_use]
    pub fn with_missing_as_zero(self) -> Self {
        Self::from_array(
            self.to_array()
                .map(|value| if value.is_nan() { 0.0 } else { value }),
        )
    }

    /// Return the first column holding a negative or non-finite value.
    #[must_use]
    pub fn first_invalid(&self) -> Option<(Nutrient, f64)> {
        Nutrient::ALL
            .into_iter()
            .map(|nutrient| (nutrient, self.get(nutrient)))
            .find(|&(_, value)| !value.is_finite() || value < 0.0)
    }
}

#[cfg(feature = "serde")]
fn missing_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn column_order_matches_indices() {
        for (position, nutrient) in Nutrient::ALL.into_iter().enumerate() {
            assert_eq!(nutrient.index(), position);
        }
    }

    #[rstest]
    fn array_layout_follows_columns() {
        let nutrients = Nutrients::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        for nutrient in Nutrient::ALL {
            let from_array = nutrients.to_array().get(nutrient.index()).copied();
            assert_eq!(from_array, Some(nutrients.get(nutrient)));
        }
        assert_eq!(nutrients.sodium, 8.0);
    }

    #[rstest]
    #[case(Nutrients { fiber: -1.0, ..Nutrients::default() }, Some(Nutrient::Fiber))]
    #[case(Nutrients { sugars: f64::NAN, ..Nutrients::default() }, Some(Nutrient::Sugars))]
    #[case(Nutrients { calories: f64::INFINITY, ..Nutrients::default() }, Some(Nutrient::Calories))]
    #[case(Nutrients::default(), None)]
    fn first_invalid_reports_bad_column(
        #[case] nutrients: Nutrients,
        #[case] expected: Option<Nutrient>,
    ) {
        assert_eq!(nutrients.first_invalid().map(|(column, _)| column), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_fields_default_to_zero() {
        let nutrients: Nutrients =
            serde_json::from_str(r#"{"calories": 34.0, "protein": 2.8}"#).expect("decode");
        assert_eq!(nutrients.calories, 34.0);
        assert_eq!(nutrients.protein, 2.8);
        assert_eq!(nutrients.sodium, 0.0);
    }

    #[rstest]
    fn nan_columns_fill_with_zero() {
        let nutrients = Nutrients {
            sugars: f64::NAN,
            sodium: 120.0,
            ..Nutrients::default()
        }
        .with_missing_as_zero();
        assert_eq!(nutrients.sugars, 0.0);
        assert_eq!(nutrients.sodium, 120.0);
        assert_eq!(nutrients.first_invalid(), None);
    }

    #[rstest]
    fn fill_keeps_infinite_and_negative_values() {
        let nutrients = Nutrients {
            calories: f64::INFINITY,
            fiber: -2.0,
            ..Nutrients::default()
        }
        .with_missing_as_zero();
        assert_eq!(nutrients.calories, f64::INFINITY);
        assert_eq!(nutrients.fiber, -2.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"calories": 304.0, "protein": null}"#)]
    #[case(r#"{"calories": 304.0, "protein": null, "sodium": null}"#)]
    fn null_fields_decode_as_zero(#[case] json: &str) {
        let nutrients: Nutrients = serde_json::from_str(json).expect("decode");
        assert_eq!(nutrients.calories, 304.0);
        assert_eq!(nutrients.protein, 0.0);
        assert_eq!(nutrients.sodium, 0.0);
    }
}
