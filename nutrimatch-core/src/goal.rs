//! Dietary goals steering the ranking weights.
//!
//! The enum keeps goal handling closed: only three behaviours exist. Strict
//! parsing goes through [`FromStr`](std::str::FromStr); the lossy boundary
//! used by deserialization falls back to [`Goal::Maintenance`].
//!
//! # Examples
//! ```
//! use nutrimatch_core::Goal;
//!
//! assert_eq!(Goal::WeightLoss.as_str(), "weight-loss");
//! assert_eq!("prise de masse".parse::<Goal>(), Ok(Goal::WeightGain));
//! assert_eq!(Goal::from_str_lossy("bulk up"), Goal::Maintenance);
//! ```

use thiserror::Error;

/// A user's declared dietary goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Goal {
    /// Lose weight: favour light, fibrous, protein-rich foods.
    WeightLoss,
    /// Keep weight stable: favour nutrient-dense foods.
    #[default]
    Maintenance,
    /// Gain weight or mass: favour calorie- and protein-rich foods.
    WeightGain,
}

/// Error returned when strict goal parsing fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown goal '{input}'")]
pub struct GoalParseError {
    /// Rejected input.
    pub input: String,
}

impl Goal {
    /// Every goal in declaration order.
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::Maintenance, Self::WeightGain];

    /// Return the goal as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::Maintenance => "maintenance",
            Self::WeightGain => "weight-gain",
        }
    }

    /// Parse a goal, treating anything unrecognised as [`Goal::Maintenance`].
    ///
    /// Callers needing strict validation should use `str::parse` instead.
    #[must_use]
    pub fn from_str_lossy(input: &str) -> Self {
        input.parse().unwrap_or_else(|err: GoalParseError| {
            log::warn!("{err}; defaulting to {}", Self::Maintenance);
            Self::Maintenance
        })
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalised.as_str() {
            "weight-loss" | "loss" | "lose" | "perte-de-poids" => Ok(Self::WeightLoss),
            "maintenance" | "maintain" | "maintien" => Ok(Self::Maintenance),
            "weight-gain" | "gain" | "mass-gain" | "prise-de-masse" => Ok(Self::WeightGain),
            _ => Err(GoalParseError {
                input: s.to_owned(),
            }),
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        value.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("weight-loss", Goal::WeightLoss)]
    #[case("Weight_Loss", Goal::WeightLoss)]
    #[case("Perte de poids", Goal::WeightLoss)]
    #[case("maintain", Goal::Maintenance)]
    #[case("Maintien", Goal::Maintenance)]
    #[case(" weight gain ", Goal::WeightGain)]
    #[case("Prise de masse", Goal::WeightGain)]
    fn parses_known_spellings(#[case] input: &str, #[case] expected: Goal) {
        assert_eq!(Goal::from_str(input), Ok(expected));
    }

    #[rstest]
    fn strict_parsing_rejects_unknown() {
        let err = Goal::from_str("keto").expect_err("unknown goal should fail");
        assert!(err.to_string().contains("unknown goal"));
    }

    #[rstest]
    #[case("keto")]
    #[case("")]
    fn lossy_parsing_defaults_to_maintenance(#[case] input: &str) {
        assert_eq!(Goal::from_str_lossy(input), Goal::Maintenance);
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for goal in Goal::ALL {
            assert_eq!(goal.to_string().parse::<Goal>(), Ok(goal));
        }
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_unknown_goal_falls_back() {
        let goal: Goal = serde_json::from_str(r#""cutting""#).expect("decode goal");
        assert_eq!(goal, Goal::Maintenance);
        let encoded = serde_json::to_string(&Goal::WeightGain).expect("encode goal");
        assert_eq!(encoded, r#""weight-gain""#);
    }
}
