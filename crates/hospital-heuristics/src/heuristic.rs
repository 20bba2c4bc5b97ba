//! The heuristic contract and the closed set of implementations.

use std::fmt;

use hospital_engine::{GoalDescription, Level, State};
use serde::{Deserialize, Serialize};

use crate::{advanced::AdvancedHeuristic, goal_count::GoalCountHeuristic, zero::ZeroHeuristic};

/// Estimates the distance from a state to goal satisfaction.
///
/// The driver calls [`preprocess`](Self::preprocess) once per level and then
/// [`evaluate`](Self::evaluate) any number of times. Implementations must
/// not depend on anything but the evaluated inputs and what `preprocess`
/// built, so that equal inputs always give equal estimates.
pub trait Heuristic: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Builds lookup structures for `level`.
    ///
    /// Called exactly once, before the first [`evaluate`](Self::evaluate).
    fn preprocess(&mut self, level: &Level);

    /// Returns the estimate for `state` (lower is closer to the goal).
    #[must_use]
    fn evaluate(&self, state: &State, goal_description: &GoalDescription) -> u32;
}

pub type BoxedHeuristic = Box<dyn Heuristic>;

impl Heuristic for BoxedHeuristic {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn preprocess(&mut self, level: &Level) {
        self.as_mut().preprocess(level);
    }

    fn evaluate(&self, state: &State, goal_description: &GoalDescription) -> u32 {
        self.as_ref().evaluate(state, goal_description)
    }
}

/// Selects one of the available heuristics.
///
/// Parses case-insensitively from its variant name. `Display` and serde both
/// use the lowercase name (`zero`, `goalcount`, `advanced`), so every
/// spelling this type prints can be read back.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    #[display("zero")]
    Zero,
    #[display("goalcount")]
    GoalCount,
    #[default]
    #[display("advanced")]
    Advanced,
}

impl HeuristicKind {
    pub const ALL: [Self; 3] = [Self::Zero, Self::GoalCount, Self::Advanced];

    /// Creates a fresh heuristic of this kind; it still needs preprocessing.
    #[must_use]
    pub fn build(self) -> BoxedHeuristic {
        match self {
            Self::Zero => Box::new(ZeroHeuristic::new()),
            Self::GoalCount => Box::new(GoalCountHeuristic::new()),
            Self::Advanced => Box::new(AdvancedHeuristic::new()),
        }
    }
}

/// Converts a count to an estimate, saturating on absurdly large levels.
pub(crate) fn count_to_estimate(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
