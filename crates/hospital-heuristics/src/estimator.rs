//! A preprocessed heuristic bound to one level's goals.
//!
//! [`Estimator`] is the shape a search driver holds: construction runs
//! [`Heuristic::preprocess`] exactly once, and [`Estimator::estimate`] can
//! then be called for every generated state, from any number of threads.
//!
//! # Example
//!
//! ```
//! use hospital_engine::{AgentId, GoalDescription, GoalTarget, Level, Position, State};
//! use hospital_heuristics::{estimator::Estimator, heuristic::HeuristicKind};
//!
//! let agent0 = AgentId::from_char('0').unwrap();
//! let level = Level::new("example", 4, 4).with_goal(Position::new(2, 2), GoalTarget::Agent(agent0));
//! let goals = GoalDescription::from_level(&level);
//!
//! let estimator = Estimator::new(HeuristicKind::GoalCount.build(), &level, &goals);
//! assert_eq!(estimator.estimate(&State::new([(agent0, Position::new(0, 0))], [])), 1);
//! assert_eq!(estimator.estimate(&State::new([(agent0, Position::new(2, 2))], [])), 0);
//! ```

use hospital_engine::{GoalDescription, Level, State};

use crate::heuristic::{BoxedHeuristic, Heuristic};

#[derive(Debug)]
pub struct Estimator<'a> {
    heuristic: BoxedHeuristic,
    goal_description: &'a GoalDescription,
}

impl<'a> Estimator<'a> {
    /// Preprocesses `heuristic` for `level` and binds it to `goal_description`.
    #[must_use]
    pub fn new(
        mut heuristic: BoxedHeuristic,
        level: &Level,
        goal_description: &'a GoalDescription,
    ) -> Self {
        heuristic.preprocess(level);
        tracing::debug!(
            heuristic = heuristic.name(),
            level_name = level.name(),
            sub_goals = goal_description.num_sub_goals(),
            "heuristic ready"
        );
        Self {
            heuristic,
            goal_description,
        }
    }

    #[must_use]
    pub fn heuristic(&self) -> &dyn Heuristic {
        self.heuristic.as_ref()
    }

    #[must_use]
    pub fn goal_description(&self) -> &GoalDescription {
        self.goal_description
    }

    #[must_use]
    pub fn estimate(&self, state: &State) -> u32 {
        let value = self.heuristic.evaluate(state, self.goal_description);
        tracing::trace!(heuristic = self.heuristic.name(), value, "evaluated state");
        value
    }
}
