//! Distance-plus-count heuristic backed by a precomputed goal index.
//!
//! # Estimate
//!
//! ```text
//! h = Σ_box min_{g ∈ goals(letter(box))} |box - g|₁  +  #unsatisfied sub-goals
//! ```
//!
//! - Boxes whose letter has no goal cell in the level contribute nothing.
//! - The unsatisfied term is computed once per evaluation over the whole goal
//!   description; box sub-goals need a box of the right letter on the cell
//!   and agent sub-goals need the right agent on it.
//!
//! Goal cells come from the [`GoalIndex`] built in
//! [`preprocess`](crate::heuristic::Heuristic::preprocess), so an evaluation
//! costs `O(boxes × goals of the same letter + sub-goals)` without scanning
//! unrelated goals.
//!
//! # Without Preprocessing
//!
//! Before `preprocess` the index is empty. The distance term is then zero
//! and only the unsatisfied count is returned; a warning is logged the first
//! time this happens.

use std::sync::atomic::{AtomicBool, Ordering};

use hospital_engine::{GoalDescription, Level, State};

use crate::{
    goal_index::GoalIndex,
    heuristic::{Heuristic, count_to_estimate},
};

#[derive(Debug, Default)]
pub struct ZeroHeuristic {
    goal_index: Option<GoalIndex>,
    warned_unpreprocessed: AtomicBool,
}

impl ZeroHeuristic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_preprocessed(&self) -> bool {
        self.goal_index.is_some()
    }

    /// The index built by `preprocess`, if it ran.
    #[must_use]
    pub fn goal_index(&self) -> Option<&GoalIndex> {
        self.goal_index.as_ref()
    }

    /// Sum over boxes of the distance to the nearest goal of the same letter.
    #[must_use]
    pub fn distance_term(&self, state: &State) -> u32 {
        let Some(index) = &self.goal_index else {
            if !self.warned_unpreprocessed.swap(true, Ordering::Relaxed) {
                tracing::warn!("zero heuristic evaluated before preprocessing; distance term is 0");
            }
            return 0;
        };
        state
            .boxes()
            .filter_map(|(position, letter)| index.nearest_goal_distance(letter, position))
            .sum()
    }
}

impl Heuristic for ZeroHeuristic {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn preprocess(&mut self, level: &Level) {
        let index = GoalIndex::from_level(level);
        tracing::debug!(
            level_name = level.name(),
            letters = index.num_letters(),
            goals = index.num_goals(),
            "built goal index"
        );
        self.goal_index = Some(index);
    }

    fn evaluate(&self, state: &State, goal_description: &GoalDescription) -> u32 {
        let unsatisfied = count_to_estimate(goal_description.num_unsatisfied(state));
        self.distance_term(state) + unsatisfied
    }
}

#[cfg(test)]
mod tests {
    use hospital_engine::{AgentId, BoxLetter, GoalTarget, Position, SubGoal};

    use super::*;

    fn letter(ch: char) -> BoxLetter {
        BoxLetter::from_char(ch).unwrap()
    }

    fn two_goal_level() -> Level {
        Level::new("two goals", 6, 6)
            .with_goal(Position::new(0, 0), GoalTarget::Box(letter('A')))
            .with_goal(Position::new(5, 5), GoalTarget::Box(letter('B')))
    }

    fn preprocessed(level: &Level) -> ZeroHeuristic {
        let mut heuristic = ZeroHeuristic::new();
        heuristic.preprocess(level);
        heuristic
    }

    #[test]
    fn test_distance_term_sums_every_box() {
        let level = two_goal_level();
        let heuristic = preprocessed(&level);
        let state = State::new(
            [],
            [
                (Position::new(1, 0), letter('A')),
                (Position::new(5, 4), letter('B')),
            ],
        );

        assert_eq!(heuristic.distance_term(&state), 2);
        // Both boxes are off their goals
        let goals = GoalDescription::from_level(&level);
        assert_eq!(heuristic.evaluate(&state, &goals), 2 + 2);
    }

    #[test]
    fn test_solved_state() {
        let level = two_goal_level();
        let heuristic = preprocessed(&level);
        let goals = GoalDescription::from_level(&level);
        let state = State::new(
            [],
            [
                (Position::new(0, 0), letter('A')),
                (Position::new(5, 5), letter('B')),
            ],
        );

        assert_eq!(goals.num_unsatisfied(&state), 0);
        assert_eq!(heuristic.evaluate(&state, &goals), 0);
    }

    #[test]
    fn test_box_without_goal_letter_contributes_nothing() {
        let level = two_goal_level();
        let heuristic = preprocessed(&level);
        let goals = GoalDescription::from_level(&level);
        let state = State::new(
            [],
            [
                (Position::new(0, 0), letter('A')),
                (Position::new(5, 5), letter('B')),
                (Position::new(3, 3), letter('C')),
            ],
        );

        assert_eq!(heuristic.distance_term(&state), 0);
        assert_eq!(heuristic.evaluate(&state, &goals), 0);
    }

    #[test]
    fn test_nearest_of_several_goals() {
        let level = Level::new("several", 10, 10)
            .with_goal(Position::new(0, 0), GoalTarget::Box(letter('A')))
            .with_goal(Position::new(9, 9), GoalTarget::Box(letter('A')));
        let heuristic = preprocessed(&level);
        let state = State::new(
            [],
            [
                (Position::new(1, 1), letter('A')),
                (Position::new(8, 7), letter('A')),
            ],
        );

        assert_eq!(heuristic.distance_term(&state), 2 + 3);
    }

    #[test]
    fn test_unsatisfied_agent_goals_are_counted() {
        let agent0 = AgentId::from_char('0').unwrap();
        let level = two_goal_level();
        let heuristic = preprocessed(&level);
        let goals = GoalDescription::new([SubGoal::new(
            Position::new(2, 2),
            GoalTarget::Agent(agent0),
        )]);

        let away = State::new([(agent0, Position::new(4, 4))], []);
        let home = State::new([(agent0, Position::new(2, 2))], []);
        assert_eq!(heuristic.evaluate(&away, &goals), 1);
        assert_eq!(heuristic.evaluate(&home, &goals), 0);
    }

    #[test]
    fn test_empty_level() {
        let level = Level::new("empty", 4, 4);
        let heuristic = preprocessed(&level);
        let goals = GoalDescription::from_level(&level);
        let state = State::new([], [(Position::new(1, 1), letter('A'))]);

        assert!(heuristic.goal_index().is_some_and(GoalIndex::is_empty));
        assert_eq!(heuristic.evaluate(&state, &goals), 0);
    }

    #[test]
    fn test_unpreprocessed_is_degenerate() {
        let level = two_goal_level();
        let heuristic = ZeroHeuristic::new();
        let goals = GoalDescription::from_level(&level);
        let state = State::new([], [(Position::new(1, 0), letter('A'))]);

        assert!(!heuristic.is_preprocessed());
        assert_eq!(heuristic.distance_term(&state), 0);
        assert_eq!(heuristic.evaluate(&state, &goals), 2);
        // Still degenerate on later calls
        assert_eq!(heuristic.evaluate(&state, &goals), 2);
    }

    #[test]
    fn test_deterministic() {
        let level = two_goal_level();
        let heuristic = preprocessed(&level);
        let goals = GoalDescription::from_level(&level);
        let state = State::new(
            [],
            [
                (Position::new(3, 2), letter('A')),
                (Position::new(1, 4), letter('B')),
            ],
        );

        let first = heuristic.evaluate(&state, &goals);
        for _ in 0..10 {
            assert_eq!(heuristic.evaluate(&state, &goals), first);
        }
    }
}
