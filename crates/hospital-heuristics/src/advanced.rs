//! Sum of nearest-goal distances read straight from the goal description.
//!
//! For every box, the goal description is scanned for box sub-goals of the
//! same letter and the Manhattan distance to the nearest one is added.
//! Boxes whose letter has no sub-goal contribute zero.
//!
//! No index is built; each evaluation rescans the sub-goals. This keeps the
//! heuristic independent of the level and lets it follow whatever goal
//! description the caller passes.
//!
//! # Limitations
//!
//! Boxes are matched to goals independently. Two boxes of one letter may both
//! measure against the same single goal cell, so the estimate can be below
//! the cost of any real assignment.

use hospital_engine::{GoalDescription, Level, State};

use crate::heuristic::Heuristic;

#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancedHeuristic {}

impl AdvancedHeuristic {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic for AdvancedHeuristic {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn preprocess(&mut self, _level: &Level) {}

    fn evaluate(&self, state: &State, goal_description: &GoalDescription) -> u32 {
        let mut total = 0;
        for (box_position, box_letter) in state.boxes() {
            let nearest = goal_description
                .box_goals()
                .filter(|&(_, letter)| letter == box_letter)
                .map(|(goal_position, _)| box_position.manhattan_distance(goal_position))
                .min();
            if let Some(distance) = nearest {
                total += distance;
            }
        }
        total
    }
}
