//! Counts agent sub-goals that are not yet met.
//!
//! The estimate starts at the total number of sub-goals and drops by one for
//! every agent sub-goal whose cell holds the required agent. Box sub-goals
//! are never credited, so on levels with box goals the estimate does not
//! reach zero. It counts goals rather than distances and is only a coarse
//! guide.

use hospital_engine::{GoalDescription, Level, State};

use crate::heuristic::{Heuristic, count_to_estimate};

#[derive(Debug, Default, Clone, Copy)]
pub struct GoalCountHeuristic {}

impl GoalCountHeuristic {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic for GoalCountHeuristic {
    fn name(&self) -> &'static str {
        "goalcount"
    }

    fn preprocess(&mut self, _level: &Level) {}

    fn evaluate(&self, state: &State, goal_description: &GoalDescription) -> u32 {
        let satisfied = goal_description
            .agent_goals()
            .filter(|&(position, agent)| state.agent_at(position) == Some(agent))
            .count();
        count_to_estimate(goal_description.num_sub_goals() - satisfied)
    }
}

#[cfg(test)]
mod tests {
    use hospital_engine::{AgentId, BoxLetter, GoalTarget, Position, SubGoal};

    use super::*;

    fn agent(ch: char) -> AgentId {
        AgentId::from_char(ch).unwrap()
    }

    fn agent_goals() -> GoalDescription {
        GoalDescription::new([
            SubGoal::new(Position::new(2, 2), GoalTarget::Agent(agent('0'))),
            SubGoal::new(Position::new(3, 3), GoalTarget::Agent(agent('1'))),
        ])
    }

    #[test]
    fn test_one_of_two_agents_home() {
        let state = State::new(
            [
                (agent('0'), Position::new(2, 2)),
                (agent('1'), Position::new(0, 5)),
            ],
            [],
        );
        assert_eq!(GoalCountHeuristic::new().evaluate(&state, &agent_goals()), 1);
    }

    #[test]
    fn test_no_agent_on_goal_cells() {
        let state = State::new(
            [
                (agent('0'), Position::new(0, 0)),
                (agent('1'), Position::new(0, 1)),
            ],
            [],
        );
        let goals = agent_goals();
        assert_eq!(
            GoalCountHeuristic::new().evaluate(&state, &goals),
            u32::try_from(goals.num_sub_goals()).unwrap()
        );
    }

    #[test]
    fn test_all_agents_home() {
        let state = State::new(
            [
                (agent('0'), Position::new(2, 2)),
                (agent('1'), Position::new(3, 3)),
            ],
            [],
        );
        assert_eq!(GoalCountHeuristic::new().evaluate(&state, &agent_goals()), 0);
    }

    #[test]
    fn test_wrong_agent_on_goal_cell() {
        // Agents swapped
        let state = State::new(
            [
                (agent('0'), Position::new(3, 3)),
                (agent('1'), Position::new(2, 2)),
            ],
            [],
        );
        assert_eq!(GoalCountHeuristic::new().evaluate(&state, &agent_goals()), 2);
    }

    #[test]
    fn test_box_goals_are_not_credited() {
        let a = BoxLetter::from_char('A').unwrap();
        let goals = GoalDescription::new([
            SubGoal::new(Position::new(2, 2), GoalTarget::Agent(agent('0'))),
            SubGoal::new(Position::new(1, 1), GoalTarget::Box(a)),
        ]);
        let state = State::new(
            [(agent('0'), Position::new(2, 2))],
            [(Position::new(1, 1), a)],
        );

        let mut heuristic = GoalCountHeuristic::new();
        heuristic.preprocess(&Level::new("unused", 3, 3));
        assert_eq!(heuristic.evaluate(&state, &goals), 1);
    }

    #[test]
    fn test_no_sub_goals() {
        let state = State::new([(agent('0'), Position::new(0, 0))], []);
        assert_eq!(
            GoalCountHeuristic::new().evaluate(&state, &GoalDescription::default()),
            0
        );
    }
}
