use serde::{Deserialize, Serialize};

use crate::core::{AgentId, BoxLetter, GoalTarget, Position};

use super::{level::Level, state::State};

/// One atomic condition required for the puzzle to be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubGoal {
    pub position: Position,
    pub target: GoalTarget,
}

impl SubGoal {
    #[must_use]
    pub const fn new(position: Position, target: GoalTarget) -> Self {
        Self { position, target }
    }

    /// Returns `true` if the required box or agent occupies the goal cell.
    #[must_use]
    pub fn is_satisfied_by(&self, state: &State) -> bool {
        match self.target {
            GoalTarget::Box(letter) => state.box_at(self.position) == Some(letter),
            GoalTarget::Agent(agent) => state.agent_at(self.position) == Some(agent),
        }
    }
}

/// The sub-goals a puzzle must satisfy.
///
/// Sub-goals keep the order they were given in; for descriptions built from a
/// [`Level`] that is row-major order of the goal cells.
///
/// # Example
///
/// ```
/// use hospital_engine::{AgentId, GoalDescription, GoalTarget, Position, State, SubGoal};
///
/// let agent0 = AgentId::from_char('0').unwrap();
/// let goals = GoalDescription::new([SubGoal::new(Position::new(2, 2), GoalTarget::Agent(agent0))]);
///
/// let state = State::new([(agent0, Position::new(2, 2))], []);
/// assert!(goals.is_goal_state(&state));
/// assert_eq!(goals.num_unsatisfied(&state), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDescription {
    sub_goals: Vec<SubGoal>,
}

impl GoalDescription {
    #[must_use]
    pub fn new<I>(sub_goals: I) -> Self
    where
        I: IntoIterator<Item = SubGoal>,
    {
        Self {
            sub_goals: sub_goals.into_iter().collect(),
        }
    }

    /// Builds the description requiring every goal cell of `level`.
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        Self::new(
            level
                .goals()
                .map(|(position, target)| SubGoal::new(position, target)),
        )
    }

    #[must_use]
    pub fn sub_goals(&self) -> &[SubGoal] {
        &self.sub_goals
    }

    #[must_use]
    pub fn num_sub_goals(&self) -> usize {
        self.sub_goals.len()
    }

    /// Sub-goals requiring a box, as `(cell, letter)` pairs.
    pub fn box_goals(&self) -> impl Iterator<Item = (Position, BoxLetter)> + '_ {
        self.sub_goals.iter().filter_map(|goal| match goal.target {
            GoalTarget::Box(letter) => Some((goal.position, letter)),
            GoalTarget::Agent(_) => None,
        })
    }

    /// Sub-goals requiring an agent, as `(cell, agent)` pairs.
    pub fn agent_goals(&self) -> impl Iterator<Item = (Position, AgentId)> + '_ {
        self.sub_goals.iter().filter_map(|goal| match goal.target {
            GoalTarget::Agent(agent) => Some((goal.position, agent)),
            GoalTarget::Box(_) => None,
        })
    }

    #[must_use]
    pub fn num_unsatisfied(&self, state: &State) -> usize {
        self.sub_goals
            .iter()
            .filter(|goal| !goal.is_satisfied_by(state))
            .count()
    }

    #[must_use]
    pub fn is_goal_state(&self, state: &State) -> bool {
        self.sub_goals.iter().all(|goal| goal.is_satisfied_by(state))
    }
}
