use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::core::{AgentId, BoxLetter, Position};

/// Agent and box positions of one search node.
///
/// A state is immutable once constructed. Agents are kept sorted by id and
/// boxes are keyed by position, so two states with the same contents compare
/// and hash equal regardless of construction order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    agents: ArrayVec<(AgentId, Position), { AgentId::MAX_AGENTS }>,
    boxes: BTreeMap<Position, BoxLetter>,
}

impl State {
    /// Creates a state.
    ///
    /// If an agent appears more than once the last position wins, as does the
    /// last box placed on a cell.
    #[must_use]
    pub fn new<A, B>(agents: A, boxes: B) -> Self
    where
        A: IntoIterator<Item = (AgentId, Position)>,
        B: IntoIterator<Item = (Position, BoxLetter)>,
    {
        let mut agent_list = ArrayVec::<_, { AgentId::MAX_AGENTS }>::new();
        for (agent, position) in agents {
            // At most one slot per id, so capacity is never exceeded
            match agent_list.iter_mut().find(|(id, _)| *id == agent) {
                Some(slot) => slot.1 = position,
                None => agent_list.push((agent, position)),
            }
        }
        agent_list.sort_unstable_by_key(|(id, _)| *id);

        Self {
            agents: agent_list,
            boxes: boxes.into_iter().collect(),
        }
    }

    /// Boxes in row-major order of their positions.
    pub fn boxes(&self) -> impl Iterator<Item = (Position, BoxLetter)> + '_ {
        self.boxes.iter().map(|(&pos, &letter)| (pos, letter))
    }

    #[must_use]
    pub fn num_boxes(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn box_at(&self, position: Position) -> Option<BoxLetter> {
        self.boxes.get(&position).copied()
    }

    /// Agents ordered by id.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, Position)> + '_ {
        self.agents.iter().copied()
    }

    #[must_use]
    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn agent_position(&self, agent: AgentId) -> Option<Position> {
        self.agents
            .iter()
            .find(|(id, _)| *id == agent)
            .map(|(_, pos)| *pos)
    }

    /// Returns the agent standing on `position`, if any.
    #[must_use]
    pub fn agent_at(&self, position: Position) -> Option<AgentId> {
        self.agents
            .iter()
            .find(|(_, pos)| *pos == position)
            .map(|(id, _)| *id)
    }
}
