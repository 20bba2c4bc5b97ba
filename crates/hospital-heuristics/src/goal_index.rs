//! Per-level lookup from box letter to goal cells.
//!
//! Finding the nearest goal of a box's letter is the inner loop of the
//! distance heuristics. Scanning every goal cell for every box on every
//! evaluation is wasteful, since goal cells never change during a search.
//! [`GoalIndex`] groups them by letter once, at preprocessing time.

use std::collections::BTreeMap;

use hospital_engine::{BoxLetter, Level, Position};
use serde::Serialize;

/// Goal cells grouped by the box letter they require.
///
/// Cells of a letter keep the order they were given in. The index is never
/// modified after construction.
///
/// # Example
///
/// ```
/// use hospital_engine::{BoxLetter, Position};
/// use hospital_heuristics::goal_index::GoalIndex;
///
/// let a = BoxLetter::from_char('A').unwrap();
/// let index = GoalIndex::from_box_goals([(Position::new(0, 0), a), (Position::new(4, 4), a)]);
///
/// assert_eq!(index.nearest_goal_distance(a, Position::new(3, 4)), Some(1));
/// assert_eq!(index.nearest_goal_distance(BoxLetter::from_char('B').unwrap(), Position::new(3, 4)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GoalIndex {
    positions: BTreeMap<BoxLetter, Vec<Position>>,
}

impl GoalIndex {
    /// Indexes the box goals of `level`.
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        Self::from_box_goals(level.box_goals())
    }

    #[must_use]
    pub fn from_box_goals<I>(box_goals: I) -> Self
    where
        I: IntoIterator<Item = (Position, BoxLetter)>,
    {
        let mut positions = BTreeMap::<BoxLetter, Vec<Position>>::new();
        for (position, letter) in box_goals {
            positions.entry(letter).or_default().push(position);
        }
        Self { positions }
    }

    /// Goal cells requiring `letter`, or `None` if the level has none.
    #[must_use]
    pub fn goal_positions(&self, letter: BoxLetter) -> Option<&[Position]> {
        self.positions.get(&letter).map(Vec::as_slice)
    }

    /// Manhattan distance from `from` to the nearest goal cell requiring
    /// `letter`, or `None` if the level has no such cell.
    #[must_use]
    pub fn nearest_goal_distance(&self, letter: BoxLetter, from: Position) -> Option<u32> {
        self.goal_positions(letter)?
            .iter()
            .map(|goal| from.manhattan_distance(*goal))
            .min()
    }

    pub fn letters(&self) -> impl Iterator<Item = BoxLetter> + '_ {
        self.positions.keys().copied()
    }

    #[must_use]
    pub fn num_letters(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn num_goals(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use hospital_engine::{AgentId, GoalTarget};

    use super::*;

    fn letter(ch: char) -> BoxLetter {
        BoxLetter::from_char(ch).unwrap()
    }

    #[test]
    fn test_from_level_groups_by_letter() {
        let level = Level::new("index", 8, 8)
            .with_goal(Position::new(0, 0), GoalTarget::Box(letter('A')))
            .with_goal(Position::new(5, 5), GoalTarget::Box(letter('B')))
            .with_goal(Position::new(7, 1), GoalTarget::Box(letter('A')))
            .with_goal(
                Position::new(3, 3),
                GoalTarget::Agent(AgentId::from_char('0').unwrap()),
            );

        let index = GoalIndex::from_level(&level);

        assert_eq!(index.num_letters(), 2);
        assert_eq!(index.num_goals(), 3);
        assert_eq!(
            index.goal_positions(letter('A')),
            Some([Position::new(0, 0), Position::new(7, 1)].as_slice())
        );
        assert_eq!(
            index.goal_positions(letter('B')),
            Some([Position::new(5, 5)].as_slice())
        );
        assert_eq!(index.goal_positions(letter('C')), None);
        assert_eq!(
            index.letters().collect::<Vec<_>>(),
            [letter('A'), letter('B')]
        );
    }

    #[test]
    fn test_nearest_goal_distance() {
        let index = GoalIndex::from_box_goals([
            (Position::new(0, 0), letter('A')),
            (Position::new(7, 1), letter('A')),
        ]);

        assert_eq!(index.nearest_goal_distance(letter('A'), Position::new(1, 0)), Some(1));
        assert_eq!(index.nearest_goal_distance(letter('A'), Position::new(6, 3)), Some(3));
        assert_eq!(index.nearest_goal_distance(letter('A'), Position::new(7, 1)), Some(0));
        assert_eq!(index.nearest_goal_distance(letter('Z'), Position::new(0, 0)), None);
    }

    #[test]
    fn test_empty_level() {
        let index = GoalIndex::from_level(&Level::new("empty", 3, 3));
        assert!(index.is_empty());
        assert_eq!(index.num_goals(), 0);
        assert_eq!(index.nearest_goal_distance(letter('A'), Position::new(0, 0)), None);
    }

    #[test]
    fn test_serialize() {
        let index = GoalIndex::from_box_goals([
            (Position::new(0, 0), letter('A')),
            (Position::new(5, 5), letter('B')),
        ]);
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(
            json,
            r#"{"A":[{"row":0,"col":0}],"B":[{"row":5,"col":5}]}"#
        );
    }
}
