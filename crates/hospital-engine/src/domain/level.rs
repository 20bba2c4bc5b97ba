use std::collections::{BTreeMap, BTreeSet};

use crate::core::{AgentId, BoxLetter, Color, GoalTarget, Position};

/// Static data of one puzzle instance.
///
/// A level is built once (usually by [`parse_level`](crate::parse_level)) and
/// outlives every search state created for it.
///
/// # Example
///
/// ```
/// use hospital_engine::{BoxLetter, GoalTarget, Level, Position};
///
/// let a = BoxLetter::from_char('A').unwrap();
/// let level = Level::new("example", 6, 6).with_goal(Position::new(0, 0), GoalTarget::Box(a));
///
/// assert_eq!(level.box_goals().collect::<Vec<_>>(), [(Position::new(0, 0), a)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
    width: usize,
    height: usize,
    walls: BTreeSet<Position>,
    goals: BTreeMap<Position, GoalTarget>,
    agent_colors: BTreeMap<AgentId, Color>,
    box_colors: BTreeMap<BoxLetter, Color>,
}

impl Level {
    /// Creates a level without walls, goals or colors.
    #[must_use]
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            walls: BTreeSet::new(),
            goals: BTreeMap::new(),
            agent_colors: BTreeMap::new(),
            box_colors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_wall(mut self, position: Position) -> Self {
        self.walls.insert(position);
        self
    }

    /// Adds a goal cell. A later goal on the same cell replaces the earlier one.
    #[must_use]
    pub fn with_goal(mut self, position: Position, target: GoalTarget) -> Self {
        self.goals.insert(position, target);
        self
    }

    #[must_use]
    pub fn with_agent_color(mut self, agent: AgentId, color: Color) -> Self {
        self.agent_colors.insert(agent, color);
        self
    }

    #[must_use]
    pub fn with_box_color(mut self, letter: BoxLetter, color: Color) -> Self {
        self.box_colors.insert(letter, color);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` for wall cells and for cells outside the grid.
    #[must_use]
    pub fn is_wall(&self, position: Position) -> bool {
        let inside = usize::try_from(position.row).is_ok_and(|row| row < self.height)
            && usize::try_from(position.col).is_ok_and(|col| col < self.width);
        !inside || self.walls.contains(&position)
    }

    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.walls.iter().copied()
    }

    /// All goal cells in row-major order.
    pub fn goals(&self) -> impl Iterator<Item = (Position, GoalTarget)> + '_ {
        self.goals.iter().map(|(&pos, &target)| (pos, target))
    }

    /// Goal cells that require a box, in row-major order.
    pub fn box_goals(&self) -> impl Iterator<Item = (Position, BoxLetter)> + '_ {
        self.goals().filter_map(|(pos, target)| match target {
            GoalTarget::Box(letter) => Some((pos, letter)),
            GoalTarget::Agent(_) => None,
        })
    }

    #[must_use]
    pub fn goal_at(&self, position: Position) -> Option<GoalTarget> {
        self.goals.get(&position).copied()
    }

    #[must_use]
    pub fn agent_color(&self, agent: AgentId) -> Option<Color> {
        self.agent_colors.get(&agent).copied()
    }

    #[must_use]
    pub fn box_color(&self, letter: BoxLetter) -> Option<Color> {
        self.box_colors.get(&letter).copied()
    }
}
