//! Level, state and goal data of a hospital puzzle.
//!
//! - [`Level`] - Static per-puzzle data: walls, goal cells and entity colors.
//!   Built once at load time and read-only afterwards.
//! - [`State`] - Agent and box positions of one search node. Immutable once
//!   constructed; successor generation builds new states instead.
//! - [`GoalDescription`] - The sub-goals that must all hold for the puzzle to
//!   be solved. Shared by every evaluation of a level.
//!
//! [`parse_level`] reads all three from a hospital level file.

pub use self::{goal_description::*, level::*, parser::*, state::*};

mod goal_description;
mod level;
mod parser;
mod state;
