//! Data contracts of the hospital domain.
//!
//! - [`core`] - Grid primitives: [`Position`], [`BoxLetter`], [`AgentId`], [`Color`]
//! - [`domain`] - The per-level [`Level`], the per-node [`State`] and the
//!   [`GoalDescription`], plus [`parse_level`] for the hospital level format
//!
//! # Example
//!
//! ```
//! use hospital_engine::{BoxLetter, Position};
//!
//! let level_text = "\
//! #domain
//! hospital
//! #levelname
//! tiny
//! #colors
//! blue: 0, A
//! #initial
//! +++++
//! +0A +
//! +++++
//! #goal
//! +++++
//! +  A+
//! +++++
//! #end
//! ";
//!
//! let parsed = hospital_engine::parse_level(level_text)?;
//! assert_eq!(parsed.level.name(), "tiny");
//! assert_eq!(parsed.goal_description.num_sub_goals(), 1);
//! assert_eq!(
//!     parsed.initial_state.box_at(Position::new(1, 2)),
//!     BoxLetter::from_char('A')
//! );
//! # Ok::<(), hospital_engine::LevelParseError>(())
//! ```

pub use self::{core::*, domain::*};

pub mod core;
pub mod domain;

/// Syntax error in a hospital level file.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelParseError {
    #[display("unexpected end of file, expected '{expected}'")]
    UnexpectedEof { expected: &'static str },
    #[display("line {line}: expected '{expected}', got '{found}'")]
    MissingHeader {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[display("line {line}: unsupported domain '{domain}'")]
    UnsupportedDomain { line: usize, domain: String },
    #[display("line {line}: malformed color line '{text}'")]
    MalformedColorLine { line: usize, text: String },
    #[display("line {line}: unknown color '{color}'")]
    UnknownColor { line: usize, color: String },
    #[display("line {line}: unknown entity '{entity}' in color line")]
    UnknownEntity { line: usize, entity: String },
    #[display("line {line}: unexpected character '{ch}' in {section} grid")]
    UnexpectedCharacter {
        line: usize,
        ch: char,
        section: &'static str,
    },
    #[display("{section} grid is empty")]
    EmptyGrid { section: &'static str },
}
