use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter of a box (`A`-`Z`).
///
/// Boxes and box goals of the same letter match each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxLetter(u8);

impl BoxLetter {
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Self(ch as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for BoxLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for BoxLetter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for BoxLetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ch = char::deserialize(deserializer)?;
        Self::from_char(ch)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid box letter: '{ch}'")))
    }
}

/// Identity of an agent (`0`-`9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentId(u8);

impl AgentId {
    pub const MAX_AGENTS: usize = 10;

    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::MAX_AGENTS {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_digit() {
            Some(Self(ch as u8 - b'0'))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for AgentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for AgentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ch = char::deserialize(deserializer)?;
        Self::from_char(ch)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid agent id: '{ch}'")))
    }
}

/// Color of an agent or a box.
///
/// An agent may only move boxes of its own color. Parsed case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("blue")]
    Blue,
    #[display("red")]
    Red,
    #[display("cyan")]
    Cyan,
    #[display("purple")]
    Purple,
    #[display("green")]
    Green,
    #[display("orange")]
    Orange,
    #[display("pink")]
    Pink,
    #[display("grey")]
    Grey,
    #[display("lightblue")]
    Lightblue,
    #[display("brown")]
    Brown,
}

/// What must occupy a goal cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GoalTarget {
    /// A box of this letter.
    Box(BoxLetter),
    /// This agent.
    Agent(AgentId),
}

impl GoalTarget {
    /// Interprets a goal grid character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if let Some(letter) = BoxLetter::from_char(ch) {
            return Some(Self::Box(letter));
        }
        if let Some(agent) = AgentId::from_char(ch) {
            return Some(Self::Agent(agent));
        }
        None
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Box(letter) => letter.as_char(),
            Self::Agent(agent) => agent.as_char(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_letter_char_conversion() {
        assert_eq!(BoxLetter::from_char('A').map(BoxLetter::as_char), Some('A'));
        assert_eq!(BoxLetter::from_char('Z').map(BoxLetter::as_char), Some('Z'));
        assert_eq!(BoxLetter::from_char('a'), None);
        assert_eq!(BoxLetter::from_char('0'), None);
        assert_eq!(BoxLetter::from_char('+'), None);
    }

    #[test]
    fn test_agent_id_char_conversion() {
        let agent = AgentId::from_char('7').unwrap();
        assert_eq!(agent.index(), 7);
        assert_eq!(agent.as_char(), '7');
        assert_eq!(AgentId::from_char('A'), None);
        assert_eq!(AgentId::new(9), AgentId::from_char('9'));
        assert_eq!(AgentId::new(10), None);
    }

    #[test]
    fn test_goal_target_from_char() {
        assert_eq!(
            GoalTarget::from_char('B'),
            Some(GoalTarget::Box(BoxLetter::from_char('B').unwrap()))
        );
        assert_eq!(
            GoalTarget::from_char('3'),
            Some(GoalTarget::Agent(AgentId::from_char('3').unwrap()))
        );
        assert_eq!(GoalTarget::from_char(' '), None);
        assert!(GoalTarget::from_char('C').unwrap().is_box());
    }

    #[test]
    fn test_color_parse_case_insensitive() {
        assert_eq!("blue".parse::<Color>().ok(), Some(Color::Blue));
        assert_eq!("LightBlue".parse::<Color>().ok(), Some(Color::Lightblue));
        assert_eq!("grey".parse::<Color>().ok(), Some(Color::Grey));
        assert!("magenta".parse::<Color>().is_err());
        assert_eq!(Color::Lightblue.to_string(), "lightblue");
    }

    #[test]
    fn test_serialization() {
        let target = GoalTarget::Box(BoxLetter::from_char('A').unwrap());
        let serialized = serde_json::to_string(&target).unwrap();
        assert_eq!(serialized, r#"{"box":"A"}"#);
        let deserialized: GoalTarget = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, target);

        assert!(serde_json::from_str::<BoxLetter>("\"a\"").is_err());
        assert!(serde_json::from_str::<AgentId>("\"x\"").is_err());
    }
}
