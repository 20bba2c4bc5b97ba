use std::{
    iter::{Enumerate, Peekable},
    str::Lines,
};

use crate::{
    LevelParseError,
    core::{Color, GoalTarget, Position},
};

use super::{goal_description::GoalDescription, level::Level, state::State};

const DOMAIN: &str = "hospital";

/// Everything a hospital level file describes.
#[derive(Debug, Clone)]
pub struct ParsedLevel {
    pub level: Level,
    pub initial_state: State,
    pub goal_description: GoalDescription,
}

/// Parses a level in the hospital level format.
///
/// ```text
/// #domain
/// hospital
/// #levelname
/// <name>
/// #colors
/// <color>: <entity>, <entity>, ...
/// #initial
/// <grid>
/// #goal
/// <grid>
/// #end
/// ```
///
/// Grid cells are `+` (wall), space (free), `0`-`9` (agent) and `A`-`Z`
/// (box). Walls are read from the initial grid; the goal grid only
/// contributes goal cells.
///
/// Only the syntax is checked. A level whose goals are unreachable, or whose
/// boxes have no agent of matching color, is accepted as is.
pub fn parse_level(text: &str) -> Result<ParsedLevel, LevelParseError> {
    let mut reader = SectionReader::new(text);

    reader.expect_header("#domain")?;
    let (line, domain) = reader.expect_line("domain name")?;
    if domain.trim() != DOMAIN {
        return Err(LevelParseError::UnsupportedDomain {
            line,
            domain: domain.trim().to_owned(),
        });
    }

    reader.expect_header("#levelname")?;
    let (_, name) = reader.expect_line("level name")?;

    reader.expect_header("#colors")?;
    let mut colors = vec![];
    for (line, text) in reader.section_body() {
        parse_color_line(line, text, &mut colors)?;
    }

    reader.expect_header("#initial")?;
    let initial_rows = reader.section_body();
    if initial_rows.is_empty() {
        return Err(LevelParseError::EmptyGrid { section: "initial" });
    }

    reader.expect_header("#goal")?;
    let goal_rows = reader.section_body();
    if goal_rows.is_empty() {
        return Err(LevelParseError::EmptyGrid { section: "goal" });
    }

    reader.expect_header("#end")?;

    let width = initial_rows
        .iter()
        .chain(&goal_rows)
        .map(|(_, row)| row.chars().count())
        .max()
        .unwrap_or(0);
    let height = initial_rows.len().max(goal_rows.len());

    let mut level = Level::new(name.trim(), width, height);
    for (entity, color) in colors {
        level = match entity {
            GoalTarget::Agent(agent) => level.with_agent_color(agent, color),
            GoalTarget::Box(letter) => level.with_box_color(letter, color),
        };
    }

    let mut agents = vec![];
    let mut boxes = vec![];
    for (row, (line, text)) in initial_rows.iter().enumerate() {
        for (col, ch) in text.chars().enumerate() {
            let position = Position::from_grid(row, col);
            match ch {
                '+' => level = level.with_wall(position),
                ' ' => {}
                _ => match GoalTarget::from_char(ch) {
                    Some(GoalTarget::Agent(agent)) => agents.push((agent, position)),
                    Some(GoalTarget::Box(letter)) => boxes.push((position, letter)),
                    None => {
                        return Err(LevelParseError::UnexpectedCharacter {
                            line: *line,
                            ch,
                            section: "initial",
                        });
                    }
                },
            }
        }
    }

    for (row, (line, text)) in goal_rows.iter().enumerate() {
        for (col, ch) in text.chars().enumerate() {
            if matches!(ch, '+' | ' ') {
                continue;
            }
            let target = GoalTarget::from_char(ch).ok_or(LevelParseError::UnexpectedCharacter {
                line: *line,
                ch,
                section: "goal",
            })?;
            level = level.with_goal(Position::from_grid(row, col), target);
        }
    }

    let goal_description = GoalDescription::from_level(&level);
    Ok(ParsedLevel {
        level,
        initial_state: State::new(agents, boxes),
        goal_description,
    })
}

/// Parses `<color>: <entity>, ...`, where an entity is an agent digit or a
/// box letter.
fn parse_color_line(
    line: usize,
    text: &str,
    colors: &mut Vec<(GoalTarget, Color)>,
) -> Result<(), LevelParseError> {
    let (color, entities) =
        text.split_once(':')
            .ok_or_else(|| LevelParseError::MalformedColorLine {
                line,
                text: text.to_owned(),
            })?;
    let color = color
        .trim()
        .parse::<Color>()
        .map_err(|_| LevelParseError::UnknownColor {
            line,
            color: color.trim().to_owned(),
        })?;

    for entity in entities.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut chars = entity.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(ch), None) => GoalTarget::from_char(ch),
            _ => None,
        };
        let parsed = parsed.ok_or_else(|| LevelParseError::UnknownEntity {
            line,
            entity: entity.to_owned(),
        })?;
        colors.push((parsed, color));
    }
    Ok(())
}

/// Line reader over the `#section` structure of a level file.
///
/// Line numbers are 1-based. [`str::lines`] already drops the `\r` of CRLF
/// files.
struct SectionReader<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> SectionReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
        }
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), LevelParseError> {
        self.lines
            .next()
            .map(|(index, text)| (index + 1, text))
            .ok_or(LevelParseError::UnexpectedEof { expected })
    }

    fn expect_header(&mut self, header: &'static str) -> Result<(), LevelParseError> {
        let (line, text) = self.expect_line(header)?;
        if text.trim_end() != header {
            return Err(LevelParseError::MissingHeader {
                line,
                expected: header,
                found: text.to_owned(),
            });
        }
        Ok(())
    }

    /// Takes every line up to the next `#` header.
    fn section_body(&mut self) -> Vec<(usize, &'a str)> {
        let mut body = vec![];
        while let Some((index, text)) = self.lines.next_if(|(_, text)| !text.starts_with('#')) {
            body.push((index + 1, text));
        }
        body
    }
}
