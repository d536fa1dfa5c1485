//! Turn input lines into commands

use crate::core::types::HoleId;

/// What the player aimed a whack at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhackTarget {
    /// `whack` on its own
    Missing,
    /// Argument that is not a hole number
    Unparsable(String),
    Hole(HoleId),
}

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Whack(WhackTarget),
    Moles,
    Holes,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a whitespace-separated line
    ///
    /// Returns `None` for a blank line. Arguments past the ones a verb uses
    /// are ignored.
    pub fn parse(input: &str) -> Option<Command> {
        let mut parts = input.split_whitespace();
        let verb = parts.next()?;

        let command = match verb {
            "whack" => Command::Whack(match parts.next() {
                None => WhackTarget::Missing,
                Some(arg) => match arg.parse::<u32>() {
                    Ok(id) => WhackTarget::Hole(HoleId(id)),
                    Err(_) => WhackTarget::Unparsable(arg.to_string()),
                },
            }),
            "moles" => Command::Moles,
            "holes" => Command::Holes,
            "help" => Command::Help,
            "quit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}
