//! Structured results of commands and ticks, and how they read to a player

use std::fmt;

use crate::core::types::HoleId;
use crate::simulation::{TickEvent, WhackOutcome};

/// Written after every processed command
pub const PROMPT: &str = "> ";

pub const WELCOME_BANNER: &str = "\
|||======= MOLES MOLES MOLES MOLES =======|||
Welcome to the arena. Holes can be whacked, and moles need whacking!
Whack every mole to win. Type `help` to see what you can do.";

pub const HELP_TEXT: &str = "\
|||======= HELP HELP HELP HELP HELP =======|||
Whack every mole to win.

Commands:
  whack <#>   Swing at hole #. An exposed mole there is knocked out of the game.
  moles       Count the moles still running around and the ones already whacked.
  holes       List every hole you can swing at.
  help        Show this text again.
  quit        Leave the game.";

/// What a whack command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhackReport {
    /// The target was not a known hole
    Unrecognized(String),
    Struck(WhackOutcome),
}

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Welcome,
    Help,
    HoleNotSpecified,
    Whack(WhackReport),
    Victory,
    MoleStats { alive: usize, dead: usize },
    HoleList(Vec<HoleId>),
    Goodbye,
    UnknownCommand(String),
}

impl fmt::Display for WhackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SHLONK!")?;
        match self {
            WhackReport::Unrecognized(_) => {
                write!(f, "Hole ID not recognized, where are you aiming?!")
            }
            WhackReport::Struck(WhackOutcome::Whiff) => write!(f, "whiff, no moles here!"),
            WhackReport::Struck(WhackOutcome::Laughed(_)) => {
                write!(f, "missed, and now it's laughing at you!")
            }
            WhackReport::Struck(WhackOutcome::Bonked(_)) => write!(f, "bonked out of existence!"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Welcome => write!(f, "{WELCOME_BANNER}"),
            Report::Help => write!(f, "{HELP_TEXT}"),
            Report::HoleNotSpecified => write!(f, "Hole ID not specified"),
            Report::Whack(whack) => write!(f, "{whack}"),
            Report::Victory => write!(f, "Moles eliminated, YOU WIN!!!!"),
            Report::MoleStats { alive, dead } => write!(f, "Alive: {alive}\nDead: {dead}"),
            Report::HoleList(ids) if ids.is_empty() => write!(f, "no holes to whack"),
            Report::HoleList(ids) => {
                let lines: Vec<String> = ids.iter().map(|id| format!("hole: {id}")).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Report::Goodbye => write!(f, "GOODBYE QUITTER!"),
            Report::UnknownCommand(verb) => write!(f, "unknown command: {verb}"),
        }
    }
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickEvent::Burrowed { mole, hole } => write!(f, "mole {mole} dug into hole {hole}"),
            TickEvent::Tunneled { mole, .. } => write!(f, "mole {mole} vanished!"),
            TickEvent::Exposed { mole, hole } => write!(f, "mole {mole} appeared in hole {hole}!"),
            TickEvent::Hid { mole, .. } => write!(f, "mole {mole} ducked out of sight!"),
        }
    }
}
