//! Player commands and the reports they produce
//!
//! Input line -> Command::parse -> Game::process_player_input -> Vec<Report>

pub mod parser;
pub mod report;

pub use parser::{Command, WhackTarget};
pub use report::{Report, WhackReport, HELP_TEXT, PROMPT, WELCOME_BANNER};
