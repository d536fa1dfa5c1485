//! Running a game: the single owner of the arena and the loop that drives it

pub mod play_loop;
pub mod session;

pub use play_loop::{spawn_command_reader, spawn_console_reader};
pub use session::Game;
