//! Whack-a-Mole - moles burrow, pop up and hide on a timer while the player
//! swings at holes from the command line

pub mod command;
pub mod core;
pub mod entity;
pub mod game;
pub mod registry;
pub mod simulation;
