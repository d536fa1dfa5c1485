//! Arena entities
//!
//! Holes and moles refer to each other by id; the registries own them.

pub mod hole;
pub mod mole;

pub use hole::Hole;
pub use mole::Mole;
