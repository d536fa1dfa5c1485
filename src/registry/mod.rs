//! Entity registries and the factories that fill them

pub mod factory;
pub mod hole_set;
pub mod mole_set;

pub use factory::{HoleFactory, MoleFactory};
pub use hole_set::HoleSet;
pub use mole_set::MoleSet;
