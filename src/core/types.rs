//! Core type definitions used throughout the codebase

use std::fmt;

/// Identifier for holes, assigned sequentially from 1 by the hole factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoleId(pub u32);

impl fmt::Display for HoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for moles, numbered independently of holes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoleId(pub u32);

impl fmt::Display for MoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occupancy of a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoleState {
    #[default]
    Unoccupied,
    Occupied,
}

/// Life state of a mole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoleState {
    /// Underground, not in any hole
    #[default]
    Tunneling,
    /// In a hole, cannot be whacked
    Hiding,
    /// In a hole with its head out
    Exposed,
    /// Terminal
    Dead,
}

impl MoleState {
    /// The registry bucket a mole in this state belongs to
    pub fn bucket(self) -> MoleBucket {
        match self {
            MoleState::Tunneling => MoleBucket::Unhoused,
            MoleState::Hiding | MoleState::Exposed => MoleBucket::Housed,
            MoleState::Dead => MoleBucket::Dead,
        }
    }
}

/// Buckets of the hole registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleBucket {
    Available,
    Unavailable,
}

/// Buckets of the mole registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoleBucket {
    Unhoused,
    Housed,
    Dead,
}

/// Run state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Initializing,
    Playing,
    Ended,
}
