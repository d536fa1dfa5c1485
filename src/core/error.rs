use thiserror::Error;

use crate::core::types::{HoleBucket, HoleId, MoleBucket, MoleId};

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Hole {0} already exists")]
    DuplicateHole(HoleId),

    #[error("Mole {0} already exists")]
    DuplicateMole(MoleId),

    #[error("Hole not found: {0}")]
    HoleNotFound(HoleId),

    #[error("Mole not found: {0}")]
    MoleNotFound(MoleId),

    #[error("Hole {hole} is not in the {bucket:?} bucket")]
    HoleNotInBucket { hole: HoleId, bucket: HoleBucket },

    #[error("Mole {mole} is not in the {bucket:?} bucket")]
    MoleNotInBucket { mole: MoleId, bucket: MoleBucket },

    #[error("Hole {0} is not occupied")]
    HoleNotOccupied(HoleId),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
