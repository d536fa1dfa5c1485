//! Holes: static slots a mole can occupy

use crate::core::types::{HoleBucket, HoleId, HoleState, MoleId};

/// An addressable slot holding at most one mole
///
/// The occupant is a key into the mole registry, not an owning reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    id: HoleId,
    state: HoleState,
    occupant: Option<MoleId>,
}

impl Hole {
    pub fn new(id: HoleId) -> Self {
        Self {
            id,
            state: HoleState::Unoccupied,
            occupant: None,
        }
    }

    pub fn id(&self) -> HoleId {
        self.id
    }

    pub fn state(&self) -> HoleState {
        self.state
    }

    pub fn occupant(&self) -> Option<MoleId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.state == HoleState::Occupied
    }

    /// The registry bucket this hole belongs to given its state
    pub fn bucket(&self) -> HoleBucket {
        match self.state {
            HoleState::Unoccupied => HoleBucket::Available,
            HoleState::Occupied => HoleBucket::Unavailable,
        }
    }

    pub(crate) fn seat(&mut self, mole: MoleId) {
        self.occupant = Some(mole);
        self.state = HoleState::Occupied;
    }

    pub(crate) fn vacate(&mut self) -> Option<MoleId> {
        self.state = HoleState::Unoccupied;
        self.occupant.take()
    }
}
