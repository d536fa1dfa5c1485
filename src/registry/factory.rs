//! Factories hand out sequential ids and register new entities

use crate::core::error::Result;
use crate::core::types::{HoleBucket, HoleId, MoleBucket, MoleId};
use crate::entity::{Hole, Mole};
use crate::registry::{HoleSet, MoleSet};

/// Creates holes and owns the hole registry
#[derive(Debug, Default)]
pub struct HoleFactory {
    last_id: u32,
    holes: HoleSet,
}

impl HoleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unoccupied hole in the available bucket
    pub fn new_hole(&mut self) -> Result<HoleId> {
        self.last_id += 1;
        let id = HoleId(self.last_id);
        self.holes.insert(HoleBucket::Available, Hole::new(id))?;
        Ok(id)
    }

    pub fn holes(&self) -> &HoleSet {
        &self.holes
    }

    pub fn holes_mut(&mut self) -> &mut HoleSet {
        &mut self.holes
    }
}

/// Creates moles and owns the mole registry
#[derive(Debug, Default)]
pub struct MoleFactory {
    last_id: u32,
    moles: MoleSet,
}

impl MoleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tunneling mole in the unhoused bucket
    pub fn new_mole(&mut self) -> Result<MoleId> {
        self.last_id += 1;
        let id = MoleId(self.last_id);
        self.moles.insert(MoleBucket::Unhoused, Mole::new(id))?;
        Ok(id)
    }

    pub fn moles(&self) -> &MoleSet {
        &self.moles
    }

    pub fn moles_mut(&mut self) -> &mut MoleSet {
        &mut self.moles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ArenaError;
    use crate::core::types::{HoleState, MoleState};

    #[test]
    fn test_hole_ids_start_at_one() {
        let mut factory = HoleFactory::new();
        let first = factory.new_hole().unwrap();
        let second = factory.new_hole().unwrap();

        assert_eq!(first, HoleId(1));
        assert_eq!(second, HoleId(2));

        let hole = factory.holes().get(first).unwrap();
        assert_eq!(hole.state(), HoleState::Unoccupied);
        assert_eq!(factory.holes().bucket_of(first), Some(HoleBucket::Available));
    }

    #[test]
    fn test_reinserting_factory_hole_fails() {
        let mut factory = HoleFactory::new();
        let id = factory.new_hole().unwrap();
        let copy = factory.holes().get(id).unwrap().clone();

        let result = factory.holes_mut().insert(HoleBucket::Available, copy);
        assert!(matches!(result, Err(ArenaError::DuplicateHole(_))));
    }

    #[test]
    fn test_mole_ids_independent_of_holes() {
        let mut holes = HoleFactory::new();
        let mut moles = MoleFactory::new();
        holes.new_hole().unwrap();
        holes.new_hole().unwrap();

        let mole = moles.new_mole().unwrap();
        assert_eq!(mole, MoleId(1));
        assert_eq!(moles.moles().get(mole).unwrap().state(), MoleState::Tunneling);
        assert_eq!(moles.moles().unhoused_count(), 1);
    }
}
