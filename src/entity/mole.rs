//! Moles: creatures that roam between holes

use crate::core::types::{HoleId, MoleBucket, MoleId, MoleState};

/// A mole and the hole it currently occupies, if any
///
/// A dead mole keeps the hole it died in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mole {
    id: MoleId,
    state: MoleState,
    hole: Option<HoleId>,
}

impl Mole {
    pub fn new(id: MoleId) -> Self {
        Self {
            id,
            state: MoleState::Tunneling,
            hole: None,
        }
    }

    pub fn id(&self) -> MoleId {
        self.id
    }

    pub fn state(&self) -> MoleState {
        self.state
    }

    pub fn hole(&self) -> Option<HoleId> {
        self.hole
    }

    pub fn is_alive(&self) -> bool {
        self.state != MoleState::Dead
    }

    pub fn bucket(&self) -> MoleBucket {
        self.state.bucket()
    }

    /// Flip between hiding and exposed
    ///
    /// Tunneling and dead moles are left alone. Returns whether the state
    /// changed.
    pub fn toggle_state(&mut self) -> bool {
        match self.state {
            MoleState::Hiding => {
                self.state = MoleState::Exposed;
                true
            }
            MoleState::Exposed => {
                self.state = MoleState::Hiding;
                true
            }
            MoleState::Tunneling | MoleState::Dead => false,
        }
    }

    pub(crate) fn settle_in(&mut self, hole: HoleId) {
        self.hole = Some(hole);
        self.state = MoleState::Hiding;
    }

    pub(crate) fn leave_hole(&mut self) {
        self.hole = None;
        self.state = MoleState::Tunneling;
    }

    pub(crate) fn die(&mut self) {
        self.state = MoleState::Dead;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mole_is_tunneling() {
        let mole = Mole::new(MoleId(1));
        assert_eq!(mole.state(), MoleState::Tunneling);
        assert_eq!(mole.hole(), None);
        assert_eq!(mole.bucket(), MoleBucket::Unhoused);
    }

    #[test]
    fn test_toggle_hiding_exposed() {
        let mut mole = Mole::new(MoleId(1));
        mole.settle_in(HoleId(1));

        assert!(mole.toggle_state());
        assert_eq!(mole.state(), MoleState::Exposed);
        assert!(mole.toggle_state());
        assert_eq!(mole.state(), MoleState::Hiding);
    }

    #[test]
    fn test_toggle_ignores_tunneling_and_dead() {
        let mut mole = Mole::new(MoleId(1));
        assert!(!mole.toggle_state());
        assert_eq!(mole.state(), MoleState::Tunneling);

        mole.settle_in(HoleId(1));
        mole.toggle_state();
        mole.die();
        assert!(!mole.toggle_state());
        assert_eq!(mole.state(), MoleState::Dead);
        assert_eq!(mole.hole(), Some(HoleId(1)));
    }
}
