//! Tick system - moves moles around between player commands
//!
//! One tick:
//! 1. every unhoused mole tunnels toward a free hole
//! 2. every housed mole (snapshot taken after step 1) rolls twice against
//!    `entropy`: once to tunnel away, once to toggle hiding/exposed
//!
//! Both rolls are always drawn, so a seeded RNG consumes the same number of
//! values per housed mole whatever the outcome. The toggle roll applies to the
//! mole's state after the move roll; a mole left tunneling ignores it.

use rand::Rng;

use crate::core::config::MAX_ENTROPY;
use crate::core::error::{ArenaError, Result};
use crate::core::types::{HoleId, MoleBucket, MoleId, MoleState};
use crate::entity::Mole;
use crate::registry::{HoleSet, MoleSet};
use crate::simulation::occupancy::tunnel;

/// Events generated during a mole tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// An unhoused mole found a free hole
    Burrowed { mole: MoleId, hole: HoleId },
    /// A housed mole left its hole, possibly landing in another one
    Tunneled {
        mole: MoleId,
        from: HoleId,
        to: Option<HoleId>,
    },
    /// A hiding mole popped its head out
    Exposed { mole: MoleId, hole: HoleId },
    /// An exposed mole ducked back down
    Hid { mole: MoleId, hole: HoleId },
}

impl TickEvent {
    pub fn mole(&self) -> MoleId {
        match *self {
            TickEvent::Burrowed { mole, .. }
            | TickEvent::Tunneled { mole, .. }
            | TickEvent::Exposed { mole, .. }
            | TickEvent::Hid { mole, .. } => mole,
        }
    }

    /// Whether the player gets to see this event
    ///
    /// Burrowing is silent; finding freshly seated moles is the game.
    pub fn is_visible(&self) -> bool {
        !matches!(self, TickEvent::Burrowed { .. })
    }
}

/// Run one simulation tick over both registries
pub fn run_mole_tick<R: Rng>(
    holes: &mut HoleSet,
    moles: &mut MoleSet,
    entropy: u8,
    rng: &mut R,
) -> Result<Vec<TickEvent>> {
    let entropy = u32::from(entropy.min(MAX_ENTROPY));
    let mut events = Vec::new();

    for mole_id in moles.ids_in(MoleBucket::Unhoused) {
        if let Some(hole) = tunnel(holes, moles, mole_id, &mut *rng)? {
            events.push(TickEvent::Burrowed { mole: mole_id, hole });
        }
    }

    for mole_id in moles.ids_in(MoleBucket::Housed) {
        let roll_move = rng.gen_range(0..100u32) < entropy;
        let roll_toggle = rng.gen_range(0..100u32) < entropy;

        if roll_move {
            let from = moles
                .get(mole_id)
                .and_then(Mole::hole)
                .ok_or(ArenaError::MoleNotInBucket {
                    mole: mole_id,
                    bucket: MoleBucket::Housed,
                })?;
            let to = tunnel(holes, moles, mole_id, &mut *rng)?;
            events.push(TickEvent::Tunneled { mole: mole_id, from, to });
        }

        if roll_toggle {
            let mole = moles
                .get_mut(mole_id)
                .ok_or(ArenaError::MoleNotFound(mole_id))?;
            if let (true, Some(hole)) = (mole.toggle_state(), mole.hole()) {
                let event = match mole.state() {
                    MoleState::Exposed => TickEvent::Exposed { mole: mole_id, hole },
                    _ => TickEvent::Hid { mole: mole_id, hole },
                };
                events.push(event);
            }
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{HoleFactory, MoleFactory};
    use crate::simulation::invariants::check_invariants;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn arena(holes: usize, moles: usize) -> (HoleFactory, MoleFactory) {
        let mut hole_factory = HoleFactory::new();
        let mut mole_factory = MoleFactory::new();
        for _ in 0..holes {
            hole_factory.new_hole().unwrap();
        }
        for _ in 0..moles {
            mole_factory.new_mole().unwrap();
        }
        (hole_factory, mole_factory)
    }

    #[test]
    fn test_unhoused_moles_always_burrow() {
        let (mut hf, mut mf) = arena(2, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let events = run_mole_tick(hf.holes_mut(), mf.moles_mut(), 0, &mut rng).unwrap();

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| !e.is_visible()));
        assert_eq!(mf.moles().housed_count(), 2);
        assert_eq!(mf.moles().unhoused_count(), 1);
        assert_eq!(hf.holes().available_count(), 0);
        check_invariants(hf.holes(), mf.moles()).unwrap();
    }

    #[test]
    fn test_zero_entropy_leaves_housed_moles_alone() {
        let (mut hf, mut mf) = arena(3, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        run_mole_tick(hf.holes_mut(), mf.moles_mut(), 0, &mut rng).unwrap();

        for _ in 0..20 {
            let events = run_mole_tick(hf.holes_mut(), mf.moles_mut(), 0, &mut rng).unwrap();
            assert!(events.is_empty());
        }
        assert!(mf.moles().housed().all(|m| m.state() == MoleState::Hiding));
    }

    #[test]
    fn test_full_entropy_moves_and_toggles_every_housed_mole() {
        let (mut hf, mut mf) = arena(3, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        run_mole_tick(hf.holes_mut(), mf.moles_mut(), 0, &mut rng).unwrap();

        let events = run_mole_tick(hf.holes_mut(), mf.moles_mut(), 100, &mut rng).unwrap();

        let tunneled = events
            .iter()
            .filter(|e| matches!(e, TickEvent::Tunneled { to: Some(_), .. }))
            .count();
        let exposed = events
            .iter()
            .filter(|e| matches!(e, TickEvent::Exposed { .. }))
            .count();
        assert_eq!(tunneled, 2);
        assert_eq!(exposed, 2);
        assert!(mf.moles().housed().all(|m| m.state() == MoleState::Exposed));
        check_invariants(hf.holes(), mf.moles()).unwrap();
    }

    #[test]
    fn test_entropy_above_range_is_clamped() {
        let (mut hf, mut mf) = arena(1, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        run_mole_tick(hf.holes_mut(), mf.moles_mut(), 0, &mut rng).unwrap();

        let events = run_mole_tick(hf.holes_mut(), mf.moles_mut(), 250, &mut rng).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_dead_moles_are_not_ticked() {
        let (mut hf, mut mf) = arena(2, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        run_mole_tick(hf.holes_mut(), mf.moles_mut(), 0, &mut rng).unwrap();
        mf.moles_mut().get_mut(MoleId(1)).unwrap().toggle_state();
        crate::simulation::occupancy::whack_mole(mf.moles_mut(), MoleId(1)).unwrap();

        for _ in 0..10 {
            let events = run_mole_tick(hf.holes_mut(), mf.moles_mut(), 100, &mut rng).unwrap();
            assert!(events.is_empty());
        }
        assert_eq!(mf.moles().get(MoleId(1)).unwrap().state(), MoleState::Dead);
        check_invariants(hf.holes(), mf.moles()).unwrap();
    }
}
