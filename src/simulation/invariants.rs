//! Consistency checks between the hole and mole registries

use crate::core::error::{ArenaError, Result};
use crate::core::types::{HoleState, MoleState};
use crate::registry::{HoleSet, MoleSet};

/// Verify that buckets, states and back-references all agree
///
/// - a hole is occupied iff it has an occupant, and sits in the matching bucket
/// - a hole's occupant points back at that hole
/// - a mole sits in the bucket its state implies
/// - a tunneling mole has no hole; a housed or dead mole has one that points
///   back at it
pub fn check_invariants(holes: &HoleSet, moles: &MoleSet) -> Result<()> {
    for hole in holes.iter() {
        let id = hole.id();
        if holes.bucket_of(id) != Some(hole.bucket()) {
            return Err(violation(format!("hole {id} is in the wrong bucket")));
        }

        match (hole.state(), hole.occupant()) {
            (HoleState::Unoccupied, None) => {}
            (HoleState::Occupied, Some(mole_id)) => {
                let mole = moles
                    .get(mole_id)
                    .ok_or_else(|| violation(format!("hole {id} holds unknown mole {mole_id}")))?;
                if mole.hole() != Some(id) {
                    return Err(violation(format!(
                        "hole {id} holds mole {mole_id}, which points at {:?}",
                        mole.hole()
                    )));
                }
            }
            (state, occupant) => {
                return Err(violation(format!(
                    "hole {id} is {state:?} with occupant {occupant:?}"
                )));
            }
        }
    }

    for mole in moles.iter() {
        let id = mole.id();
        if moles.bucket_of(id) != Some(mole.bucket()) {
            return Err(violation(format!("mole {id} is in the wrong bucket")));
        }

        match (mole.state(), mole.hole()) {
            (MoleState::Tunneling, None) => {}
            (MoleState::Tunneling, Some(hole_id)) => {
                return Err(violation(format!("tunneling mole {id} still points at hole {hole_id}")));
            }
            (MoleState::Hiding | MoleState::Exposed | MoleState::Dead, Some(hole_id)) => {
                let hole = holes
                    .get(hole_id)
                    .ok_or_else(|| violation(format!("mole {id} points at unknown hole {hole_id}")))?;
                if hole.occupant() != Some(id) {
                    return Err(violation(format!(
                        "mole {id} points at hole {hole_id}, which holds {:?}",
                        hole.occupant()
                    )));
                }
            }
            (state, None) => {
                return Err(violation(format!("mole {id} is {state:?} without a hole")));
            }
        }
    }

    Ok(())
}

fn violation(message: String) -> ArenaError {
    ArenaError::InvariantViolation(message)
}
