//! Occupancy protocol between holes and moles
//!
//! Each operation validates everything it needs before touching either
//! registry, then moves the hole and the mole between buckets as a pair.
//! A failed call leaves both registries unchanged.

use rand::Rng;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{HoleBucket, HoleId, MoleBucket, MoleId, MoleState};
use crate::registry::{HoleSet, MoleSet};

/// Result of swinging at a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhackOutcome {
    /// Nothing in the hole
    Whiff,
    /// A mole was there but hiding
    Laughed(MoleId),
    /// An exposed mole was killed
    Bonked(MoleId),
}

/// Seat an unhoused mole in a hole
///
/// Returns `Ok(false)` without changing anything if the hole is already
/// occupied.
pub fn try_occupy(
    holes: &mut HoleSet,
    moles: &mut MoleSet,
    hole_id: HoleId,
    mole_id: MoleId,
) -> Result<bool> {
    let hole = holes.get(hole_id).ok_or(ArenaError::HoleNotFound(hole_id))?;
    if hole.is_occupied() {
        return Ok(false);
    }

    match moles.bucket_of(mole_id) {
        Some(MoleBucket::Unhoused) => {}
        Some(_) => {
            return Err(ArenaError::MoleNotInBucket {
                mole: mole_id,
                bucket: MoleBucket::Unhoused,
            })
        }
        None => return Err(ArenaError::MoleNotFound(mole_id)),
    }

    holes
        .transfer(hole_id, HoleBucket::Available, HoleBucket::Unavailable)?
        .seat(mole_id);
    moles
        .transfer(mole_id, MoleBucket::Unhoused, MoleBucket::Housed)?
        .settle_in(hole_id);
    Ok(true)
}

/// Empty an occupied hole, sending its mole back underground
///
/// Freeing an unoccupied hole is an error rather than a silent no-op, and so
/// is freeing a hole whose occupant is dead.
pub fn free(holes: &mut HoleSet, moles: &mut MoleSet, hole_id: HoleId) -> Result<MoleId> {
    let hole = holes.get(hole_id).ok_or(ArenaError::HoleNotFound(hole_id))?;
    let mole_id = hole
        .occupant()
        .ok_or(ArenaError::HoleNotOccupied(hole_id))?;

    if moles.bucket_of(mole_id) != Some(MoleBucket::Housed) {
        return Err(ArenaError::MoleNotInBucket {
            mole: mole_id,
            bucket: MoleBucket::Housed,
        });
    }

    holes
        .transfer(hole_id, HoleBucket::Unavailable, HoleBucket::Available)?
        .vacate();
    moles
        .transfer(mole_id, MoleBucket::Housed, MoleBucket::Unhoused)?
        .leave_hole();
    Ok(mole_id)
}

/// Leave the current hole (if any) and claim an available one picked with `rng`
///
/// The hole just left is back in the pool, so the mole may land in it again.
/// Returns the hole claimed. The mole stays tunneling when no hole is free.
/// Dead moles do not move.
pub fn tunnel<R: Rng>(
    holes: &mut HoleSet,
    moles: &mut MoleSet,
    mole_id: MoleId,
    rng: &mut R,
) -> Result<Option<HoleId>> {
    let mole = moles.get(mole_id).ok_or(ArenaError::MoleNotFound(mole_id))?;
    if !mole.is_alive() {
        return Ok(None);
    }

    if let Some(current) = mole.hole() {
        free(holes, moles, current)?;
    }

    match holes.random_available(rng) {
        Some(hole_id) => {
            let claimed = try_occupy(holes, moles, hole_id, mole_id)?;
            Ok(claimed.then_some(hole_id))
        }
        None => Ok(None),
    }
}

/// Kill a mole if it is exposed
///
/// The mole keeps its hole reference; see [`try_whack`].
pub fn whack_mole(moles: &mut MoleSet, mole_id: MoleId) -> Result<bool> {
    let mole = moles.get(mole_id).ok_or(ArenaError::MoleNotFound(mole_id))?;
    if mole.state() != MoleState::Exposed {
        return Ok(false);
    }

    moles
        .transfer(mole_id, MoleBucket::Housed, MoleBucket::Dead)?
        .die();
    Ok(true)
}

/// Swing at a hole
///
/// A kill does not free the hole: it stays occupied by the dead mole for the
/// rest of the run and is never offered to tunneling moles again.
pub fn try_whack(holes: &HoleSet, moles: &mut MoleSet, hole_id: HoleId) -> Result<WhackOutcome> {
    let hole = holes.get(hole_id).ok_or(ArenaError::HoleNotFound(hole_id))?;
    let Some(mole_id) = hole.occupant() else {
        return Ok(WhackOutcome::Whiff);
    };

    if whack_mole(moles, mole_id)? {
        Ok(WhackOutcome::Bonked(mole_id))
    } else {
        Ok(WhackOutcome::Laughed(mole_id))
    }
}
