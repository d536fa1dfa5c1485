//! Mole simulation: the occupancy protocol, the per-tick mole moves and the
//! checks that keep both registries consistent

pub mod invariants;
pub mod occupancy;
pub mod tick;

pub use invariants::check_invariants;
pub use occupancy::{free, try_occupy, try_whack, tunnel, whack_mole, WhackOutcome};
pub use tick::{run_mole_tick, TickEvent};
