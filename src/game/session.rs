//! The game: owns both registries and applies commands and ticks to them

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::command::{Command, Report, WhackReport, WhackTarget};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{HoleId, MoleBucket, MoleId, RunState};
use crate::registry::{HoleFactory, HoleSet, MoleFactory, MoleSet};
use crate::simulation::{self, TickEvent, WhackOutcome};

/// A single game
///
/// Everything here is mutated from one place only: whoever drives the play
/// loop. Input readers never see the game.
#[derive(Debug)]
pub struct Game {
    hole_factory: HoleFactory,
    mole_factory: MoleFactory,
    state: RunState,
    win_threshold: usize,
    rng: ChaCha8Rng,
}

impl Game {
    /// A game with a randomly seeded tick RNG
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// A game whose ticks replay the same way for the same commands
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            hole_factory: HoleFactory::new(),
            mole_factory: MoleFactory::new(),
            state: RunState::Initializing,
            win_threshold: 0,
            rng,
        }
    }

    /// Build a fresh arena and seat as many moles as there are holes
    ///
    /// Moles beyond the hole count stay tunneling. Which mole lands in which
    /// hole is not part of the contract.
    pub fn init(&mut self, holes: usize, moles: usize) -> Result<()> {
        self.win_threshold = moles;

        self.hole_factory = HoleFactory::new();
        for _ in 0..holes {
            self.hole_factory.new_hole()?;
        }

        self.mole_factory = MoleFactory::new();
        for _ in 0..moles {
            self.mole_factory.new_mole()?;
        }

        let seated = self.house_moles()?;
        tracing::info!(holes, moles, seated, "Arena initialized");
        Ok(())
    }

    /// Greedily seat unhoused moles in available holes
    pub fn house_moles(&mut self) -> Result<usize> {
        let mut seated = 0;
        for mole_id in self.mole_factory.moles().ids_in(MoleBucket::Unhoused) {
            let Some(hole_id) = self.hole_factory.holes().first_available() else {
                break;
            };
            if simulation::try_occupy(
                self.hole_factory.holes_mut(),
                self.mole_factory.moles_mut(),
                hole_id,
                mole_id,
            )? {
                seated += 1;
            }
        }
        Ok(seated)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    pub fn holes(&self) -> &HoleSet {
        self.hole_factory.holes()
    }

    pub fn moles(&self) -> &MoleSet {
        self.mole_factory.moles()
    }

    /// Direct access for driving the occupancy protocol by hand
    pub fn registries_mut(&mut self) -> (&mut HoleSet, &mut MoleSet) {
        (self.hole_factory.holes_mut(), self.mole_factory.moles_mut())
    }

    /// Flip a mole between hiding and exposed; see [`crate::entity::Mole::toggle_state`]
    pub fn toggle_mole(&mut self, id: MoleId) -> bool {
        self.mole_factory
            .moles_mut()
            .get_mut(id)
            .is_some_and(|mole| mole.toggle_state())
    }

    /// Swing at a hole; the hole must exist
    pub fn whack(&mut self, hole: HoleId) -> Result<WhackOutcome> {
        simulation::try_whack(self.hole_factory.holes(), self.mole_factory.moles_mut(), hole)
    }

    /// True iff exactly `moles` moles are dead
    pub fn check_win(&self, moles: usize) -> bool {
        self.moles().dead_count() == moles
    }

    pub fn check_invariants(&self) -> Result<()> {
        simulation::check_invariants(self.holes(), self.moles())
    }

    /// Mark the player as present and start playing
    pub fn attach_player(&mut self) -> Report {
        self.state = RunState::Playing;
        tracing::info!("Player attached, game is on");
        Report::Welcome
    }

    pub fn end(&mut self) {
        if self.state != RunState::Ended {
            tracing::info!(dead = self.moles().dead_count(), "Game ended");
        }
        self.state = RunState::Ended;
    }

    /// Handle one input line
    ///
    /// Blank lines produce no reports. Nothing is processed once the game
    /// has ended.
    pub fn process_player_input(&mut self, input: &str) -> Result<Vec<Report>> {
        if self.state == RunState::Ended {
            return Ok(Vec::new());
        }
        let Some(command) = Command::parse(input) else {
            return Ok(Vec::new());
        };
        tracing::debug!(?command, "Processing command");

        let reports = match command {
            Command::Whack(target) => self.handle_whack(target)?,
            Command::Moles => vec![Report::MoleStats {
                alive: self.moles().alive_count(),
                dead: self.moles().dead_count(),
            }],
            Command::Holes => vec![Report::HoleList(self.holes().ids())],
            Command::Help => vec![Report::Help],
            Command::Quit => {
                self.end();
                vec![Report::Goodbye]
            }
            Command::Unknown(verb) => vec![Report::UnknownCommand(verb)],
        };
        Ok(reports)
    }

    fn handle_whack(&mut self, target: WhackTarget) -> Result<Vec<Report>> {
        let hole = match target {
            WhackTarget::Missing => return Ok(vec![Report::HoleNotSpecified]),
            WhackTarget::Unparsable(arg) => {
                return Ok(vec![Report::Whack(WhackReport::Unrecognized(arg))]);
            }
            WhackTarget::Hole(hole) if !self.holes().contains(hole) => {
                return Ok(vec![Report::Whack(WhackReport::Unrecognized(hole.to_string()))]);
            }
            WhackTarget::Hole(hole) => hole,
        };

        let outcome = self.whack(hole)?;
        let mut reports = Vec::with_capacity(2);

        // The win notice comes before the swing that earned it
        if let WhackOutcome::Bonked(mole) = outcome {
            tracing::debug!(%mole, %hole, "Mole whacked");
            if self.check_win(self.win_threshold) {
                self.end();
                reports.push(Report::Victory);
            }
        }
        reports.push(Report::Whack(WhackReport::Struck(outcome)));
        Ok(reports)
    }

    /// Run one simulation tick with the given entropy percentage
    pub fn process_mole_moves(&mut self, entropy: u8) -> Result<Vec<TickEvent>> {
        let events = simulation::run_mole_tick(
            self.hole_factory.holes_mut(),
            self.mole_factory.moles_mut(),
            entropy,
            &mut self.rng,
        )?;
        for event in &events {
            tracing::debug!(?event, "Tick event");
        }
        Ok(events)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
