use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    cell::SeaState,
    common::{SeaError, Signal},
    config::FieldConfig,
    grid::SeaGrid,
    player::Player,
    shot::ShotAnswer,
};

/// Current status of a game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One side of a game: its fleet grid and what it knows of the outcome.
pub struct GameEngine {
    fleet: SeaGrid,
    shots_fired: usize,
    opponent_defeated: bool,
}

impl GameEngine {
    pub fn new(fleet: SeaGrid) -> Self {
        Self {
            fleet,
            shots_fired: 0,
            opponent_defeated: false,
        }
    }

    /// Engine with an empty fleet grid sized from `config`.
    pub fn from_config(config: &FieldConfig) -> Result<Self, SeaError> {
        config.validate()?;
        Ok(Self::new(config.empty_grid()?))
    }

    pub fn fleet(&self) -> &SeaGrid {
        &self.fleet
    }

    /// Mutable fleet grid for ship placement.
    pub fn fleet_mut(&mut self) -> &mut SeaGrid {
        &mut self.fleet
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Answer an opponent shot on our fleet.
    pub fn opponent_shot(&mut self, x: usize, y: usize) -> Result<ShotAnswer, SeaError> {
        self.fleet.answer_shot(x, y)
    }

    /// Record the signal our own shot received.
    pub fn record_signal(&mut self, signal: Signal) {
        self.shots_fired += 1;
        if signal == Signal::Win {
            self.opponent_defeated = true;
        }
    }

    /// A side with no ships placed yet is still in progress.
    pub fn status(&self) -> GameStatus {
        let has_fleet = self.fleet.count_where(SeaState::is_part_of_ship) > 0;
        if has_fleet && !self.fleet.has_surviving_ship() {
            GameStatus::Lost
        } else if self.opponent_defeated {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Outcome of a finished match.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    /// 1 or 2.
    pub winner: usize,
    /// Shots fired by each side.
    pub shots: [usize; 2],
    /// Final fleet grids of both sides.
    #[cfg_attr(feature = "std", serde(skip))]
    pub fleets: [SeaGrid; 2],
}

/// Play two players against each other on grids built from `config`.
///
/// Each player places its fleet, then the sides alternate one shot each,
/// first player first, until one receives `Win`.
pub fn play_match<A: Player, B: Player>(
    config: &FieldConfig,
    first: &mut A,
    second: &mut B,
    rng: &mut SmallRng,
) -> Result<MatchSummary, SeaError> {
    let mut engines = [
        GameEngine::from_config(config)?,
        GameEngine::from_config(config)?,
    ];
    first.place_fleet(rng, engines[0].fleet_mut(), &config.fleet)?;
    second.place_fleet(rng, engines[1].fleet_mut(), &config.fleet)?;

    let mut turn = 0usize;
    let winner = loop {
        let side = turn % 2;
        let [a, b] = &mut engines;
        let (shooter, defender) = if side == 0 { (a, b) } else { (b, a) };
        let player: &mut dyn Player = if side == 0 { &mut *first } else { &mut *second };

        let target = player.select_target(rng)?;
        let answer = defender.opponent_shot(target.x, target.y)?;
        player.handle_shot_result(&answer.coords, answer.signal)?;
        shooter.record_signal(answer.signal);
        debug!("player {} fired at {}: {:?}", side + 1, target, answer.signal);

        if shooter.status() == GameStatus::Won {
            break side + 1;
        }
        turn += 1;
    };

    let shots = [engines[0].shots_fired(), engines[1].shots_fired()];
    info!(
        "player {} won after {} shots ({} by the loser)",
        winner,
        shots[winner - 1],
        shots[2 - winner]
    );
    let [f1, f2] = engines;
    Ok(MatchSummary {
        winner,
        shots,
        fleets: [f1.fleet, f2.fleet],
    })
}
