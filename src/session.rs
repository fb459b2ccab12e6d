//! Session control surface and clock/driver integration
//!
//! A [`Session`] owns one simulation and converts wall-clock time into
//! fixed ticks with an accumulator, capped so a long stall cannot spiral.
//! External collaborators feed it [`TickInput`] snapshots and read
//! [`RenderView`] snapshots; nothing else crosses the boundary.

use log::{info, warn};
use thiserror::Error;

use crate::consts::*;
use crate::sim::state::{Arena, GameState};
use crate::sim::tick::{TickInput, tick};
use crate::sim::view::{RenderView, render_view};
use crate::sim::{motion, spawn};

/// Fatal configuration errors, reported once at construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive and finite, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
}

/// Owns the simulation state for one play session
#[derive(Debug)]
pub struct Session {
    state: GameState,
    seed: u64,
    accumulator: f32,
    running: bool,
    paused: bool,
}

impl Session {
    /// Validate configuration and build an idle session; `start` begins play
    pub fn new(seed: u64, width: f32, height: f32) -> Result<Self, ConfigError> {
        let arena = Arena::new(width, height);
        if !arena.is_valid() {
            return Err(ConfigError::InvalidArena { width, height });
        }
        Ok(Self {
            state: GameState::new(seed, arena),
            seed,
            accumulator: 0.0,
            running: false,
            paused: false,
        })
    }

    /// Begin play, seeding the arena with the opening stockpile
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        info!("session started (seed {})", self.seed);
        spawn::stockpile(&mut self.state);
        self.running = true;
    }

    /// Throw the old state away and begin a fresh Normal-phase session
    ///
    /// Schedules are plain data inside the state, so nothing from the
    /// previous session can fire into the new one.
    pub fn restart(&mut self) {
        info!("session restarted");
        self.state = GameState::new(self.seed, self.state.arena);
        self.accumulator = 0.0;
        self.paused = false;
        self.running = true;
        spawn::stockpile(&mut self.state);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume play; wall time accumulated while paused is dropped
    pub fn resume(&mut self) {
        self.paused = false;
        self.accumulator = 0.0;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance by elapsed wall-clock seconds, running whole fixed steps
    pub fn advance(&mut self, elapsed: f32, input: &TickInput) {
        if !self.running || self.paused {
            return;
        }
        self.accumulator += elapsed.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, input);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Step exactly `n` fixed ticks; for tests and headless drivers
    pub fn step_ticks(&mut self, n: u32, input: &TickInput) {
        if !self.running || self.paused {
            return;
        }
        for _ in 0..n {
            tick(&mut self.state, input);
        }
    }

    /// Adopt new viewport bounds, pulling live entities back inside
    pub fn resize(&mut self, width: f32, height: f32) {
        let arena = Arena::new(width, height);
        if !arena.is_valid() {
            warn!("ignoring resize to invalid bounds {width}x{height}");
            return;
        }
        self.state.arena = arena;
        motion::clamp_to_arena(&mut self.state);
    }

    /// Published read-only snapshot for rendering and UI
    pub fn view(&self) -> RenderView {
        render_view(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Phase;

    #[test]
    fn non_positive_arena_is_a_config_error() {
        let err = Session::new(1, 0.0, 600.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidArena {
                width: 0.0,
                height: 600.0
            }
        );
        assert!(Session::new(1, 800.0, -5.0).is_err());
        assert!(Session::new(1, 800.0, 600.0).is_ok());
    }

    #[test]
    fn advance_is_inert_until_start() {
        let mut session = Session::new(2, 800.0, 600.0).unwrap();
        session.advance(1.0, &TickInput::default());
        assert_eq!(session.state().time_ticks, 0);

        session.start();
        assert!(!session.state().collectibles.is_empty());
    }

    #[test]
    fn advance_converts_wall_time_to_whole_ticks() {
        let mut session = Session::new(2, 800.0, 600.0).unwrap();
        session.start();

        session.advance(SIM_DT * 3.0, &TickInput::default());
        assert_eq!(session.state().time_ticks, 3);

        // Leftover fraction carries into the next call
        session.advance(SIM_DT * 0.5, &TickInput::default());
        assert_eq!(session.state().time_ticks, 3);
        session.advance(SIM_DT * 0.5, &TickInput::default());
        assert_eq!(session.state().time_ticks, 4);
    }

    #[test]
    fn a_long_stall_cannot_spiral() {
        let mut session = Session::new(2, 800.0, 600.0).unwrap();
        session.start();
        session.advance(10.0, &TickInput::default());
        assert!(session.state().time_ticks <= MAX_SUBSTEPS as u64);
    }

    #[test]
    fn pause_gates_the_clock_and_resume_drops_backlog() {
        let mut session = Session::new(2, 800.0, 600.0).unwrap();
        session.start();
        session.pause();
        assert!(session.is_paused());

        session.advance(1.0, &TickInput::default());
        assert_eq!(session.state().time_ticks, 0);

        session.resume();
        session.advance(SIM_DT * 0.9, &TickInput::default());
        assert_eq!(session.state().time_ticks, 0);
        session.advance(SIM_DT, &TickInput::default());
        assert!(session.state().time_ticks >= 1);
    }

    #[test]
    fn restart_rebuilds_a_fresh_normal_session() {
        let mut session = Session::new(2, 800.0, 600.0).unwrap();
        session.start();
        session.step_ticks(100, &TickInput::new(0.3, 0.0, true));

        session.restart();
        let state = session.state();
        assert_eq!(state.phase, Phase::Normal);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH);
        assert_eq!(state.collectibles.len(), START_COLLECTIBLES);
        assert!(state.boss.is_none());
    }

    #[test]
    fn resize_reclamps_and_rejects_invalid_bounds() {
        let mut session = Session::new(2, 800.0, 600.0).unwrap();
        session.start();

        session.resize(300.0, 200.0);
        let state = session.state();
        assert_eq!(state.arena.width, 300.0);
        for c in &state.collectibles {
            assert!(c.pos.x + c.size.x <= 300.0);
            assert!(c.pos.y + c.size.y <= 200.0);
        }

        session.resize(0.0, 0.0);
        assert_eq!(session.state().arena.width, 300.0);
    }
}
