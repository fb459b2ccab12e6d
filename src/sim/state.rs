//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, owned by a single
//! [`GameState`]. No module-level state; a session reset is a fresh value.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Regular play: collectibles and hostiles spawn and roam
    Normal,
    /// Boss is live; an announcement window for the render layer
    BossIntro,
    /// Boss is live and the announcement has elapsed
    BossFight,
    /// Boss defeated; the session is over
    Victory,
    /// Player died; the session is over
    Defeat,
}

impl Phase {
    /// Boss entity exists and boss collision rules apply
    pub fn boss_active(self) -> bool {
        matches!(self, Phase::BossIntro | Phase::BossFight)
    }

    /// Terminal phases ignore further ticks until a restart
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Victory | Phase::Defeat)
    }
}

/// Playfield bounds, supplied by the embedder and resizable between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the embedder has reported a real viewport
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// The controllable actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: f32,
    /// Accumulated resource gating the boss encounter, clamped to the threshold
    pub resource: f32,
    /// Unit vector of the last nonzero movement
    pub facing: Vec2,
    /// Tick of the last fired bullet; `None` until the first shot
    pub last_shot_tick: Option<u64>,
}

impl Player {
    pub fn new(arena: Arena) -> Self {
        Self {
            pos: Vec2::new(
                arena.width / 2.0 - PLAYER_SIZE / 2.0,
                arena.height * 0.75 - PLAYER_SIZE,
            ),
            size: Vec2::splat(PLAYER_SIZE),
            health: PLAYER_MAX_HEALTH,
            resource: 0.0,
            facing: Vec2::NEG_Y,
            last_shot_tick: None,
        }
    }
}

/// Resource pickup; bounces around the arena until collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

/// Roaming enemy; bounces, wanders, and fires downward shots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub health: f32,
    /// Tier fixed at spawn; tough hostiles start with double health
    pub is_tough: bool,
    /// Explicit schedule; compared against `GameState::time_ticks`
    pub next_shot_tick: u64,
    /// Tick of the last bullet hit, for the render-only blink window
    pub last_hit_tick: Option<u64>,
}

/// Player projectile; travels straight up, removed off-arena or on hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

/// Hostile projectile; travels straight down, removed off-arena or on hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileShot {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

/// What a boss projectile is carrying
///
/// A bomb transitions `Bomb -> Exploding -> removed` and never goes back;
/// pellets never transition at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BossPayload {
    /// Spread-attack pellet, a simple mover
    Pellet,
    /// Falling bomb; converts to `Exploding` at the ground threshold
    Bomb,
    /// Explosion visual; the damage pulse was applied at conversion
    Exploding { ticks_left: u32 },
}

/// Boss projectile, pellet or bomb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossShot {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub payload: BossPayload,
}

/// The boss; exists only while the phase is boss-active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: f32,
    /// Horizontal patrol direction, +1 or -1
    pub dir: f32,
    /// Explicit attack schedule; compared against `GameState::time_ticks`
    pub next_attack_tick: u64,
}

impl Boss {
    pub fn new(arena: Arena, now: u64) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0 - BOSS_WIDTH / 2.0, BOSS_SPAWN_Y),
            size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            health: BOSS_MAX_HEALTH,
            dir: 1.0,
            next_attack_tick: now + BOSS_ATTACK_INTERVAL_TICKS,
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source in the simulation
    pub rng: Pcg32,
    pub arena: Arena,
    pub phase: Phase,
    /// Simulation tick counter; all schedules compare against this
    pub time_ticks: u64,
    pub score: u64,
    /// Remaining announcement ticks while the phase is `BossIntro`
    pub intro_ticks_left: u32,
    pub player: Player,
    pub collectibles: Vec<Collectible>,
    pub hostiles: Vec<Hostile>,
    pub bullets: Vec<Bullet>,
    pub hostile_shots: Vec<HostileShot>,
    pub boss_shots: Vec<BossShot>,
    pub boss: Option<Boss>,
    /// Consecutive ticks with zero collectibles, for the starvation failsafe
    pub collectible_drought_ticks: u32,
    /// Consecutive ticks with zero hostiles, for the starvation failsafe
    pub hostile_drought_ticks: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session state; the stockpile spawn happens on start
    pub fn new(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            phase: Phase::Normal,
            time_ticks: 0,
            score: 0,
            intro_ticks_left: 0,
            player: Player::new(arena),
            collectibles: Vec::new(),
            hostiles: Vec::new(),
            bullets: Vec::new(),
            hostile_shots: Vec::new(),
            boss_shots: Vec::new(),
            boss: None,
            collectible_drought_ticks: 0,
            hostile_drought_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
