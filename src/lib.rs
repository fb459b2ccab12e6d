//! Snack Storm - an arcade dodge-collect-shoot simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collisions, phases)
//! - `session`: Clock/driver integration and the session control surface
//!
//! Rendering, input devices, and UI live outside this crate; they talk to
//! the simulation only through [`sim::TickInput`] and [`sim::RenderView`].

pub mod session;
pub mod sim;

pub use session::{ConfigError, Session};

/// Game tuning constants
///
/// Velocities are px per tick and intervals are ticks; the simulation runs
/// at a fixed step and the session driver owns real-time conversion.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_DAMAGE: f32 = 10.0;
    pub const BULLET_COOLDOWN_TICKS: u64 = 15;

    /// Collectible defaults
    pub const COLLECTIBLE_WIDTH: f32 = 72.0;
    pub const COLLECTIBLE_HEIGHT: f32 = 77.0;
    pub const RESOURCE_PER_COLLECTIBLE: f32 = 10.0;
    /// Soft population target; spawn chance scales with the shortfall
    pub const COLLECTIBLE_TARGET_POPULATION: usize = 8;

    /// Hostile defaults
    pub const HOSTILE_SIZE: f32 = 48.0;
    pub const HOSTILE_SPEED: f32 = 2.0;
    pub const HOSTILE_CONTACT_DAMAGE: f32 = 15.0;
    pub const HOSTILE_BASE_HEALTH: f32 = 30.0;
    /// Tough tier starts with double health; tier is fixed at spawn
    pub const HOSTILE_TOUGH_HEALTH: f32 = 60.0;
    pub const HOSTILE_TOUGH_CHANCE: f64 = 0.35;
    pub const HOSTILE_TARGET_POPULATION: usize = 5;
    /// Per-axis chance per tick of a spontaneous direction flip
    pub const HOSTILE_TURN_CHANCE: f64 = 0.01;

    /// Hostile projectile defaults
    pub const HOSTILE_SHOT_SIZE: f32 = 20.0;
    pub const HOSTILE_SHOT_SPEED: f32 = 6.0;
    pub const HOSTILE_SHOT_DAMAGE: f32 = 15.0;
    /// Base firing period; each reschedule jitters by 0.8..1.2
    pub const HOSTILE_ATTACK_INTERVAL_TICKS: u64 = 120;

    /// Boss defaults
    pub const BOSS_WIDTH: f32 = 120.0;
    pub const BOSS_HEIGHT: f32 = 80.0;
    pub const BOSS_SPAWN_Y: f32 = 50.0;
    pub const BOSS_MAX_HEALTH: f32 = 200.0;
    pub const BOSS_SPEED: f32 = 3.0;
    pub const BOSS_COLLISION_DAMAGE: f32 = 20.0;
    pub const BOSS_ATTACK_INTERVAL_TICKS: u64 = 60;
    /// Resource needed to trigger the boss encounter
    pub const BOSS_THRESHOLD: f32 = 100.0;
    /// Announcement window; simulation runs normally underneath it
    pub const BOSS_INTRO_TICKS: u32 = 180;

    /// Boss spread attack: pellets at lane offsets -2..=2
    pub const BOSS_SHOT_SIZE: f32 = 16.0;
    pub const BOSS_SHOT_SPEED: f32 = 5.0;
    pub const BOSS_SHOT_DAMAGE: f32 = 15.0;
    pub const BOSS_SPREAD_LANE_OFFSET: f32 = 15.0;
    pub const BOSS_SPREAD_LANE_VEL: f32 = 1.5;

    /// Boss bomb attack
    pub const BOMB_CHANCE: f64 = 0.2;
    pub const BOMB_SIZE: f32 = 24.0;
    pub const BOMB_FALL_SPEED: f32 = 4.0;
    pub const BOMB_DRIFT_MAX: f32 = 1.5;
    pub const BOMB_DAMAGE: f32 = 25.0;
    pub const BOMB_EXPLOSION_RADIUS: f32 = 100.0;
    /// Explosion visual lifetime before the projectile is removed
    pub const BOMB_EXPLOSION_TICKS: u32 = 30;

    /// Spawn policy
    pub const COLLECTIBLE_SPAWN_BASE_CHANCE: f64 = 0.01;
    pub const COLLECTIBLE_SPAWN_CHANCE_PER_MISSING: f64 = 0.03;
    pub const HOSTILE_SPAWN_BASE_CHANCE: f64 = 0.005;
    pub const HOSTILE_SPAWN_CHANCE_PER_MISSING: f64 = 0.02;
    /// Ticks at zero population before the failsafe forces a batch
    pub const COLLECTIBLE_STARVATION_TICKS: u32 = 180;
    pub const HOSTILE_STARVATION_TICKS: u32 = 240;
    pub const COLLECTIBLE_FAILSAFE_BATCH: usize = 3;
    pub const HOSTILE_FAILSAFE_BATCH: usize = 2;
    /// Stockpile spawned once at session start
    pub const START_COLLECTIBLES: usize = 5;
    pub const START_HOSTILES: usize = 3;

    /// Render-only blink window after a hostile takes a bullet
    pub const HIT_BLINK_TICKS: u64 = 18;

    /// Score bonus awarded on boss defeat
    pub const VICTORY_BONUS: u64 = 1000;
}
