//! Spawning policy for collectibles and hostiles
//!
//! Per-tick spawn chance scales with how far each population sits below its
//! soft target, so thinned-out arenas refill quickly without a hard cap. A
//! starvation failsafe forces a batch if a population stays at zero for a
//! sustained stretch. Everything here is suppressed while the boss is live
//! or while the embedder has not yet reported valid arena bounds.

use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use super::state::{Collectible, GameState, Hostile};
use crate::consts::*;

/// Advance the spawner by one tick
pub fn step(state: &mut GameState) {
    if !state.arena.is_valid() {
        // No viewport yet; spawning would produce garbage positions
        return;
    }
    if state.phase.boss_active() {
        return;
    }

    // Starvation failsafe runs first so a drought ends even on a tick
    // where the probabilistic rolls all miss.
    if state.collectibles.is_empty() {
        state.collectible_drought_ticks += 1;
        if state.collectible_drought_ticks >= COLLECTIBLE_STARVATION_TICKS {
            info!("collectible population starved, forcing a batch");
            for _ in 0..COLLECTIBLE_FAILSAFE_BATCH {
                spawn_collectible(state);
            }
            state.collectible_drought_ticks = 0;
        }
    } else {
        state.collectible_drought_ticks = 0;
    }

    if state.hostiles.is_empty() {
        state.hostile_drought_ticks += 1;
        if state.hostile_drought_ticks >= HOSTILE_STARVATION_TICKS {
            info!("hostile population starved, forcing a batch");
            for _ in 0..HOSTILE_FAILSAFE_BATCH {
                spawn_hostile(state);
            }
            state.hostile_drought_ticks = 0;
        }
    } else {
        state.hostile_drought_ticks = 0;
    }

    let collectibles = state.collectibles.len();
    if collectibles < COLLECTIBLE_TARGET_POPULATION {
        let missing = (COLLECTIBLE_TARGET_POPULATION - collectibles) as f64;
        let chance =
            COLLECTIBLE_SPAWN_BASE_CHANCE + COLLECTIBLE_SPAWN_CHANCE_PER_MISSING * missing;
        if state.rng.random_bool(chance) {
            spawn_collectible(state);
        }
    }

    let hostiles = state.hostiles.len();
    if hostiles < HOSTILE_TARGET_POPULATION {
        let missing = (HOSTILE_TARGET_POPULATION - hostiles) as f64;
        let chance = HOSTILE_SPAWN_BASE_CHANCE + HOSTILE_SPAWN_CHANCE_PER_MISSING * missing;
        if state.rng.random_bool(chance) {
            spawn_hostile(state);
        }
    }
}

/// One-time batch for a fresh session so play never opens on an empty arena
pub fn stockpile(state: &mut GameState) {
    if !state.arena.is_valid() {
        return;
    }
    for _ in 0..START_COLLECTIBLES {
        spawn_collectible(state);
    }
    for _ in 0..START_HOSTILES {
        spawn_hostile(state);
    }
}

/// Random spawn position in the upper half of the arena, fully inside bounds
fn top_half_position(state: &mut GameState, size: Vec2) -> Vec2 {
    let max_x = (state.arena.width - size.x).max(0.0);
    let max_y = (state.arena.height / 2.0 - size.y).max(0.0);
    Vec2::new(
        state.rng.random_range(0.0..=max_x),
        state.rng.random_range(0.0..=max_y),
    )
}

/// Uniform drift in [-1, 1], nudged off exact zero so nothing sits still
fn drift(state: &mut GameState) -> f32 {
    let v: f32 = state.rng.random_range(-1.0..=1.0);
    if v == 0.0 { 0.5 } else { v }
}

fn spawn_collectible(state: &mut GameState) {
    let size = Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT);
    let pos = top_half_position(state, size);
    let vel = Vec2::new(drift(state), drift(state));
    let id = state.next_entity_id();
    debug!("spawning collectible {id} at ({:.0}, {:.0})", pos.x, pos.y);
    state.collectibles.push(Collectible { id, pos, size, vel });
}

fn spawn_hostile(state: &mut GameState) {
    let size = Vec2::splat(HOSTILE_SIZE);
    let pos = top_half_position(state, size);
    let vel = Vec2::new(
        if state.rng.random_bool(0.5) { HOSTILE_SPEED } else { -HOSTILE_SPEED },
        if state.rng.random_bool(0.5) { HOSTILE_SPEED } else { -HOSTILE_SPEED },
    );
    let is_tough = state.rng.random_bool(HOSTILE_TOUGH_CHANCE);
    let health = if is_tough { HOSTILE_TOUGH_HEALTH } else { HOSTILE_BASE_HEALTH };
    let jitter: f64 = state.rng.random_range(0.8..1.2);
    let next_shot_tick =
        state.time_ticks + (HOSTILE_ATTACK_INTERVAL_TICKS as f64 * jitter) as u64;
    let id = state.next_entity_id();
    debug!("spawning {} hostile {id}", if is_tough { "tough" } else { "basic" });
    state.hostiles.push(Hostile {
        id,
        pos,
        size,
        vel,
        health,
        is_tough,
        next_shot_tick,
        last_hit_tick: None,
    });
}
