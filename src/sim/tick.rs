//! Fixed timestep simulation tick
//!
//! One `tick()` call is one simulation step. Pass order: player input,
//! fire intent, spawner, motion, hostile attack schedules, boss controller,
//! collision resolution, phase evaluation. Terminal phases make the whole
//! call a no-op until the session restarts.

use glam::Vec2;
use log::info;
use rand::Rng;

use super::state::{Boss, Bullet, GameState, HostileShot, Phase};
use super::{boss, collision, motion, spawn};
use crate::consts::*;

/// Input commands for a single tick
///
/// Movement is the summed contribution of all active input sources
/// (keyboard and virtual stick both count), each axis clamped to [-1, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_x: f32,
    pub move_y: f32,
    pub fire: bool,
}

impl TickInput {
    pub fn new(move_x: f32, move_y: f32, fire: bool) -> Self {
        Self {
            move_x: move_x.clamp(-1.0, 1.0),
            move_y: move_y.clamp(-1.0, 1.0),
            fire,
        }
    }
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_terminal() {
        return;
    }
    state.time_ticks += 1;

    motion::move_player(state, input);
    if input.fire {
        fire_bullet(state);
    }
    spawn::step(state);
    motion::step(state);
    advance_hostile_attacks(state);
    if state.phase.boss_active() {
        boss::step(state);
        boss::advance_shots(state);
    }

    let fx = collision::resolve(state);
    collision::apply(state, &fx);

    evaluate_phase(state);
}

/// Fire a bullet from the player's top center, subject to the cooldown
fn fire_bullet(state: &mut GameState) {
    let now = state.time_ticks;
    if let Some(last) = state.player.last_shot_tick {
        if now - last < BULLET_COOLDOWN_TICKS {
            return;
        }
    }
    let pos = Vec2::new(
        state.player.pos.x + state.player.size.x / 2.0 - BULLET_SIZE / 2.0,
        state.player.pos.y,
    );
    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos,
        size: Vec2::splat(BULLET_SIZE),
        vel: Vec2::new(0.0, -BULLET_SPEED),
    });
    state.player.last_shot_tick = Some(now);
}

/// Fire a downward shot from every hostile whose schedule came due
///
/// Due positions are collected first and flushed after the scan, so the
/// hostile list is never grown or shrunk mid-iteration.
fn advance_hostile_attacks(state: &mut GameState) {
    let now = state.time_ticks;
    let mut due: Vec<Vec2> = Vec::new();

    let rng = &mut state.rng;
    for hostile in &mut state.hostiles {
        if now >= hostile.next_shot_tick {
            due.push(Vec2::new(
                hostile.pos.x + hostile.size.x / 2.0 - HOSTILE_SHOT_SIZE / 2.0,
                hostile.pos.y + hostile.size.y,
            ));
            let jitter: f64 = rng.random_range(0.8..1.2);
            hostile.next_shot_tick =
                now + (HOSTILE_ATTACK_INTERVAL_TICKS as f64 * jitter) as u64;
        }
    }

    for pos in due {
        let id = state.next_entity_id();
        state.hostile_shots.push(HostileShot {
            id,
            pos,
            size: Vec2::splat(HOSTILE_SHOT_SIZE),
            vel: Vec2::new(0.0, HOSTILE_SHOT_SPEED),
        });
    }
}

/// Evaluate phase transitions once the tick's effects are committed
fn evaluate_phase(state: &mut GameState) {
    if state.player.health <= 0.0 {
        info!("player down at tick {}, session lost", state.time_ticks);
        // The boss and its schedule leave with the phase; nothing may fire
        // into the defeat screen
        state.boss = None;
        state.boss_shots.clear();
        state.phase = Phase::Defeat;
        return;
    }

    if state.phase.boss_active() {
        if state.boss.as_ref().is_some_and(|b| b.health <= 0.0) {
            info!("boss defeated at tick {}", state.time_ticks);
            state.boss = None;
            state.boss_shots.clear();
            state.score += VICTORY_BONUS;
            state.phase = Phase::Victory;
            return;
        }
        if state.phase == Phase::BossIntro {
            state.intro_ticks_left = state.intro_ticks_left.saturating_sub(1);
            if state.intro_ticks_left == 0 {
                state.phase = Phase::BossFight;
            }
        }
        return;
    }

    if state.phase == Phase::Normal && state.player.resource >= BOSS_THRESHOLD {
        enter_boss_phase(state);
    }
}

/// Clear the field and bring in the boss with its attack schedule armed
fn enter_boss_phase(state: &mut GameState) {
    info!(
        "resource threshold reached at tick {}, boss incoming",
        state.time_ticks
    );
    state.collectibles.clear();
    state.hostiles.clear();
    state.hostile_shots.clear();
    state.boss = Some(Boss::new(state.arena, state.time_ticks));
    state.intro_ticks_left = BOSS_INTRO_TICKS;
    state.phase = Phase::BossIntro;
}
