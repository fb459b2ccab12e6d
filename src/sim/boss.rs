//! Boss controller: patrol, attack scheduling, and projectile lifecycle
//!
//! The attack schedule is plain data (`next_attack_tick` on the boss)
//! compared against the tick counter, so clearing the boss on Victory or
//! Defeat removes the schedule with it; there is no timer that could fire
//! into a cleared or restarted session.

use glam::Vec2;
use log::debug;
use rand::Rng;

use super::state::{BossPayload, BossShot, GameState};
use crate::consts::*;

/// Advance the boss by one tick: reflective patrol plus any due attack
pub fn step(state: &mut GameState) {
    let arena = state.arena;
    if let Some(boss) = &mut state.boss {
        boss.pos.x += BOSS_SPEED * boss.dir;
        if boss.pos.x <= 0.0 || boss.pos.x + boss.size.x >= arena.width {
            boss.dir = -boss.dir;
            boss.pos.x = boss.pos.x.clamp(0.0, (arena.width - boss.size.x).max(0.0));
        }
    }

    let due = state
        .boss
        .as_ref()
        .is_some_and(|b| state.time_ticks >= b.next_attack_tick);
    if due {
        fire_attack(state);
        if let Some(boss) = &mut state.boss {
            boss.next_attack_tick = state.time_ticks + BOSS_ATTACK_INTERVAL_TICKS;
        }
    }
}

/// Launch one attack from the boss's mouth: a bomb on a fixed-probability
/// roll, otherwise a five-pellet fan with linearly varying horizontal speed
fn fire_attack(state: &mut GameState) {
    let Some(boss) = state.boss.clone() else {
        return;
    };
    let center_x = boss.pos.x + boss.size.x / 2.0;
    let mouth_y = boss.pos.y + boss.size.y;

    if state.rng.random_bool(BOMB_CHANCE) {
        let drift: f32 = state.rng.random_range(-BOMB_DRIFT_MAX..BOMB_DRIFT_MAX);
        let id = state.next_entity_id();
        debug!("boss drops bomb {id}");
        state.boss_shots.push(BossShot {
            id,
            pos: Vec2::new(center_x - BOMB_SIZE / 2.0, mouth_y),
            size: Vec2::splat(BOMB_SIZE),
            vel: Vec2::new(drift, BOMB_FALL_SPEED),
            payload: BossPayload::Bomb,
        });
    } else {
        debug!("boss fires spread");
        for lane in -2i32..=2 {
            let lane = lane as f32;
            let id = state.next_entity_id();
            state.boss_shots.push(BossShot {
                id,
                pos: Vec2::new(
                    center_x - BOSS_SHOT_SIZE / 2.0 + lane * BOSS_SPREAD_LANE_OFFSET,
                    mouth_y,
                ),
                size: Vec2::splat(BOSS_SHOT_SIZE),
                vel: Vec2::new(lane * BOSS_SPREAD_LANE_VEL, BOSS_SHOT_SPEED),
                payload: BossPayload::Pellet,
            });
        }
    }
}

/// Advance boss projectiles: movement, the bomb ground-threshold conversion
/// with its one-shot damage pulse, explosion countdown, off-arena cleanup
pub fn advance_shots(state: &mut GameState) {
    let arena = state.arena;
    let player_center = state.player.pos + state.player.size / 2.0;
    let mut pulse_damage = 0.0_f32;

    let mut shots = std::mem::take(&mut state.boss_shots);
    shots.retain_mut(|shot| match &mut shot.payload {
        BossPayload::Exploding { ticks_left } => {
            *ticks_left = ticks_left.saturating_sub(1);
            *ticks_left > 0
        }
        BossPayload::Bomb => {
            shot.pos += shot.vel;
            if shot.pos.y > arena.height - shot.size.y * 2.0 {
                let bomb_center = shot.pos + shot.size / 2.0;
                let distance = bomb_center.distance(player_center);
                if distance < BOMB_EXPLOSION_RADIUS {
                    // One pulse, priced here; the explosion that lingers
                    // afterwards is visual only
                    let falloff = 1.0 - distance / BOMB_EXPLOSION_RADIUS;
                    pulse_damage += (BOMB_DAMAGE * falloff).round();
                }
                shot.payload = BossPayload::Exploding {
                    ticks_left: BOMB_EXPLOSION_TICKS,
                };
                shot.vel = Vec2::ZERO;
            }
            true
        }
        BossPayload::Pellet => {
            shot.pos += shot.vel;
            shot.pos.y < arena.height
                && shot.pos.x + shot.size.x > 0.0
                && shot.pos.x < arena.width
        }
    });
    state.boss_shots = shots;

    if pulse_damage > 0.0 {
        debug!("bomb pulse hits player for {pulse_damage}");
        state.player.health =
            (state.player.health - pulse_damage).clamp(0.0, PLAYER_MAX_HEALTH);
    }
}
