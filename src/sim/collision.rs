//! Collision detection and effect resolution
//!
//! [`resolve`] is a pure function of the current state producing an
//! [`Effects`] record; [`apply`] commits it in one shot. Nothing is removed
//! mid-iteration, and removals are by entity id.

use glam::Vec2;

use super::state::{BossPayload, GameState};
use crate::consts::*;

/// Standard AABB overlap test
pub fn boxes_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Everything one resolution pass decided
#[derive(Debug, Default, Clone)]
pub struct Effects {
    pub resource_gain: f32,
    pub player_damage: f32,
    pub boss_damage: f32,
    /// Collectibles picked up by the player
    pub collected: Vec<u32>,
    /// Hostiles despawned by ramming the player
    pub rammed_hostiles: Vec<u32>,
    /// Bullet damage landed on hostiles, in resolution order
    pub hostile_hits: Vec<(u32, f32)>,
    pub spent_bullets: Vec<u32>,
    pub spent_hostile_shots: Vec<u32>,
    /// Boss pellets destroyed against the player
    pub spent_boss_shots: Vec<u32>,
    /// Falling bombs the player touched; they detonate in place
    pub detonated_bombs: Vec<u32>,
}

/// Resolve all pairwise collisions for the current tick
///
/// Resolution order matters for double-hit edge cases: pickups, then player
/// contact damage, then bullets (first overlapping hostile wins per bullet,
/// and a hostile killed earlier in the pass absorbs nothing further), then
/// the boss rules when a boss is live.
pub fn resolve(state: &GameState) -> Effects {
    let mut fx = Effects::default();
    let player = &state.player;

    for collectible in &state.collectibles {
        if boxes_overlap(player.pos, player.size, collectible.pos, collectible.size) {
            fx.resource_gain += RESOURCE_PER_COLLECTIBLE;
            fx.collected.push(collectible.id);
        }
    }

    for hostile in &state.hostiles {
        if boxes_overlap(player.pos, player.size, hostile.pos, hostile.size) {
            fx.player_damage += HOSTILE_CONTACT_DAMAGE;
            fx.rammed_hostiles.push(hostile.id);
        }
    }

    for shot in &state.hostile_shots {
        if boxes_overlap(player.pos, player.size, shot.pos, shot.size) {
            fx.player_damage += HOSTILE_SHOT_DAMAGE;
            fx.spent_hostile_shots.push(shot.id);
        }
    }

    // Bullets vs hostiles: track kills within the pass so a later bullet
    // cannot hit a hostile that is already dead this tick.
    let mut dead: Vec<u32> = fx.rammed_hostiles.clone();
    let mut remaining: Vec<(u32, f32)> = state
        .hostiles
        .iter()
        .map(|h| (h.id, h.health))
        .collect();
    for bullet in &state.bullets {
        let hit = state.hostiles.iter().find(|h| {
            !dead.contains(&h.id) && boxes_overlap(bullet.pos, bullet.size, h.pos, h.size)
        });
        if let Some(hostile) = hit {
            fx.spent_bullets.push(bullet.id);
            fx.hostile_hits.push((hostile.id, BULLET_DAMAGE));
            if let Some(entry) = remaining.iter_mut().find(|(id, _)| *id == hostile.id) {
                entry.1 -= BULLET_DAMAGE;
                if entry.1 <= 0.0 {
                    dead.push(hostile.id);
                }
            }
        }
    }

    if let Some(boss) = &state.boss {
        for bullet in &state.bullets {
            if fx.spent_bullets.contains(&bullet.id) {
                continue;
            }
            if boxes_overlap(bullet.pos, bullet.size, boss.pos, boss.size) {
                fx.spent_bullets.push(bullet.id);
                fx.boss_damage += BULLET_DAMAGE;
            }
        }

        if boxes_overlap(player.pos, player.size, boss.pos, boss.size) {
            fx.player_damage += BOSS_COLLISION_DAMAGE;
        }

        for shot in &state.boss_shots {
            if !boxes_overlap(player.pos, player.size, shot.pos, shot.size) {
                continue;
            }
            match shot.payload {
                BossPayload::Pellet => {
                    fx.player_damage += BOSS_SHOT_DAMAGE;
                    fx.spent_boss_shots.push(shot.id);
                }
                // A touched bomb hurts and goes off where it is; the
                // explosion pulse was already priced into the contact hit.
                BossPayload::Bomb => {
                    fx.player_damage += BOSS_SHOT_DAMAGE;
                    fx.detonated_bombs.push(shot.id);
                }
                // Explosions dealt their pulse at conversion
                BossPayload::Exploding { .. } => {}
            }
        }
    }

    fx
}

/// Commit a resolution pass atomically
pub fn apply(state: &mut GameState, fx: &Effects) {
    let now = state.time_ticks;

    state.player.resource =
        (state.player.resource + fx.resource_gain).clamp(0.0, BOSS_THRESHOLD);
    state.player.health =
        (state.player.health - fx.player_damage).clamp(0.0, PLAYER_MAX_HEALTH);

    if let Some(boss) = &mut state.boss {
        boss.health = (boss.health - fx.boss_damage).clamp(0.0, BOSS_MAX_HEALTH);
    }

    for &(id, damage) in &fx.hostile_hits {
        if let Some(hostile) = state.hostiles.iter_mut().find(|h| h.id == id) {
            hostile.health -= damage;
            hostile.last_hit_tick = Some(now);
        }
    }

    state.collectibles.retain(|c| !fx.collected.contains(&c.id));
    state
        .hostiles
        .retain(|h| h.health > 0.0 && !fx.rammed_hostiles.contains(&h.id));
    state.bullets.retain(|b| !fx.spent_bullets.contains(&b.id));
    state
        .hostile_shots
        .retain(|s| !fx.spent_hostile_shots.contains(&s.id));
    state
        .boss_shots
        .retain(|s| !fx.spent_boss_shots.contains(&s.id));

    for &id in &fx.detonated_bombs {
        if let Some(shot) = state.boss_shots.iter_mut().find(|s| s.id == id) {
            shot.payload = BossPayload::Exploding {
                ticks_left: BOMB_EXPLOSION_TICKS,
            };
            shot.vel = Vec2::ZERO;
        }
    }
}
