//! Motion integration and boundary rules
//!
//! Velocities are px per tick (frame-locked, see the session driver for
//! real-time conversion). Collectibles and hostiles bounce off arena edges;
//! projectiles fly straight and are removed once they leave the arena.

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, GameState};
use super::tick::TickInput;
use crate::consts::*;

/// Apply the tick's input vector to the player
///
/// Input sources are summed upstream; the combined step is capped so
/// diagonal or multi-source movement is never faster than single-axis.
pub fn move_player(state: &mut GameState, input: &TickInput) {
    let mut step = Vec2::new(input.move_x, input.move_y) * PLAYER_SPEED;
    if step.length() > PLAYER_SPEED {
        step = step.normalize() * PLAYER_SPEED;
    }
    if step != Vec2::ZERO {
        state.player.pos += step;
        state.player.facing = step.normalize();
    }
    clamp_box(&mut state.player.pos, state.player.size, state.arena);
}

fn clamp_box(pos: &mut Vec2, size: Vec2, arena: Arena) {
    pos.x = pos.x.clamp(0.0, (arena.width - size.x).max(0.0));
    pos.y = pos.y.clamp(0.0, (arena.height - size.y).max(0.0));
}

/// Advance a bouncing entity: integrate, invert the crossed component,
/// clamp back inside so nothing drifts through a boundary
fn integrate_bouncing(pos: &mut Vec2, vel: &mut Vec2, size: Vec2, arena: Arena) {
    *pos += *vel;
    if pos.x <= 0.0 || pos.x + size.x >= arena.width {
        vel.x = -vel.x;
    }
    if pos.y <= 0.0 || pos.y + size.y >= arena.height {
        vel.y = -vel.y;
    }
    clamp_box(pos, size, arena);
}

/// Advance collectibles, hostiles, bullets, and hostile shots by one tick
///
/// Boss projectiles are advanced by the boss controller, which owns the
/// bomb lifecycle.
pub fn step(state: &mut GameState) {
    let arena = state.arena;

    for collectible in &mut state.collectibles {
        integrate_bouncing(&mut collectible.pos, &mut collectible.vel, collectible.size, arena);
    }

    let rng = &mut state.rng;
    for hostile in &mut state.hostiles {
        integrate_bouncing(&mut hostile.pos, &mut hostile.vel, hostile.size, arena);
        // Spontaneous per-axis flips make the wander non-periodic
        if rng.random_bool(HOSTILE_TURN_CHANCE) {
            hostile.vel.x = -hostile.vel.x;
        }
        if rng.random_bool(HOSTILE_TURN_CHANCE) {
            hostile.vel.y = -hostile.vel.y;
        }
    }

    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
    }
    state.bullets.retain(|b| b.pos.y + b.size.y > 0.0);

    for shot in &mut state.hostile_shots {
        shot.pos += shot.vel;
    }
    state.hostile_shots.retain(|s| s.pos.y < arena.height);
}

/// Pull every bounce-type entity (and the boss) back inside the arena
///
/// Used when the embedder resizes the viewport between ticks. Projectiles
/// are destroy-on-exit and clean themselves up on their next step.
pub fn clamp_to_arena(state: &mut GameState) {
    let arena = state.arena;
    clamp_box(&mut state.player.pos, state.player.size, arena);
    for collectible in &mut state.collectibles {
        clamp_box(&mut collectible.pos, collectible.size, arena);
    }
    for hostile in &mut state.hostiles {
        clamp_box(&mut hostile.pos, hostile.size, arena);
    }
    if let Some(boss) = &mut state.boss {
        clamp_box(&mut boss.pos, boss.size, arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, Hostile};

    fn test_state() -> GameState {
        GameState::new(11, Arena::new(800.0, 600.0))
    }

    fn push_collectible(state: &mut GameState, pos: Vec2, vel: Vec2) {
        let id = state.next_entity_id();
        state.collectibles.push(Collectible {
            id,
            pos,
            size: Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT),
            vel,
        });
    }

    #[test]
    fn bouncing_inverts_velocity_and_stays_inside() {
        let mut state = test_state();
        push_collectible(&mut state, Vec2::new(1.0, 100.0), Vec2::new(-3.0, 0.0));

        step(&mut state);

        let c = &state.collectibles[0];
        assert_eq!(c.vel.x, 3.0);
        assert!(c.pos.x >= 0.0);
        assert!(c.pos.x + c.size.x <= state.arena.width);
    }

    #[test]
    fn bouncing_handles_bottom_edge() {
        let mut state = test_state();
        let y = state.arena.height - COLLECTIBLE_HEIGHT - 1.0;
        push_collectible(&mut state, Vec2::new(100.0, y), Vec2::new(0.0, 4.0));

        step(&mut state);

        let c = &state.collectibles[0];
        assert_eq!(c.vel.y, -4.0);
        assert!(c.pos.y + c.size.y <= state.arena.height);
    }

    #[test]
    fn diagonal_input_is_not_faster_than_axis_aligned() {
        let mut state = test_state();
        let start = state.player.pos;
        let input = TickInput::new(1.0, 1.0, false);

        move_player(&mut state, &input);

        let moved = (state.player.pos - start).length();
        assert!((moved - PLAYER_SPEED).abs() < 1e-3);
    }

    #[test]
    fn player_clamps_to_arena_edges() {
        let mut state = test_state();
        state.player.pos = Vec2::new(2.0, 2.0);
        let input = TickInput::new(-1.0, -1.0, false);

        for _ in 0..5 {
            move_player(&mut state, &input);
        }
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    #[test]
    fn facing_tracks_last_nonzero_movement() {
        let mut state = test_state();
        move_player(&mut state, &TickInput::new(1.0, 0.0, false));
        assert_eq!(state.player.facing, Vec2::X);

        // No movement leaves facing untouched
        move_player(&mut state, &TickInput::new(0.0, 0.0, false));
        assert_eq!(state.player.facing, Vec2::X);
    }

    #[test]
    fn bullets_are_removed_above_the_arena() {
        let mut state = test_state();
        let id = state.next_entity_id();
        state.bullets.push(crate::sim::state::Bullet {
            id,
            pos: Vec2::new(100.0, 1.0),
            size: Vec2::splat(BULLET_SIZE),
            vel: Vec2::new(0.0, -BULLET_SPEED),
        });

        step(&mut state);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn hostile_shots_are_removed_below_the_arena() {
        let mut state = test_state();
        let id = state.next_entity_id();
        state.hostile_shots.push(crate::sim::state::HostileShot {
            id,
            pos: Vec2::new(100.0, 598.0),
            size: Vec2::splat(HOSTILE_SHOT_SIZE),
            vel: Vec2::new(0.0, HOSTILE_SHOT_SPEED),
        });

        step(&mut state);
        assert!(state.hostile_shots.is_empty());
    }

    #[test]
    fn resize_reclamps_entities_into_new_bounds() {
        let mut state = test_state();
        let id = state.next_entity_id();
        state.hostiles.push(Hostile {
            id,
            pos: Vec2::new(700.0, 500.0),
            size: Vec2::splat(HOSTILE_SIZE),
            vel: Vec2::new(HOSTILE_SPEED, HOSTILE_SPEED),
            health: HOSTILE_BASE_HEALTH,
            is_tough: false,
            next_shot_tick: u64::MAX,
            last_hit_tick: None,
        });

        state.arena = Arena::new(400.0, 300.0);
        clamp_to_arena(&mut state);

        let h = &state.hostiles[0];
        assert!(h.pos.x + h.size.x <= 400.0);
        assert!(h.pos.y + h.size.y <= 300.0);
        assert!(state.player.pos.x + state.player.size.x <= 400.0);
    }
}
