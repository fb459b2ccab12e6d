//! Read-only render snapshot
//!
//! The render/UI layer consumes one [`RenderView`] per tick and never
//! touches simulation state directly.

use glam::Vec2;
use serde::Serialize;

use super::state::{BossPayload, GameState, Phase};
use crate::consts::*;

/// Entity classification for the render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Collectible,
    Hostile,
    Bullet,
    HostileShot,
    BossShot,
    BossBomb,
    Boss,
}

/// One drawable entity with its render-relevant transient flags
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Blink window after a bullet hit (hostiles only)
    pub hit_flash: bool,
    /// Bomb explosion visual in progress
    pub exploding: bool,
    /// Tough hostile tier marker
    pub tough: bool,
}

impl EntityView {
    fn plain(kind: EntityKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            pos,
            size,
            hit_flash: false,
            exploding: false,
            tough: false,
        }
    }
}

/// Scalar HUD values plus the entity enumeration for one tick
#[derive(Debug, Clone, Serialize)]
pub struct RenderView {
    pub phase: Phase,
    pub health: f32,
    pub max_health: f32,
    pub resource: f32,
    pub resource_goal: f32,
    /// Unit vector of the player's last movement, for sprite orientation
    pub facing: Vec2,
    /// Present only while a boss is live
    pub boss_health: Option<f32>,
    pub boss_max_health: Option<f32>,
    pub score: u64,
    pub entities: Vec<EntityView>,
}

/// Build the published snapshot for the current state
pub fn render_view(state: &GameState) -> RenderView {
    let now = state.time_ticks;
    let mut entities = Vec::with_capacity(
        1 + state.collectibles.len()
            + state.hostiles.len()
            + state.bullets.len()
            + state.hostile_shots.len()
            + state.boss_shots.len()
            + usize::from(state.boss.is_some()),
    );

    entities.push(EntityView::plain(
        EntityKind::Player,
        state.player.pos,
        state.player.size,
    ));
    for c in &state.collectibles {
        entities.push(EntityView::plain(EntityKind::Collectible, c.pos, c.size));
    }
    for h in &state.hostiles {
        let mut view = EntityView::plain(EntityKind::Hostile, h.pos, h.size);
        view.hit_flash = h
            .last_hit_tick
            .is_some_and(|t| now - t < HIT_BLINK_TICKS);
        view.tough = h.is_tough;
        entities.push(view);
    }
    for b in &state.bullets {
        entities.push(EntityView::plain(EntityKind::Bullet, b.pos, b.size));
    }
    for s in &state.hostile_shots {
        entities.push(EntityView::plain(EntityKind::HostileShot, s.pos, s.size));
    }
    for s in &state.boss_shots {
        let kind = match s.payload {
            BossPayload::Pellet => EntityKind::BossShot,
            BossPayload::Bomb | BossPayload::Exploding { .. } => EntityKind::BossBomb,
        };
        let mut view = EntityView::plain(kind, s.pos, s.size);
        view.exploding = matches!(s.payload, BossPayload::Exploding { .. });
        entities.push(view);
    }
    if let Some(boss) = &state.boss {
        entities.push(EntityView::plain(EntityKind::Boss, boss.pos, boss.size));
    }

    RenderView {
        phase: state.phase,
        health: state.player.health,
        max_health: PLAYER_MAX_HEALTH,
        resource: state.player.resource,
        resource_goal: BOSS_THRESHOLD,
        facing: state.player.facing,
        boss_health: state.boss.as_ref().map(|b| b.health),
        boss_max_health: state.boss.as_ref().map(|_| BOSS_MAX_HEALTH),
        score: state.score,
        entities,
    }
}
