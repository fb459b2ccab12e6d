//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; one `tick()` call is one simulation step
//! - Seeded RNG only, owned by [`GameState`]
//! - Entities are removed by id, never by index while iterating
//! - No rendering or platform dependencies; callers read [`RenderView`]

pub mod boss;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use state::{
    Arena, Boss, BossPayload, BossShot, Bullet, Collectible, GameState, Hostile, HostileShot,
    Phase, Player,
};
pub use tick::{TickInput, tick};
pub use view::{EntityKind, EntityView, RenderView, render_view};
