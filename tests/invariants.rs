//! Property tests for the simulation's universal invariants
//!
//! Random input sequences are driven through the public session API; after
//! every step the state must satisfy the bounds, clamp, and phase
//! exclusivity guarantees no matter what the inputs did.

use proptest::prelude::*;

use snack_storm::Session;
use snack_storm::consts::*;
use snack_storm::sim::TickInput;

fn check_invariants(session: &Session) {
    let state = session.state();
    let arena = state.arena;

    // Health and resource always clamp to their bounds
    assert!(state.player.health >= 0.0 && state.player.health <= PLAYER_MAX_HEALTH);
    assert!(state.player.resource >= 0.0 && state.player.resource <= BOSS_THRESHOLD);
    if let Some(boss) = &state.boss {
        assert!(boss.health >= 0.0 && boss.health <= BOSS_MAX_HEALTH);
    }

    // Bounce-type entities never leave the arena
    let inside = |pos: glam::Vec2, size: glam::Vec2| {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x + size.x <= arena.width && pos.y + size.y <= arena.height
    };
    assert!(inside(state.player.pos, state.player.size));
    for c in &state.collectibles {
        assert!(inside(c.pos, c.size), "collectible out of bounds at {:?}", c.pos);
    }
    for h in &state.hostiles {
        assert!(inside(h.pos, h.size), "hostile out of bounds at {:?}", h.pos);
    }

    // Collectibles and hostiles are absent by construction in boss phases
    if state.phase.boss_active() {
        assert!(state.collectibles.is_empty());
        assert!(state.hostiles.is_empty());
        assert!(state.hostile_shots.is_empty());
    }

    // At most one boss, present exactly while the phase says so
    assert_eq!(state.boss.is_some(), state.phase.boss_active());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_over_random_sessions(
        seed in any::<u64>(),
        steps in proptest::collection::vec(
            (-1.5f32..1.5, -1.5f32..1.5, any::<bool>()),
            1..200,
        ),
    ) {
        let mut session = Session::new(seed, 800.0, 600.0).unwrap();
        session.start();
        check_invariants(&session);

        for (mx, my, fire) in steps {
            session.step_ticks(3, &TickInput::new(mx, my, fire));
            check_invariants(&session);
        }
    }

    #[test]
    fn invariants_survive_viewport_resizes(
        seed in any::<u64>(),
        resizes in proptest::collection::vec(
            (100.0f32..1000.0, 100.0f32..1000.0),
            1..20,
        ),
    ) {
        let mut session = Session::new(seed, 800.0, 600.0).unwrap();
        session.start();

        for (w, h) in resizes {
            session.step_ticks(10, &TickInput::new(1.0, 0.5, true));
            session.resize(w, h);
            check_invariants(&session);
            session.step_ticks(10, &TickInput::new(-0.5, 1.0, true));
            check_invariants(&session);
        }
    }

    #[test]
    fn restart_always_returns_to_a_playable_normal_phase(
        seed in any::<u64>(),
        warmup in 0u32..400,
    ) {
        let mut session = Session::new(seed, 800.0, 600.0).unwrap();
        session.start();
        session.step_ticks(warmup, &TickInput::new(0.8, -0.2, true));

        session.restart();
        let state = session.state();
        prop_assert_eq!(state.time_ticks, 0);
        prop_assert_eq!(state.player.health, PLAYER_MAX_HEALTH);
        prop_assert!(state.boss.is_none());
        prop_assert_eq!(state.collectibles.len(), START_COLLECTIBLES);
        check_invariants(&session);
    }
}
