//! Headless demo driver
//!
//! Runs the simulation in real time with scripted input, logs phase
//! transitions, and dumps the final render view as JSON. Useful for
//! exercising the full session loop without a render layer attached.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use snack_storm::Session;
use snack_storm::consts::SIM_DT;
use snack_storm::sim::TickInput;

/// Demo wall-clock cap in simulated seconds
const DEMO_LIMIT_SECS: f32 = 120.0;

fn main() {
    env_logger::init();
    log::info!("snack-storm headless demo starting");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = match Session::new(seed, 800.0, 600.0) {
        Ok(session) => session,
        Err(err) => {
            log::error!("bad configuration: {err}");
            std::process::exit(1);
        }
    };
    session.start();

    let mut last = Instant::now();
    let mut last_phase = session.state().phase;
    let tick_limit = (DEMO_LIMIT_SECS / SIM_DT) as u64;

    while !session.state().phase.is_terminal() {
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        // Scripted input: sweep the arena and hold fire
        let t = session.state().time_ticks as f32 * SIM_DT;
        let input = TickInput::new((t * 0.7).sin(), (t * 0.3).sin() * 0.4, true);
        session.advance(elapsed, &input);

        let phase = session.state().phase;
        if phase != last_phase {
            log::info!("phase: {last_phase:?} -> {phase:?}");
            last_phase = phase;
        }

        if session.state().time_ticks > tick_limit {
            log::info!("demo time limit reached");
            break;
        }
        std::thread::sleep(Duration::from_millis(8));
    }

    match serde_json::to_string_pretty(&session.view()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final view: {err}"),
    }
}
