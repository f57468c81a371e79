//! Headless bout driver: two CPU fighters on the default rooftop, fixed
//! timestep, outcome on stdout.

use combat_core::{moves, Arena};
use cpu_input::CpuInput;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seconds: f32 = args
        .get(1)
        .map(|s| s.parse().expect("parse <seconds>"))
        .unwrap_or(60.0);
    let seed: u64 = args
        .get(2)
        .map(|s| s.parse().expect("parse <seed>"))
        .unwrap_or(1);

    moves::validate().expect("move catalog invariants");

    let mut arena = Arena::new(
        Box::new(CpuInput::new(seed)),
        Box::new(CpuInput::new(seed.wrapping_add(1))),
    );

    let dt = 1.0 / 60.0;
    let ticks = (seconds / dt) as u64;
    let mut falls = [0u32; 2];
    for t in 0..ticks {
        arena.tick(dt);
        for ev in arena.take_health_events() {
            if ev.fatal {
                falls[1 - ev.player] += 1;
                log::info!(
                    "harness: player {} felled player {} at t={:.2}s",
                    1 - ev.player,
                    ev.player,
                    t as f32 * dt
                );
            }
        }
        if t % (60 * 5) == 0 {
            println!(
                "t={:>5.1}s  p0 {:>4} hp ({})  p1 {:>4} hp ({})",
                t as f32 * dt,
                arena.players[0].health,
                arena.players[0].state.name(),
                arena.players[1].health,
                arena.players[1].state.name(),
            );
        }
    }

    println!(
        "final: p0 {} falls scored, p1 {} falls scored over {:.0}s (seed {})",
        falls[0], falls[1], seconds, seed
    );
}
