use combat_core::{Arena, InputSnapshot, MoveId, NeutralInput, ScriptedInput};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn toward_wall(ticks: usize) -> ScriptedInput {
    ScriptedInput::held(
        InputSnapshot {
            move_axis: Vec2::new(1.0, 0.0),
            ..Default::default()
        },
        ticks,
    )
}

#[test]
fn airborne_player_runs_up_the_wall_then_flips_away() {
    let mut arena = Arena::new(Box::new(toward_wall(8)), Box::new(NeutralInput));
    // Airborne next to the right boundary wall, already facing it.
    arena.players[0].pos = Vec2::new(7.5, 2.0);

    let mut saw = Vec::new();
    let mut y_at_wall_run_start = None;
    let mut y_during_wall_run = 0.0f32;
    for _ in 0..300 {
        arena.tick(DT);
        let p = &arena.players[0];
        if saw.last() != Some(&p.state) {
            saw.push(p.state);
        }
        if p.state == MoveId::WallRun {
            y_at_wall_run_start.get_or_insert(p.pos.y);
            y_during_wall_run = p.pos.y;
        }
        if !p.grounded {
            // the re-entry guard holds for the whole airtime after the run
            if saw.contains(&MoveId::WallRunFlip) {
                assert!(p.wall_ran_since_grounded);
            }
        }
    }

    // fall (no wall-run from idle caps) -> wall-run -> flip -> fall -> idle
    assert_eq!(
        saw,
        vec![
            MoveId::Fall,
            MoveId::WallRun,
            MoveId::WallRunFlip,
            MoveId::Fall,
            MoveId::Idle
        ]
    );

    // The run climbed.
    let start = y_at_wall_run_start.expect("wall run never started");
    assert!(
        y_during_wall_run > start + 0.2,
        "wall run must climb: {} -> {}",
        start,
        y_during_wall_run
    );

    // The flip carried the player away from the wall and the landing cleared
    // the guard.
    let p = &arena.players[0];
    assert!(p.grounded);
    assert!(p.pos.x < 7.5);
    assert!(!p.wall_ran_since_grounded);
}

#[test]
fn grounded_states_never_wall_run() {
    // Running into the wall on the ground must stay run/idle; wall-run is an
    // airborne capability.
    let mut arena = Arena::new(Box::new(toward_wall(240)), Box::new(NeutralInput));
    for _ in 0..240 {
        arena.tick(DT);
        assert_ne!(arena.players[0].state, MoveId::WallRun);
    }
    // Pinned against the wall inset of the bounds.
    assert!(arena.players[0].pos.x > 7.0);
}
