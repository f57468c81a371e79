use combat_core::{Arena, InputSnapshot, MoveId, NeutralInput, ScriptedInput};

const DT: f32 = 1.0 / 60.0;

fn script() -> ScriptedInput {
    let mut frames = vec![InputSnapshot::default(); 200];
    frames[0].switch_gun = true;
    // mashed mid-switch: must be ignored, the animation is not interruptible
    for f in frames.iter_mut().take(13).skip(9) {
        f.light = true;
    }
    // after the switch completes (0.7s = 42 ticks), shoot
    for f in frames.iter_mut().take(53).skip(49) {
        f.light = true;
    }
    // holster again
    frames[79].switch_gun = true;
    ScriptedInput::new(frames)
}

#[test]
fn switch_gun_is_uninterruptible_and_flips_only_on_completion() {
    let mut arena = Arena::new(Box::new(script()), Box::new(NeutralInput));

    arena.tick(DT);
    assert_eq!(arena.players[0].state, MoveId::SwitchGun);
    assert!(
        !arena.players[0].gun_drawn,
        "the flag flips on completion, not on entry"
    );

    // Mid-switch light presses change nothing.
    for _ in 0..20 {
        arena.tick(DT);
        assert_ne!(arena.players[0].state, MoveId::Light1);
    }
    assert_eq!(arena.players[0].state, MoveId::SwitchGun);

    // Completion: gun drawn, gun idle.
    for _ in 0..25 {
        arena.tick(DT);
    }
    assert!(arena.players[0].gun_drawn);
    assert_eq!(arena.players[0].state, MoveId::IdleGun);

    // With the gun out, light fires the grounded shot.
    let mut fired = false;
    for _ in 0..10 {
        arena.tick(DT);
        if arena.players[0].state == MoveId::ShootGun {
            fired = true;
        }
    }
    assert!(fired, "gun-drawn light must select the shot");

    // The reverse switch holsters again.
    let mut reversed = false;
    for _ in 0..120 {
        arena.tick(DT);
        if arena.players[0].state == MoveId::SwitchGunReverse {
            reversed = true;
        }
    }
    assert!(reversed);
    assert!(!arena.players[0].gun_drawn);
    assert_eq!(arena.players[0].state, MoveId::Idle);
}

#[test]
fn switch_gun_is_grounded_only() {
    // Airborne player holding switch: falls without ever switching.
    let mut arena = Arena::new(
        Box::new(ScriptedInput::held(
            InputSnapshot {
                switch_gun: true,
                ..Default::default()
            },
            30,
        )),
        Box::new(NeutralInput),
    );
    arena.players[0].pos.y = 3.0;
    for _ in 0..30 {
        arena.tick(DT);
        assert_ne!(arena.players[0].state, MoveId::SwitchGun);
    }
}
