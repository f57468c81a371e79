//! Per-player state machine: per-state tick logic, the strictly-ordered
//! transition ladder, and state entry with its capability side effects.
//!
//! Transitions are explicit return-free function calls evaluated once per
//! tick by the player update; animation completions are edges consumed here,
//! not callbacks. Re-entering the current state is a no-op unless forced
//! (the rapid-jab loop restarts itself that way).

use crate::anim::FrameClock;
use crate::locomotion::{
    DASH_COOLDOWN, DASH_DURATION, HI_JUMP_MODIFIER, JUMP_SLOWDOWN_RATE, JUMP_SPEED,
    WALL_JUMP_DURATION, WALL_JUMP_SLOWDOWN_RATE, WALL_JUMP_SPEED, WALL_RUN_SLOWDOWN_RATE,
    WALL_RUN_SPEED,
};
use crate::moves::MoveId;
use crate::player::{Facing, Player, DIE_DURATION};

use glam::Vec2;

/// Change the active state. No-op when `next` is already active unless
/// `force` is set.
pub fn enter(p: &mut Player, next: MoveId, force: bool) {
    if p.state == next && !force {
        return;
    }
    on_exit(p);
    log::debug!(
        "arena: player {} state {} -> {}",
        p.index,
        p.state.name(),
        next.name()
    );
    p.state = next;
    p.clock = FrameClock::start(next.def());
    p.anim_done = false;
    on_enter(p);
}

fn on_enter(p: &mut Player) {
    match p.state {
        MoveId::Jump => {
            p.jump_speed_current = JUMP_SPEED;
            // holding up at takeoff buys a high jump
            if p.input.move_axis.y > 0.0 {
                p.jump_speed_current *= HI_JUMP_MODIFIER;
            }
        }
        MoveId::JumpGun => {
            p.jump_speed_current = JUMP_SPEED;
        }
        MoveId::Dash | MoveId::DashGun => {
            p.dash_direction = if p.input.move_axis.x == 0.0 {
                p.facing.sign()
            } else {
                p.input.move_axis.x.signum()
            };
            p.dash_timer = DASH_DURATION;
        }
        MoveId::WallRun => {
            p.wall_run_speed_current = WALL_RUN_SPEED;
            p.wall_ran_since_grounded = true;
        }
        MoveId::WallRunFlip => {
            p.wall_jump_speed_current = WALL_JUMP_SPEED;
            p.wall_jump_timer = WALL_JUMP_DURATION;
        }
        MoveId::Die => {
            p.die_timer = 0.0;
        }
        _ => {}
    }
}

fn on_exit(p: &mut Player) {
    match p.state {
        MoveId::Jump | MoveId::JumpGun => {
            p.jump_speed_current = 0.0;
        }
        MoveId::Dash | MoveId::DashGun => {
            p.dash_cooldown = DASH_COOLDOWN;
        }
        MoveId::WallRun => {
            p.wall_run_speed_current = 0.0;
        }
        MoveId::WallRunFlip => {
            p.wall_jump_speed_current = Vec2::ZERO;
            p.wall_jump_timer = 0.0;
        }
        _ => {}
    }
}

/// Per-state update: state-local timers, timer-driven exits, and
/// animation-completion chains. Runs after timer aging, before the ladder.
pub fn state_tick(p: &mut Player, dt: f32) {
    match p.state {
        MoveId::Run | MoveId::RunGun => {
            let x = p.input.move_axis.x;
            if (x > 0.0 && p.facing == Facing::Left) || (x < 0.0 && p.facing == Facing::Right) {
                p.facing = p.facing.flipped();
            }
        }
        MoveId::Jump | MoveId::JumpGun => {
            p.jump_speed_current -= dt * JUMP_SLOWDOWN_RATE;
            // releasing jump cuts the impulse for variable height
            if !p.input.jump {
                p.jump_speed_current = 0.0;
            }
        }
        MoveId::Dash | MoveId::DashGun => {
            p.dash_timer -= dt;
            if p.dash_timer <= 0.0 {
                let next = if p.grounded {
                    idle_for(p.gun_drawn)
                } else {
                    fall_for(p.gun_drawn)
                };
                enter(p, next, false);
            }
        }
        MoveId::WallRun => {
            p.wall_run_speed_current -= dt * WALL_RUN_SLOWDOWN_RATE;
            if !p.pressing_toward_wall() || p.wall_run_speed_current <= 0.0 {
                enter(p, MoveId::WallRunFlip, false);
            }
        }
        MoveId::WallRunFlip => {
            p.wall_jump_timer -= dt;
            p.wall_jump_speed_current.y -= dt * WALL_JUMP_SLOWDOWN_RATE;
            if p.wall_jump_timer <= 0.0 {
                enter(p, fall_for(p.gun_drawn), false);
            }
        }
        MoveId::Hit | MoveId::HitGun => {
            if p.hit_timer <= 0.0 {
                enter(p, idle_for(p.gun_drawn), false);
            }
        }
        MoveId::Die => {
            p.die_timer += dt;
        }
        _ => {}
    }

    if p.anim_done {
        on_animation_complete(p);
    }
}

/// Chain table, evaluated exactly once at natural animation completion
/// against the current raw input.
fn on_animation_complete(p: &mut Player) {
    match p.state {
        MoveId::Light1 => {
            let next = if p.input.light { MoveId::Light2 } else { MoveId::Idle };
            enter(p, next, false);
        }
        MoveId::Light2 => {
            let next = if p.input.light {
                MoveId::LightRapidJab
            } else {
                MoveId::Idle
            };
            enter(p, next, false);
        }
        MoveId::LightRapidJab => {
            if p.input.light {
                // restart the jab loop in place
                enter(p, MoveId::LightRapidJab, true);
            } else {
                enter(p, MoveId::Idle, false);
            }
        }
        MoveId::Heavy1 | MoveId::HeavyLauncher => {
            enter(p, MoveId::Idle, false);
        }
        MoveId::JumpKick | MoveId::JumpDiveKick => {
            enter(p, MoveId::Fall, false);
        }
        MoveId::ShootGun | MoveId::ShootGunUp => {
            enter(p, MoveId::IdleGun, false);
        }
        MoveId::JumpShootGun | MoveId::JumpShootGunUp | MoveId::JumpShootGunDown => {
            enter(p, MoveId::FallGun, false);
        }
        MoveId::SwitchGun | MoveId::SwitchGunReverse => {
            // the holster flip lands only on completion, never on entry
            p.gun_drawn = !p.gun_drawn;
            enter(p, idle_for(p.gun_drawn), false);
        }
        _ => {}
    }
}

/// The transition ladder: first matching branch wins, one evaluation per
/// tick.
pub fn evaluate_transition(p: &mut Player) {
    if p.dead {
        if p.die_timer >= DIE_DURATION {
            p.reset();
        } else {
            enter(p, MoveId::Die, false);
        }
        return;
    }
    if p.hit_timer > 0.0 {
        let next = if p.gun_drawn { MoveId::HitGun } else { MoveId::Hit };
        enter(p, next, false);
        return;
    }

    let caps = p.caps();
    let gun = p.gun_drawn;
    let dash_ready = p.dash_cooldown <= 0.0 && p.input.dash;
    if !caps.can_transition {
        // cancel window: a buffered dash may interrupt an attack once its
        // sprite frame clears the cancel threshold
        if p.state.is_attack() && dash_ready && p.clock.frame() >= p.state.def().can_cancel_after {
            enter(p, dash_for(gun), false);
        }
        return;
    }

    let input = p.input;
    if p.facing_wall && caps.can_wall_run && p.pressing_toward_wall() && !p.wall_ran_since_grounded
    {
        enter(p, MoveId::WallRun, false);
    } else if input.light {
        let next = if gun {
            gun_shot(p.grounded, input.move_axis.y)
        } else if p.grounded {
            MoveId::Light1
        } else {
            MoveId::JumpKick
        };
        enter(p, next, false);
    } else if input.heavy {
        let next = if gun {
            gun_shot(p.grounded, input.move_axis.y)
        } else if p.grounded {
            if input.move_axis.y > 0.0 {
                MoveId::HeavyLauncher
            } else {
                MoveId::Heavy1
            }
        } else {
            MoveId::JumpDiveKick
        };
        enter(p, next, false);
    } else if input.switch_gun && p.grounded {
        let next = if gun {
            MoveId::SwitchGunReverse
        } else {
            MoveId::SwitchGun
        };
        enter(p, next, false);
    } else if dash_ready || p.dash_timer > 0.0 {
        enter(p, dash_for(gun), false);
    } else if (caps.can_jump && input.jump) || p.jump_speed_current > 0.0 {
        let next = if gun { MoveId::JumpGun } else { MoveId::Jump };
        enter(p, next, false);
    } else if !p.grounded {
        enter(p, fall_for(gun), false);
    } else if input.move_axis.x != 0.0 {
        let next = if gun { MoveId::RunGun } else { MoveId::Run };
        enter(p, next, false);
    } else {
        enter(p, idle_for(gun), false);
    }
}

/// Shot variant by grounded flag and vertical input; airborne shots also
/// angle down.
fn gun_shot(grounded: bool, move_y: f32) -> MoveId {
    if grounded {
        if move_y > 0.0 {
            MoveId::ShootGunUp
        } else {
            MoveId::ShootGun
        }
    } else if move_y > 0.0 {
        MoveId::JumpShootGunUp
    } else if move_y < 0.0 {
        MoveId::JumpShootGunDown
    } else {
        MoveId::JumpShootGun
    }
}

#[inline]
pub(crate) fn idle_for(gun: bool) -> MoveId {
    if gun {
        MoveId::IdleGun
    } else {
        MoveId::Idle
    }
}

#[inline]
pub(crate) fn fall_for(gun: bool) -> MoveId {
    if gun {
        MoveId::FallGun
    } else {
        MoveId::Fall
    }
}

#[inline]
fn dash_for(gun: bool) -> MoveId {
    if gun {
        MoveId::DashGun
    } else {
        MoveId::Dash
    }
}
