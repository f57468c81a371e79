//! Default locomotion integration: gravity, friction, horizontal drive, the
//! decaying jump impulse, and knockback decay.
//!
//! Everything here operates on velocities in the world frame; authored move
//! data is defined facing +X and mirrored by the caller before it gets here.

use glam::Vec2;

/// Gravity applied as a single-step velocity floor; the terminal fall speed
/// equals the gravity constant magnitude.
pub const GRAVITY: Vec2 = Vec2::new(0.0, -5.0);
/// Per-axis velocity fraction removed per tick while grounded.
pub const GROUND_FRICTION: Vec2 = Vec2::new(0.3, 0.0);
/// Per-axis velocity fraction removed per tick while airborne.
pub const AIR_FRICTION: Vec2 = Vec2::new(0.1, 0.1);
pub const MOVE_SPEED: f32 = 3.5;
pub const JUMP_SPEED: f32 = 6.0;
pub const JUMP_SLOWDOWN_RATE: f32 = 12.0;
/// Jump impulse multiplier when the stick is held up at jump entry.
pub const HI_JUMP_MODIFIER: f32 = 1.5;
pub const DASH_SPEED: f32 = 8.0;
pub const DASH_DURATION: f32 = 0.18;
pub const DASH_COOLDOWN: f32 = 0.25;
pub const WALL_RUN_SPEED: f32 = 5.0;
pub const WALL_RUN_SLOWDOWN_RATE: f32 = 8.0;
pub const WALL_JUMP_SPEED: Vec2 = Vec2::new(6.0, 4.0);
pub const WALL_JUMP_DURATION: f32 = 0.33;
pub const WALL_JUMP_SLOWDOWN_RATE: f32 = 50.0;
/// Knockback shed per axis per tick (not per second).
pub const KNOCKBACK_DECAY: Vec2 = Vec2::new(0.2, 0.2);

/// Add gravity, flooring vertical speed at the gravity magnitude rather than
/// re-integrating it exponentially.
#[inline]
pub fn apply_gravity(v: &mut Vec2) {
    *v += GRAVITY;
    if v.y < GRAVITY.y {
        v.y = GRAVITY.y;
    }
}

/// Drive horizontal velocity from the (already deadzoned) move axis, clamped
/// to the run speed in either direction.
#[inline]
pub fn apply_horizontal(v: &mut Vec2, move_x: f32, move_speed: f32) {
    v.x += move_x * move_speed;
    v.x = v.x.clamp(-move_speed, move_speed);
}

/// Cap vertical velocity to the remaining jump impulse. The impulse itself is
/// decayed by the caller (see `Player`), and truncated to zero on release for
/// variable jump height.
#[inline]
pub fn apply_jump(v: &mut Vec2, jump_speed_remaining: f32) {
    v.y += jump_speed_remaining;
    if v.y > jump_speed_remaining {
        v.y = jump_speed_remaining;
    }
}

#[inline]
pub fn apply_friction(v: &mut Vec2, grounded: bool) {
    let f = if grounded { GROUND_FRICTION } else { AIR_FRICTION };
    v.x *= 1.0 - f.x;
    v.y *= 1.0 - f.y;
}

/// One decay step toward zero per axis, floored to exactly zero once within a
/// single step so the vector never oscillates across sign.
#[inline]
pub fn decay_knockback(k: Vec2) -> Vec2 {
    Vec2::new(
        decay_axis(k.x, KNOCKBACK_DECAY.x),
        decay_axis(k.y, KNOCKBACK_DECAY.y),
    )
}

#[inline]
fn decay_axis(value: f32, rate: f32) -> f32 {
    if value.abs() > rate {
        value - rate.copysign(value)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_floors_at_terminal_speed() {
        let mut v = Vec2::new(0.0, -0.5);
        apply_gravity(&mut v);
        assert_eq!(v.y, GRAVITY.y);
        apply_gravity(&mut v);
        assert_eq!(v.y, GRAVITY.y);
    }

    #[test]
    fn horizontal_clamps_to_move_speed() {
        let mut v = Vec2::new(3.4, 0.0);
        apply_horizontal(&mut v, 1.0, MOVE_SPEED);
        assert_eq!(v.x, MOVE_SPEED);
        let mut v = Vec2::new(-3.4, 0.0);
        apply_horizontal(&mut v, -1.0, MOVE_SPEED);
        assert_eq!(v.x, -MOVE_SPEED);
    }

    #[test]
    fn knockback_reaches_exactly_zero_without_overshoot() {
        let mut k = Vec2::new(0.5, -0.5);
        let mut ticks = 0;
        while k != Vec2::ZERO {
            let prev = k;
            k = decay_knockback(k);
            // never flips sign
            assert!(k.x * prev.x >= 0.0 && k.y * prev.y >= 0.0);
            ticks += 1;
            assert!(ticks <= 3, "decay must terminate within ceil(0.5 / 0.2) ticks");
        }
        assert_eq!(ticks, 3);
    }

    #[test]
    fn knockback_within_one_step_snaps_to_zero() {
        assert_eq!(decay_knockback(Vec2::new(0.15, -0.2)), Vec2::ZERO);
    }
}
