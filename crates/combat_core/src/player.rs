//! Player entity: transform, health, timers, and the per-tick pipeline.
//!
//! Tick order per player (driven by the arena): read input -> detect
//! collisions (ground/wall/hit casts) -> age timers -> evaluate state
//! transition -> apply movement -> clamp to arena bounds. Hits discovered
//! here are only *collected*; the arena resolves them once per global tick.

use glam::Vec2;

use crate::anim::FrameClock;
use crate::events::{HealthChanged, HitEvent};
use crate::geom;
use crate::input::InputSnapshot;
use crate::locomotion::{self, MOVE_SPEED};
use crate::moves::{Capabilities, MoveId, MovementKind};
use crate::stage::{ColliderTag, Stage};
use crate::state;

pub const MAX_HEALTH: i32 = 100;
/// Seconds a dead player lies on the roof before respawning in place.
pub const DIE_DURATION: f32 = 5.0;

const GROUND_RAY_OFFSET: Vec2 = Vec2::new(0.0, 0.2);
const GROUND_RAY_DIR: Vec2 = Vec2::new(0.0, -1.0);
const GROUND_RAY_LEN: f32 = 0.21;
pub const WALL_RAY_OFFSET: Vec2 = Vec2::new(0.2, 0.0);
const WALL_RAY_DIR: Vec2 = Vec2::new(1.0, 0.0);
const WALL_RAY_LEN: f32 = 0.3;

const HURTBOX_HALF_WIDTH: f32 = 0.25;
const HURTBOX_HEIGHT: f32 = 1.0;

/// Binary facing; all authored move geometry assumes +X and is mirrored
/// through this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Mirror a canonical facing-+X vector into world space.
    #[inline]
    pub fn mirror(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.sign(), v.y)
    }

    #[inline]
    pub fn flipped(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Hurtbox snapshot of a potential victim, taken by the arena before each
/// attacker's update.
#[derive(Copy, Clone, Debug)]
pub struct HurtboxTarget {
    pub index: usize,
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub index: usize,
    pub pos: Vec2,
    pub facing: Facing,
    pub velocity: Vec2,
    pub health: i32,
    pub dead: bool,
    pub gun_drawn: bool,
    pub grounded: bool,
    pub facing_wall: bool,
    /// Set on wall-run entry, cleared on ground contact; gates re-entry.
    pub wall_ran_since_grounded: bool,
    pub knockback: Vec2,
    pub state: MoveId,
    pub(crate) clock: FrameClock,
    pub(crate) anim_done: bool,
    pub input: InputSnapshot,

    pub hit_timer: f32,
    pub die_timer: f32,
    pub dash_timer: f32,
    pub dash_cooldown: f32,
    pub dash_direction: f32,
    pub jump_speed_current: f32,
    pub wall_run_speed_current: f32,
    pub wall_jump_speed_current: Vec2,
    pub wall_jump_timer: f32,

    spawn: Vec2,
}

impl Player {
    pub fn new(index: usize, spawn: Vec2) -> Self {
        Self {
            index,
            pos: spawn,
            facing: initial_facing(index),
            velocity: Vec2::ZERO,
            health: MAX_HEALTH,
            dead: false,
            gun_drawn: false,
            grounded: false,
            facing_wall: false,
            wall_ran_since_grounded: false,
            knockback: Vec2::ZERO,
            state: MoveId::Idle,
            clock: FrameClock::start(MoveId::Idle.def()),
            anim_done: false,
            input: InputSnapshot::default(),
            hit_timer: 0.0,
            die_timer: 0.0,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            dash_direction: 1.0,
            jump_speed_current: 0.0,
            wall_run_speed_current: 0.0,
            wall_jump_speed_current: Vec2::ZERO,
            wall_jump_timer: 0.0,
            spawn,
        }
    }

    /// Back to the spawn point at full health in idle, gun holstered. Called
    /// at match start and when the death timer elapses.
    pub fn reset(&mut self) {
        state::enter(self, MoveId::Idle, true);
        self.gun_drawn = false;
        self.pos = self.spawn;
        self.facing = initial_facing(self.index);
        self.health = MAX_HEALTH;
        self.dead = false;
        self.grounded = false;
        self.facing_wall = false;
        self.wall_ran_since_grounded = false;
        self.velocity = Vec2::ZERO;
        self.knockback = Vec2::ZERO;
        self.hit_timer = 0.0;
        self.die_timer = 0.0;
        self.dash_timer = 0.0;
        self.dash_cooldown = 0.0;
        self.jump_speed_current = 0.0;
        self.wall_run_speed_current = 0.0;
        self.wall_jump_speed_current = Vec2::ZERO;
        self.wall_jump_timer = 0.0;
        log::info!("arena: player {} reset to spawn", self.index);
    }

    #[inline]
    pub fn caps(&self) -> Capabilities {
        self.state.def().caps
    }

    #[inline]
    pub fn can_be_hit(&self) -> bool {
        self.caps().can_be_hit
    }

    /// Current sprite cell, for renderers and the cancel-window check.
    #[inline]
    pub fn frame(&self) -> u32 {
        self.clock.frame()
    }

    /// Hurtbox in world space: a box anchored at the feet origin.
    pub fn hurtbox(&self) -> (Vec2, Vec2) {
        (
            self.pos + Vec2::new(-HURTBOX_HALF_WIDTH, 0.0),
            self.pos + Vec2::new(HURTBOX_HALF_WIDTH, HURTBOX_HEIGHT),
        )
    }

    #[inline]
    pub(crate) fn pressing_toward_wall(&self) -> bool {
        self.input.move_axis.x != 0.0 && self.input.move_axis.x.signum() == self.facing.sign()
    }

    /// One simulation step. `dt` is already clamped by the arena.
    pub fn update(
        &mut self,
        dt: f32,
        input: InputSnapshot,
        stage: &Stage,
        targets: &[HurtboxTarget],
        bounds: (Vec2, Vec2),
        out_hits: &mut Vec<HitEvent>,
    ) {
        self.input = input.deadzoned();
        self.check_colliders(stage, targets, out_hits);
        self.age_timers(dt);
        state::state_tick(self, dt);
        state::evaluate_transition(self);
        self.apply_movement(dt, bounds);
    }

    fn check_colliders(
        &mut self,
        stage: &Stage,
        targets: &[HurtboxTarget],
        out_hits: &mut Vec<HitEvent>,
    ) {
        // ground: short downward ray from just above the feet; on contact the
        // vertical position snaps exactly to the hit point
        let origin = self.pos + GROUND_RAY_OFFSET;
        match stage.cast(origin, GROUND_RAY_DIR, GROUND_RAY_LEN, ColliderTag::Ground) {
            Some(hit) => {
                self.grounded = true;
                self.pos.y = hit.point.y;
                self.wall_ran_since_grounded = false;
            }
            None => {
                self.grounded = false;
            }
        }

        // wall: lateral ray mirrored by facing
        let w_origin = self.pos + self.facing.mirror(WALL_RAY_OFFSET);
        let w_dir = self.facing.mirror(WALL_RAY_DIR);
        self.facing_wall = stage
            .cast(w_origin, w_dir, WALL_RAY_LEN, ColliderTag::Wall)
            .is_some();

        // hit casts, only inside the active window of an attack
        let def = self.state.def();
        let Some(atk) = &def.attack else {
            return;
        };
        let frame = self.clock.frame();
        if frame < atk.active_frame || frame >= atk.recovery_frame {
            return;
        }
        for (i, cast) in atk.hit_casts.iter().enumerate() {
            let offset = atk.hit_offsets[i.min(atk.hit_offsets.len() - 1)];
            let p0 = self.pos + self.facing.mirror(offset);
            let p1 = p0 + self.facing.mirror(*cast);
            for target in targets {
                if target.index == self.index {
                    continue;
                }
                if geom::segment_aabb_enter_t(p0, p1, target.min, target.max).is_some() {
                    log::debug!(
                        "arena: player {} {} connects with player {}",
                        self.index,
                        self.state.name(),
                        target.index
                    );
                    out_hits.push(HitEvent {
                        attacker: self.index,
                        victim: target.index,
                        move_id: self.state,
                        launch: self.facing.mirror(atk.launch),
                    });
                }
            }
        }
    }

    fn age_timers(&mut self, dt: f32) {
        if self.dash_cooldown > 0.0 {
            self.dash_cooldown -= dt;
        }
        if self.hit_timer > 0.0 {
            self.hit_timer -= dt;
        }
        self.anim_done = self.clock.advance(dt);
    }

    fn apply_movement(&mut self, dt: f32, bounds: (Vec2, Vec2)) {
        // knockback decays per tick and, while present, owns the velocity
        // regardless of state
        if self.knockback != Vec2::ZERO {
            self.knockback = locomotion::decay_knockback(self.knockback);
            self.velocity = self.knockback;
        }

        match self.state.def().movement {
            MovementKind::Dash => {
                self.velocity = Vec2::new(self.dash_direction * locomotion::DASH_SPEED, 0.0);
                self.pos += self.velocity * dt;
            }
            MovementKind::WallRun => {
                self.velocity = Vec2::new(0.0, self.wall_run_speed_current);
                self.pos += self.velocity * dt;
            }
            MovementKind::WallFlip => {
                // arc away from the wall the run went up
                self.velocity = Vec2::new(
                    -self.facing.sign() * self.wall_jump_speed_current.x,
                    self.wall_jump_speed_current.y,
                );
                self.pos += self.velocity * dt;
            }
            MovementKind::Frozen => {
                self.velocity = Vec2::ZERO;
            }
            MovementKind::Knockback => {
                self.velocity = self.knockback;
                self.pos += self.velocity * dt;
            }
            MovementKind::Default => {
                if self.caps().can_move {
                    locomotion::apply_friction(&mut self.velocity, self.grounded);
                    if !self.grounded && self.jump_speed_current <= 0.0 {
                        locomotion::apply_gravity(&mut self.velocity);
                    } else if self.grounded {
                        self.velocity.y = 0.0;
                    }
                    locomotion::apply_horizontal(
                        &mut self.velocity,
                        self.input.move_axis.x,
                        MOVE_SPEED,
                    );
                    if self.jump_speed_current > 0.0 {
                        locomotion::apply_jump(&mut self.velocity, self.jump_speed_current);
                    }
                }
                self.pos += self.velocity * dt;
            }
        }

        self.apply_bounds(bounds);
    }

    fn apply_bounds(&mut self, (min, max): (Vec2, Vec2)) {
        self.pos.x = self
            .pos
            .x
            .clamp(min.x + WALL_RAY_OFFSET.x, max.x - WALL_RAY_OFFSET.x);
        self.pos.y = self.pos.y.clamp(min.y, max.y);
    }

    /// Apply one resolved hit. Events against a non-hittable victim are
    /// dropped without effect.
    pub(crate) fn receive_hit(&mut self, ev: &HitEvent, out: &mut Vec<HealthChanged>) {
        if !self.can_be_hit() {
            log::debug!(
                "arena: player {} shrugs off {} (not hittable)",
                self.index,
                ev.move_id.name()
            );
            return;
        }
        let Some(atk) = ev.move_id.def().attack else {
            return;
        };
        self.hit_timer = atk.hitstun;
        self.knockback = ev.launch;
        self.health -= atk.damage;
        log::info!(
            "arena: player {} took {} from player {}'s {} ({} hp left)",
            self.index,
            atk.damage,
            ev.attacker,
            ev.move_id.name(),
            self.health
        );
        let fatal = self.health <= 0 && !self.dead;
        out.push(HealthChanged {
            player: self.index,
            hp: self.health,
            max: MAX_HEALTH,
            fatal,
        });
        if fatal {
            self.dead = true;
            state::enter(self, MoveId::Die, false);
            log::info!("arena: player {} died", self.index);
        }
    }
}

fn initial_facing(index: usize) -> Facing {
    if index == 0 {
        Facing::Right
    } else {
        Facing::Left
    }
}
