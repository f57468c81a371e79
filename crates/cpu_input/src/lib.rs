//! Heuristic CPU opponent.
//!
//! The core treats the CPU exactly like a human: it is just another
//! [`InputProvider`]. All randomness lives here, behind a seeded RNG, so a
//! CPU bout is reproducible from its seed and the core itself stays
//! deterministic.

use std::collections::VecDeque;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use combat_core::arena::ArenaView;
use combat_core::input::{InputProvider, InputSnapshot};
use combat_core::moves::MoveId;

/// Chance per sample of breaking off into a short evade.
const EVADE_CHANCE: f32 = 0.005;
/// How long an evade lasts once triggered.
const BEHAVIOR_SWITCH_DURATION: f32 = 0.5;
/// Attack mix: rolls above this go heavy, the rest go light.
const LIGHT_VS_HEAVY_SPLIT: f32 = 0.6;
const MELEE_ENGAGEMENT_RANGE: f32 = 0.7;
const GUN_ENGAGEMENT_RANGE: f32 = 8.0;
const SWITCH_GUN_CHANCE: f32 = 0.05;
const SWITCH_GUN_COOLDOWN: f32 = 3.0;
/// Samples of reaction lag on the enemy position.
const ENEMY_POSITION_DELAY_SAMPLES: usize = 35;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Behavior {
    Approach,
    Evade,
}

pub struct CpuInput {
    rng: SmallRng,
    behavior: Behavior,
    behavior_timer: f32,
    switch_chance_current: f32,
    switch_cooldown_current: f32,
    delayed_enemy_positions: VecDeque<Vec2>,
}

impl CpuInput {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            behavior: Behavior::Approach,
            behavior_timer: 0.0,
            switch_chance_current: SWITCH_GUN_CHANCE,
            switch_cooldown_current: SWITCH_GUN_COOLDOWN,
            delayed_enemy_positions: VecDeque::with_capacity(ENEMY_POSITION_DELAY_SAMPLES + 1),
        }
    }

    /// True while the tracked fighter is mid-shot or mid-switch; feeding
    /// inputs there only buffers attacks into animation loops.
    fn should_hold_inputs(state: MoveId) -> bool {
        matches!(
            state,
            MoveId::ShootGun
                | MoveId::ShootGunUp
                | MoveId::JumpShootGun
                | MoveId::JumpShootGunUp
                | MoveId::JumpShootGunDown
                | MoveId::SwitchGun
                | MoveId::SwitchGunReverse
        )
    }
}

impl InputProvider for CpuInput {
    fn sample(&mut self, dt: f32, view: &ArenaView<'_>) -> InputSnapshot {
        let behavior_roll: f32 = self.rng.gen();
        let attack_roll: f32 = self.rng.gen();
        let switch_roll: f32 = self.rng.gen();

        let me = view.me();
        let enemy = view.opponent();

        self.delayed_enemy_positions.push_back(enemy.pos);
        if self.delayed_enemy_positions.len() > ENEMY_POSITION_DELAY_SAMPLES {
            self.delayed_enemy_positions.pop_front();
        }
        let delayed_enemy_pos = *self
            .delayed_enemy_positions
            .front()
            .unwrap_or(&enemy.pos);
        let to_enemy = delayed_enemy_pos - me.pos;
        let engagement_range = if me.gun_drawn {
            GUN_ENGAGEMENT_RANGE
        } else {
            MELEE_ENGAGEMENT_RANGE
        };

        self.switch_cooldown_current -= dt;
        self.behavior_timer -= dt;
        if behavior_roll < EVADE_CHANCE && self.behavior_timer <= 0.0 {
            self.behavior_timer = BEHAVIOR_SWITCH_DURATION;
        }
        self.behavior = if self.behavior_timer > 0.0 {
            Behavior::Evade
        } else {
            Behavior::Approach
        };

        let mut snap = InputSnapshot::default();

        if Self::should_hold_inputs(me.state) {
            return snap;
        }

        if switch_roll < self.switch_chance_current && self.switch_cooldown_current <= 0.0 {
            snap.switch_gun = true;
            if me.gun_drawn {
                self.switch_chance_current = SWITCH_GUN_CHANCE;
            }
            self.switch_cooldown_current = SWITCH_GUN_COOLDOWN;
            log::debug!("cpu: switching weapon (drawn={})", me.gun_drawn);
            return snap;
        }

        let facing_right = me.facing == combat_core::Facing::Right;
        match self.behavior {
            Behavior::Approach => {
                if to_enemy.x < -engagement_range || (facing_right && to_enemy.x < 0.0) {
                    snap.move_axis.x = -1.0;
                } else if to_enemy.x > engagement_range || (!facing_right && to_enemy.x > 0.0) {
                    snap.move_axis.x = 1.0;
                }
                if to_enemy.y > 0.0 {
                    snap.jump = true;
                }
            }
            Behavior::Evade => {
                snap.move_axis.x = if to_enemy.x > 0.0 { -1.0 } else { 1.0 };
            }
        }

        let enemy_in_front = (to_enemy.x <= 0.0 && !facing_right) || (to_enemy.x >= 0.0 && facing_right);
        if to_enemy.length() < engagement_range && enemy_in_front {
            if to_enemy.y > 0.0 {
                // launcher: up + heavy
                snap.move_axis.y = 1.0;
                snap.heavy = true;
                snap.light = false;
            } else {
                snap.move_axis.y = 0.0;
                if attack_roll > LIGHT_VS_HEAVY_SPLIT {
                    snap.heavy = true;
                } else {
                    snap.light = true;
                }
            }
            // pressure toward holstering when brawling with the gun out
            if me.gun_drawn {
                self.switch_chance_current *= 4.0;
            }
        }

        snap
    }
}
