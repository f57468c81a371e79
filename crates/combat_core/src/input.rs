//! Input snapshot and the provider seam.
//!
//! The core never talks to devices. Once per tick it asks each player's
//! provider for a snapshot; a missing or idle device is simply the neutral
//! snapshot, never an error.

use glam::Vec2;

use crate::arena::ArenaView;

/// Stick deadzone applied per axis before the snapshot reaches locomotion or
/// the transition ladder.
pub const DEADZONE: f32 = 0.1;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// 2-axis move vector, pre-deadzone. +X is right, +Y is up.
    pub move_axis: Vec2,
    pub jump: bool,
    pub dash: bool,
    pub light: bool,
    pub heavy: bool,
    pub switch_gun: bool,
}

impl InputSnapshot {
    /// Zero out axes inside the deadzone.
    pub fn deadzoned(mut self) -> Self {
        if self.move_axis.x.abs() < DEADZONE {
            self.move_axis.x = 0.0;
        }
        if self.move_axis.y.abs() < DEADZONE {
            self.move_axis.y = 0.0;
        }
        self
    }
}

/// Per-player input source. Human devices, the CPU opponent, and test
/// scripts all enter the simulation through this one seam.
pub trait InputProvider {
    fn sample(&mut self, dt: f32, view: &ArenaView<'_>) -> InputSnapshot;
}

/// Provider for an absent device: always neutral.
#[derive(Default)]
pub struct NeutralInput;

impl InputProvider for NeutralInput {
    fn sample(&mut self, _dt: f32, _view: &ArenaView<'_>) -> InputSnapshot {
        InputSnapshot::default()
    }
}

/// Replays a fixed per-tick snapshot sequence, then holds neutral. Used by
/// the scenario tests and the harness.
pub struct ScriptedInput {
    frames: Vec<InputSnapshot>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputSnapshot>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// A script that holds one snapshot for `ticks` ticks, then goes neutral.
    pub fn held(snapshot: InputSnapshot, ticks: usize) -> Self {
        Self::new(vec![snapshot; ticks])
    }
}

impl InputProvider for ScriptedInput {
    fn sample(&mut self, _dt: f32, _view: &ArenaView<'_>) -> InputSnapshot {
        let snap = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_zeroes_small_axes() {
        let snap = InputSnapshot {
            move_axis: Vec2::new(0.05, -0.09),
            ..Default::default()
        };
        assert_eq!(snap.deadzoned().move_axis, Vec2::ZERO);
    }

    #[test]
    fn deadzone_passes_real_input() {
        let snap = InputSnapshot {
            move_axis: Vec2::new(-0.8, 0.1),
            ..Default::default()
        };
        let out = snap.deadzoned();
        assert_eq!(out.move_axis, Vec2::new(-0.8, 0.1));
    }
}
