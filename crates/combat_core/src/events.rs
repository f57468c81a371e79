//! Transient event records exchanged between detection, resolution, and the
//! presentation layer.

use glam::Vec2;

use crate::moves::MoveId;

/// A connected hit discovered during a player's detection phase. Queued at
/// the arena and drained exactly once per global tick; never persisted.
#[derive(Copy, Clone, Debug)]
pub struct HitEvent {
    pub attacker: usize,
    pub victim: usize,
    pub move_id: MoveId,
    /// Launch direction already mirrored by the attacker's facing.
    pub launch: Vec2,
}

/// Health notification for UI consumption, drained per tick via
/// [`crate::arena::Arena::take_health_events`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HealthChanged {
    pub player: usize,
    pub hp: i32,
    pub max: i32,
    pub fatal: bool,
}
