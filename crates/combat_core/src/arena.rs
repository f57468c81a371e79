//! Match controller: owns the players, the stage, and the pending-hit queue.
//!
//! Players update sequentially within a tick, in registration order. Hits
//! found during those updates are queued, never applied inline; the queue is
//! drained exactly once at the end of the tick, before any player's next
//! input sample. That two-phase shape is what keeps simultaneous attacks
//! order-independent: two clean trades land both ways no matter who updated
//! first.

use std::time::Instant;

use glam::Vec2;

use crate::events::{HealthChanged, HitEvent};
use crate::input::InputProvider;
use crate::moves::MoveId;
use crate::player::{Facing, HurtboxTarget, Player};
use crate::stage::Stage;

/// Hard ceiling on a single simulation step; bounds worst-case movement per
/// tick so frame-rate hitches cannot tunnel players through colliders.
pub const MAX_DELTA_TIME: f32 = 0.025;

pub const ARENA_MIN: Vec2 = Vec2::new(-8.0, 0.0);
pub const ARENA_MAX: Vec2 = Vec2::new(8.0, 10.0);
const SPAWN_INSET: f32 = 3.0;

/// Read-only per-player snapshot handed to input providers.
#[derive(Copy, Clone, Debug)]
pub struct PlayerView {
    pub pos: Vec2,
    pub facing: Facing,
    pub gun_drawn: bool,
    pub grounded: bool,
    pub state: MoveId,
    pub health: i32,
    pub dead: bool,
}

/// What an input provider is allowed to see: every player, plus which one it
/// is driving.
pub struct ArenaView<'a> {
    pub index: usize,
    pub players: &'a [PlayerView],
}

impl ArenaView<'_> {
    pub fn me(&self) -> &PlayerView {
        &self.players[self.index]
    }

    /// The other fighter (two-player arena).
    pub fn opponent(&self) -> &PlayerView {
        &self.players[1 - self.index]
    }
}

pub struct Arena {
    pub players: Vec<Player>,
    providers: Vec<Box<dyn InputProvider>>,
    pub stage: Stage,
    pub player_min_position: Vec2,
    pub player_max_position: Vec2,
    pending_hits: Vec<HitEvent>,
    health_events: Vec<HealthChanged>,
}

impl Arena {
    /// Two players on the default rooftop, one provider each.
    pub fn new(p0: Box<dyn InputProvider>, p1: Box<dyn InputProvider>) -> Self {
        let players = vec![
            Player::new(0, spawn_position(0)),
            Player::new(1, spawn_position(1)),
        ];
        Self {
            players,
            providers: vec![p0, p1],
            stage: Stage::rooftop(ARENA_MIN.x, ARENA_MAX.x),
            player_min_position: ARENA_MIN,
            player_max_position: ARENA_MAX,
            pending_hits: Vec::new(),
            health_events: Vec::new(),
        }
    }

    pub fn spawn_position(&self, index: usize) -> Vec2 {
        spawn_position(index)
    }

    /// One global tick. `dt_raw` comes from the host clock and is clamped to
    /// [`MAX_DELTA_TIME`].
    pub fn tick(&mut self, dt_raw: f32) {
        let t0 = Instant::now();
        let dt = dt_raw.min(MAX_DELTA_TIME);

        for i in 0..self.players.len() {
            let views: Vec<PlayerView> = self.players.iter().map(player_view).collect();
            let input = self.providers[i].sample(
                dt,
                &ArenaView {
                    index: i,
                    players: &views,
                },
            );
            let targets: Vec<HurtboxTarget> = self
                .players
                .iter()
                .filter(|p| p.index != i)
                .map(|p| {
                    let (min, max) = p.hurtbox();
                    HurtboxTarget {
                        index: p.index,
                        min,
                        max,
                    }
                })
                .collect();
            let bounds = (self.player_min_position, self.player_max_position);
            self.players[i].update(dt, input, &self.stage, &targets, bounds, &mut self.pending_hits);
        }

        self.resolve_hits();

        metrics::histogram!("arena.tick.ms").record(t0.elapsed().as_secs_f64() * 1000.0);
    }

    /// Queue a hit for resolution at the end of the current tick. Detection
    /// uses this internally; exposed for the match-controller surface.
    pub fn report_hit(&mut self, ev: HitEvent) {
        self.pending_hits.push(ev);
    }

    /// Drain the queue FIFO. All detections for this tick have already run,
    /// so resolution order cannot suppress a simultaneous counter-hit.
    fn resolve_hits(&mut self) {
        if self.pending_hits.is_empty() {
            return;
        }
        let events: Vec<HitEvent> = self.pending_hits.drain(..).collect();
        for ev in events {
            metrics::counter!("arena.hits_total").increment(1);
            if let Some(victim) = self.players.get_mut(ev.victim) {
                victim.receive_hit(&ev, &mut self.health_events);
            }
        }
    }

    /// Health notifications accumulated since the last call (UI feed).
    pub fn take_health_events(&mut self) -> Vec<HealthChanged> {
        std::mem::take(&mut self.health_events)
    }
}

fn spawn_position(index: usize) -> Vec2 {
    let x = if index == 0 { -SPAWN_INSET } else { SPAWN_INSET };
    Vec2::new(x, 0.0)
}

fn player_view(p: &Player) -> PlayerView {
    PlayerView {
        pos: p.pos,
        facing: p.facing,
        gun_drawn: p.gun_drawn,
        grounded: p.grounded,
        state: p.state,
        health: p.health,
        dead: p.dead,
    }
}
