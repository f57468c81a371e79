//! Static move catalog.
//!
//! One entry per animation state the fighter can be in. Frame data, timing
//! windows, hit geometry, damage, and capability flags are authored here and
//! never mutated at runtime; lookup is an exhaustive match, so an unknown
//! move is unrepresentable rather than a runtime error.
//!
//! Hit-cast geometry is authored in the canonical facing-+X frame and
//! mirrored by the attacker's facing at detection time. Frame cells index a
//! 32x32 sprite sheet shared by both fighters.

use glam::Vec2;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveId {
    Idle,
    IdleGun,
    Run,
    RunGun,
    Jump,
    JumpGun,
    Fall,
    FallGun,
    Dash,
    DashGun,
    SwitchGun,
    SwitchGunReverse,
    WallRun,
    WallRunFlip,
    Hit,
    HitGun,
    Die,
    Light1,
    Light2,
    LightRapidJab,
    Heavy1,
    HeavyLauncher,
    JumpKick,
    JumpDiveKick,
    ShootGun,
    ShootGunUp,
    JumpShootGun,
    JumpShootGunUp,
    JumpShootGunDown,
}

/// What the rest of the simulation is allowed to do while this state is
/// active. Set on state entry; the sole "what is allowed right now"
/// mechanism.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub can_move: bool,
    pub can_jump: bool,
    pub can_be_hit: bool,
    pub can_wall_run: bool,
    pub can_transition: bool,
}

/// Movement override for states that bypass default locomotion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementKind {
    /// Default integrator (friction/gravity/horizontal/jump when `can_move`).
    Default,
    /// Straight-line horizontal burst at `DASH_SPEED`.
    Dash,
    /// Vertical climb at the decaying wall-run speed.
    WallRun,
    /// Arc away from the wall at the decaying wall-jump speed.
    WallFlip,
    /// Velocity follows the knockback vector only.
    Knockback,
    /// Velocity pinned to zero.
    Frozen,
}

#[derive(Copy, Clone, Debug)]
pub struct AttackDef {
    pub startup_frame: u32,
    pub active_frame: u32,
    pub recovery_frame: u32,
    /// Cast origins relative to the actor, paired index-wise with
    /// `hit_casts`; the last offset is reused when there are fewer offsets
    /// than casts.
    pub hit_offsets: &'static [Vec2],
    pub hit_casts: &'static [Vec2],
    /// Pre-mirror launch imparted to the victim.
    pub launch: Vec2,
    pub hitstun: f32,
    pub damage: i32,
}

#[derive(Copy, Clone, Debug)]
pub struct MoveDef {
    pub id: MoveId,
    pub from: u32,
    pub to: u32,
    pub frame_ms: f32,
    pub looped: bool,
    pub reverse: bool,
    /// Sprite frame from which a buffered dash may interrupt this state.
    pub can_cancel_after: u32,
    pub caps: Capabilities,
    pub movement: MovementKind,
    pub attack: Option<AttackDef>,
}

const GROUND_CAPS: Capabilities = Capabilities {
    can_move: true,
    can_jump: true,
    can_be_hit: true,
    can_wall_run: false,
    can_transition: true,
};

const AIR_CAPS: Capabilities = Capabilities {
    can_move: true,
    can_jump: false,
    can_be_hit: true,
    can_wall_run: true,
    can_transition: true,
};

const ATTACK_CAPS: Capabilities = Capabilities {
    can_move: false,
    can_jump: false,
    can_be_hit: true,
    can_wall_run: false,
    can_transition: false,
};

// Dash is invulnerable for its duration.
const DASH_CAPS: Capabilities = Capabilities {
    can_move: false,
    can_jump: false,
    can_be_hit: false,
    can_wall_run: false,
    can_transition: false,
};

const SWITCH_CAPS: Capabilities = Capabilities {
    can_move: false,
    can_jump: false,
    can_be_hit: true,
    can_wall_run: false,
    can_transition: false,
};

const WALL_CAPS: Capabilities = Capabilities {
    can_move: false,
    can_jump: false,
    can_be_hit: true,
    can_wall_run: true,
    can_transition: false,
};

const STUN_CAPS: Capabilities = Capabilities {
    can_move: false,
    can_jump: false,
    can_be_hit: false,
    can_wall_run: false,
    can_transition: false,
};

const fn locomotion(
    id: MoveId,
    from: u32,
    to: u32,
    frame_ms: f32,
    looped: bool,
    caps: Capabilities,
    movement: MovementKind,
) -> MoveDef {
    MoveDef {
        id,
        from,
        to,
        frame_ms,
        looped,
        reverse: false,
        can_cancel_after: from,
        caps,
        movement,
        attack: None,
    }
}

#[allow(clippy::too_many_arguments)]
const fn attack(
    id: MoveId,
    from: u32,
    to: u32,
    can_cancel_after: u32,
    startup_frame: u32,
    active_frame: u32,
    recovery_frame: u32,
    damage: i32,
    hitstun: f32,
    launch: Vec2,
    hit_offsets: &'static [Vec2],
    hit_casts: &'static [Vec2],
) -> MoveDef {
    MoveDef {
        id,
        from,
        to,
        frame_ms: 50.0,
        looped: false,
        reverse: false,
        can_cancel_after,
        caps: ATTACK_CAPS,
        movement: MovementKind::Default,
        attack: Some(AttackDef {
            startup_frame,
            active_frame,
            recovery_frame,
            hit_offsets,
            hit_casts,
            launch,
            hitstun,
            damage,
        }),
    }
}

/// The draw/holster animation, played forward to draw and in reverse to put
/// the gun away.
const fn holster(id: MoveId, reverse: bool) -> MoveDef {
    MoveDef {
        id,
        from: 158,
        to: 164,
        frame_ms: 100.0,
        looped: false,
        reverse,
        can_cancel_after: 158,
        caps: SWITCH_CAPS,
        movement: MovementKind::Frozen,
        attack: None,
    }
}

static ORIGIN: [Vec2; 1] = [Vec2::ZERO];
static CHEST: [Vec2; 1] = [Vec2::new(0.0, 0.53)];
static HIGH: [Vec2; 1] = [Vec2::new(0.0, 0.5)];

static JAB_CAST: [Vec2; 1] = [Vec2::new(0.64, 0.0)];
static UPPER_CAST: [Vec2; 1] = [Vec2::new(0.64, 0.72)];
static HEAVY_CAST: [Vec2; 1] = [Vec2::new(0.82, 0.0)];
static LAUNCHER_CAST: [Vec2; 1] = [Vec2::new(0.7, 0.4)];
static KICK_CAST: [Vec2; 1] = [Vec2::new(0.70, 0.0)];
static DIVE_CAST: [Vec2; 1] = [Vec2::new(0.64, -0.72)];
static SHOT_CAST: [Vec2; 1] = [Vec2::new(100.0, 0.0)];
static SHOT_UP_CAST: [Vec2; 1] = [Vec2::new(70.7, 70.7)];
static SHOT_DOWN_CAST: [Vec2; 1] = [Vec2::new(70.7, -70.7)];

static IDLE: MoveDef = locomotion(MoveId::Idle, 0, 17, 100.0, true, GROUND_CAPS, MovementKind::Default);
static IDLE_GUN: MoveDef =
    locomotion(MoveId::IdleGun, 88, 105, 100.0, true, GROUND_CAPS, MovementKind::Default);
static RUN: MoveDef = locomotion(MoveId::Run, 18, 27, 100.0, true, GROUND_CAPS, MovementKind::Default);
static RUN_GUN: MoveDef =
    locomotion(MoveId::RunGun, 106, 115, 100.0, true, GROUND_CAPS, MovementKind::Default);
static JUMP: MoveDef = locomotion(MoveId::Jump, 29, 36, 100.0, false, AIR_CAPS, MovementKind::Default);
static JUMP_GUN: MoveDef =
    locomotion(MoveId::JumpGun, 117, 124, 100.0, false, AIR_CAPS, MovementKind::Default);
static FALL: MoveDef = locomotion(MoveId::Fall, 36, 48, 100.0, false, AIR_CAPS, MovementKind::Default);
static FALL_GUN: MoveDef =
    locomotion(MoveId::FallGun, 124, 136, 100.0, false, AIR_CAPS, MovementKind::Default);
static DASH: MoveDef = locomotion(MoveId::Dash, 55, 61, 50.0, false, DASH_CAPS, MovementKind::Dash);
static DASH_GUN: MoveDef =
    locomotion(MoveId::DashGun, 142, 148, 50.0, false, DASH_CAPS, MovementKind::Dash);
static SWITCH_GUN: MoveDef = holster(MoveId::SwitchGun, false);
static SWITCH_GUN_REVERSE: MoveDef = holster(MoveId::SwitchGunReverse, true);
static WALL_RUN: MoveDef =
    locomotion(MoveId::WallRun, 18, 27, 50.0, true, WALL_CAPS, MovementKind::WallRun);
static WALL_RUN_FLIP: MoveDef =
    locomotion(MoveId::WallRunFlip, 51, 54, 50.0, false, WALL_CAPS, MovementKind::WallFlip);
static HIT: MoveDef = locomotion(MoveId::Hit, 87, 87, 50.0, false, STUN_CAPS, MovementKind::Knockback);
static HIT_GUN: MoveDef =
    locomotion(MoveId::HitGun, 157, 157, 50.0, false, STUN_CAPS, MovementKind::Knockback);
static DIE: MoveDef = locomotion(MoveId::Die, 87, 87, 50.0, false, STUN_CAPS, MovementKind::Knockback);

static LIGHT1: MoveDef = attack(
    MoveId::Light1,
    62,
    65,
    64,
    62,
    63,
    64,
    5,
    0.1,
    Vec2::new(0.1, 0.0),
    &CHEST,
    &JAB_CAST,
);
static LIGHT2: MoveDef = attack(
    MoveId::Light2,
    66,
    70,
    68,
    66,
    67,
    68,
    5,
    0.1,
    Vec2::new(0.1, 0.0),
    &CHEST,
    &JAB_CAST,
);
static LIGHT_RAPID_JAB: MoveDef = attack(
    MoveId::LightRapidJab,
    71,
    76,
    71,
    71,
    73,
    75,
    10,
    0.25,
    Vec2::new(1.0, 10.0),
    &ORIGIN,
    &UPPER_CAST,
);
static HEAVY1: MoveDef = attack(
    MoveId::Heavy1,
    77,
    86,
    84,
    77,
    83,
    84,
    25,
    0.5,
    Vec2::new(10.0, 5.0),
    &ORIGIN,
    &HEAVY_CAST,
);
static HEAVY_LAUNCHER: MoveDef = attack(
    MoveId::HeavyLauncher,
    77,
    86,
    84,
    78,
    82,
    84,
    15,
    0.5,
    Vec2::new(1.0, 12.0),
    &ORIGIN,
    &LAUNCHER_CAST,
);
static JUMP_KICK: MoveDef = attack(
    MoveId::JumpKick,
    49,
    50,
    49,
    49,
    49,
    50,
    10,
    0.3,
    Vec2::new(10.0, 2.5),
    &ORIGIN,
    &KICK_CAST,
);
static JUMP_DIVE_KICK: MoveDef = attack(
    MoveId::JumpDiveKick,
    50,
    51,
    50,
    50,
    50,
    51,
    20,
    0.3,
    Vec2::new(10.0, -20.0),
    &HIGH,
    &DIVE_CAST,
);
static SHOOT_GUN: MoveDef = attack(
    MoveId::ShootGun,
    149,
    152,
    151,
    149,
    150,
    151,
    15,
    0.3,
    Vec2::new(20.0, 10.0),
    &CHEST,
    &SHOT_CAST,
);
static SHOOT_GUN_UP: MoveDef = attack(
    MoveId::ShootGunUp,
    149,
    152,
    151,
    149,
    150,
    151,
    15,
    0.3,
    Vec2::new(10.0, 20.0),
    &CHEST,
    &SHOT_UP_CAST,
);
static JUMP_SHOOT_GUN: MoveDef = attack(
    MoveId::JumpShootGun,
    153,
    156,
    155,
    153,
    154,
    155,
    15,
    0.3,
    Vec2::new(20.0, 10.0),
    &CHEST,
    &SHOT_CAST,
);
static JUMP_SHOOT_GUN_UP: MoveDef = attack(
    MoveId::JumpShootGunUp,
    153,
    156,
    155,
    153,
    154,
    155,
    15,
    0.3,
    Vec2::new(10.0, 20.0),
    &CHEST,
    &SHOT_UP_CAST,
);
static JUMP_SHOOT_GUN_DOWN: MoveDef = attack(
    MoveId::JumpShootGunDown,
    153,
    156,
    155,
    153,
    154,
    155,
    15,
    0.3,
    Vec2::new(10.0, -20.0),
    &CHEST,
    &SHOT_DOWN_CAST,
);

impl MoveId {
    pub const ALL: [MoveId; 29] = [
        MoveId::Idle,
        MoveId::IdleGun,
        MoveId::Run,
        MoveId::RunGun,
        MoveId::Jump,
        MoveId::JumpGun,
        MoveId::Fall,
        MoveId::FallGun,
        MoveId::Dash,
        MoveId::DashGun,
        MoveId::SwitchGun,
        MoveId::SwitchGunReverse,
        MoveId::WallRun,
        MoveId::WallRunFlip,
        MoveId::Hit,
        MoveId::HitGun,
        MoveId::Die,
        MoveId::Light1,
        MoveId::Light2,
        MoveId::LightRapidJab,
        MoveId::Heavy1,
        MoveId::HeavyLauncher,
        MoveId::JumpKick,
        MoveId::JumpDiveKick,
        MoveId::ShootGun,
        MoveId::ShootGunUp,
        MoveId::JumpShootGun,
        MoveId::JumpShootGunUp,
        MoveId::JumpShootGunDown,
    ];

    pub fn def(self) -> &'static MoveDef {
        match self {
            MoveId::Idle => &IDLE,
            MoveId::IdleGun => &IDLE_GUN,
            MoveId::Run => &RUN,
            MoveId::RunGun => &RUN_GUN,
            MoveId::Jump => &JUMP,
            MoveId::JumpGun => &JUMP_GUN,
            MoveId::Fall => &FALL,
            MoveId::FallGun => &FALL_GUN,
            MoveId::Dash => &DASH,
            MoveId::DashGun => &DASH_GUN,
            MoveId::SwitchGun => &SWITCH_GUN,
            MoveId::SwitchGunReverse => &SWITCH_GUN_REVERSE,
            MoveId::WallRun => &WALL_RUN,
            MoveId::WallRunFlip => &WALL_RUN_FLIP,
            MoveId::Hit => &HIT,
            MoveId::HitGun => &HIT_GUN,
            MoveId::Die => &DIE,
            MoveId::Light1 => &LIGHT1,
            MoveId::Light2 => &LIGHT2,
            MoveId::LightRapidJab => &LIGHT_RAPID_JAB,
            MoveId::Heavy1 => &HEAVY1,
            MoveId::HeavyLauncher => &HEAVY_LAUNCHER,
            MoveId::JumpKick => &JUMP_KICK,
            MoveId::JumpDiveKick => &JUMP_DIVE_KICK,
            MoveId::ShootGun => &SHOOT_GUN,
            MoveId::ShootGunUp => &SHOOT_GUN_UP,
            MoveId::JumpShootGun => &JUMP_SHOOT_GUN,
            MoveId::JumpShootGunUp => &JUMP_SHOOT_GUN_UP,
            MoveId::JumpShootGunDown => &JUMP_SHOOT_GUN_DOWN,
        }
    }

    #[inline]
    pub fn is_attack(self) -> bool {
        self.def().attack.is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            MoveId::Idle => "idle",
            MoveId::IdleGun => "idle-gun",
            MoveId::Run => "run",
            MoveId::RunGun => "run-gun",
            MoveId::Jump => "jump",
            MoveId::JumpGun => "jump-gun",
            MoveId::Fall => "fall",
            MoveId::FallGun => "fall-gun",
            MoveId::Dash => "dash",
            MoveId::DashGun => "dash-gun",
            MoveId::SwitchGun => "switch-gun",
            MoveId::SwitchGunReverse => "switch-gun-reverse",
            MoveId::WallRun => "wall-run",
            MoveId::WallRunFlip => "wall-run-flip",
            MoveId::Hit => "hit",
            MoveId::HitGun => "hit-gun",
            MoveId::Die => "die",
            MoveId::Light1 => "light1",
            MoveId::Light2 => "light2",
            MoveId::LightRapidJab => "light-rapid-jab",
            MoveId::Heavy1 => "heavy1",
            MoveId::HeavyLauncher => "heavy-launcher",
            MoveId::JumpKick => "jump-kick",
            MoveId::JumpDiveKick => "jump-dive-kick",
            MoveId::ShootGun => "shoot-gun",
            MoveId::ShootGunUp => "shoot-gun-up",
            MoveId::JumpShootGun => "jump-shoot-gun",
            MoveId::JumpShootGunUp => "jump-shoot-gun-up",
            MoveId::JumpShootGunDown => "jump-shoot-gun-down",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0:?}: empty frame range")]
    BadFrameRange(MoveId),
    #[error("{id:?}: active window out of order (startup {startup}, active {active}, recovery {recovery}, to {to})")]
    WindowOutOfOrder {
        id: MoveId,
        startup: u32,
        active: u32,
        recovery: u32,
        to: u32,
    },
    #[error("{0:?}: attack defines no hit casts")]
    NoHitCasts(MoveId),
}

/// Check the catalog invariants. Lookup itself cannot fail; a violation here
/// is a programming error surfaced by tests and at harness startup.
pub fn validate() -> Result<(), CatalogError> {
    for id in MoveId::ALL {
        let def = id.def();
        if def.from > def.to {
            return Err(CatalogError::BadFrameRange(id));
        }
        if let Some(atk) = &def.attack {
            if !(atk.startup_frame <= atk.active_frame
                && atk.active_frame < atk.recovery_frame
                && atk.recovery_frame <= def.to)
            {
                return Err(CatalogError::WindowOutOfOrder {
                    id,
                    startup: atk.startup_frame,
                    active: atk.active_frame,
                    recovery: atk.recovery_frame,
                    to: def.to,
                });
            }
            if atk.hit_casts.is_empty() || atk.hit_offsets.is_empty() {
                return Err(CatalogError::NoHitCasts(id));
            }
        }
    }
    Ok(())
}
