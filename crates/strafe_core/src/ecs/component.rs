//! Component kinds and records
//!
//! Every component is a fixed-layout record stored in a dense table indexed
//! by entity slot. `ComponentKind` is the closed set of kinds and `Mask`
//! packs one validity bit per kind; the raw bit form is the only public wire
//! representation.

use std::time::Duration;

use glam::Vec2;

/// The closed set of component kinds.
///
/// The discriminant is the kind's bit position in a `Mask`, so the numeric
/// values are part of the wire form and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentKind {
    Position = 0,
    Velocity = 1,
    Scale = 2,
    Sprite = 3,
    Player = 4,
    ParticleEmitter = 5,
    ParticleLifetime = 6,
    /// Marker kind: participates in collision detection, carries no record.
    Collision = 7,
}

impl ComponentKind {
    pub const COUNT: usize = 8;

    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::Position,
        ComponentKind::Velocity,
        ComponentKind::Scale,
        ComponentKind::Sprite,
        ComponentKind::Player,
        ComponentKind::ParticleEmitter,
        ComponentKind::ParticleLifetime,
        ComponentKind::Collision,
    ];

    /// This kind's bit within a mask.
    pub const fn bit(self) -> u64 {
        1 << (self as u8)
    }
}

/// Per-entity bitset recording which component kinds are valid.
///
/// An empty mask means the slot is free. Every public component read goes
/// through a mask check first, which is the invariant that makes stale
/// table data unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mask(u64);

impl Mask {
    pub const EMPTY: Mask = Mask(0);

    /// Raw bit form; bit positions follow `ComponentKind` discriminants.
    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn from_bits(bits: u64) -> Mask {
        Mask(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `required` is present.
    pub const fn contains(self, required: Mask) -> bool {
        self.0 & required.0 == required.0
    }

    pub const fn has(self, kind: ComponentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn with(self, kind: ComponentKind) -> Mask {
        Mask(self.0 | kind.bit())
    }

    /// Mask requiring all of `kinds`.
    pub const fn of(kinds: &[ComponentKind]) -> Mask {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Mask(bits)
    }
}

/// Position in origin-centered normalized device space, [-1, 1] per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Per-second rate of change applied to `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Half-extents used to build the render transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Opaque reference to an externally owned texture.
///
/// The world only stores and forwards handles; it never compares or
/// dereferences them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteHandle(u32);

impl SpriteHandle {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Which texture the render pass should draw for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sprite {
    pub handle: SpriteHandle,
}

/// Movement tuning for player-controlled entities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerStats {
    pub speed: f32,
}

/// Rate-limited particle spawning state.
///
/// `last_fire` is a frame-clock timestamp. `None` means the emitter has
/// never fired and is immediately ready.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticleEmitter {
    /// Fire whenever ready, without an explicit request.
    pub continuous: bool,
    pub max_fires_per_second: f32,
    /// Sprite given to each spawned particle.
    pub particle_sprite: SpriteHandle,
    /// Set by the input pass, consumed by the emitter pass.
    pub fire_requested: bool,
    last_fire: Option<Duration>,
}

impl ParticleEmitter {
    pub fn new(continuous: bool, max_fires_per_second: f32, particle_sprite: SpriteHandle) -> Self {
        Self {
            continuous,
            max_fires_per_second,
            particle_sprite,
            fire_requested: false,
            last_fire: None,
        }
    }

    /// True when the per-entity rate limit allows a fire at `now`.
    ///
    /// A non-positive rate never fires. An emitter that has never fired is
    /// ready at once.
    pub fn ready(&self, now: Duration) -> bool {
        if self.max_fires_per_second <= 0.0 {
            return false;
        }
        match self.last_fire {
            None => true,
            Some(last) => {
                now.saturating_sub(last).as_secs_f32() * self.max_fires_per_second >= 1.0
            }
        }
    }

    /// Record a fire at `now`, opening the next rate-limit window.
    pub fn mark_fired(&mut self, now: Duration) {
        self.last_fire = Some(now);
    }

    pub fn last_fire(&self) -> Option<Duration> {
        self.last_fire
    }
}

/// Automatic removal once an entity leaves the visible bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParticleLifetime {
    pub destroy_when_off_screen: bool,
}
