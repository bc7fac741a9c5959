//! Entity Component System core types.
//!
//! The world stores every component kind in a dense, fixed-capacity table
//! indexed by entity slot, plus one bitmask per slot recording which tables
//! hold valid data for it. An empty mask marks a free slot, so destruction
//! is a mask clear and allocation is a scan for the first empty mask. All
//! public component access is filtered through that mask, which is what
//! keeps stale table data unreachable.

mod archetype;
mod blueprint;
mod component;
mod entity;
mod world;

pub use blueprint::EntityBlueprint;
pub use component::{
    ComponentKind, Mask, ParticleEmitter, ParticleLifetime, PlayerStats, Position, Scale, Sprite,
    SpriteHandle, Velocity,
};
pub use entity::Entity;
pub use world::{World, WorldError};
