//! Entity blueprints
//!
//! A blueprint collects component values and the mask they imply; the world
//! commits both in one step, so a half-built entity is never observable to a
//! system pass.

use crate::ecs::{
    ComponentKind, Mask, ParticleEmitter, ParticleLifetime, PlayerStats, Position, Scale, Sprite,
    SpriteHandle, Velocity,
};

/// Builder for one entity's components.
///
/// # Example
/// ```ignore
/// let blueprint = EntityBlueprint::new()
///     .with_position(0.0, -0.5)
///     .with_velocity(0.0, 2.0)
///     .with_sprite(sprite)
///     .with_lifetime(true);
/// let entity = world.spawn(blueprint)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityBlueprint {
    pub(crate) mask: Mask,
    pub(crate) position: Position,
    pub(crate) velocity: Velocity,
    pub(crate) scale: Scale,
    pub(crate) sprite: Sprite,
    pub(crate) player: PlayerStats,
    pub(crate) emitter: ParticleEmitter,
    pub(crate) lifetime: ParticleLifetime,
}

impl EntityBlueprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask implied by the components added so far.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self.mask = self.mask.with(ComponentKind::Position);
        self
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Velocity::new(x, y);
        self.mask = self.mask.with(ComponentKind::Velocity);
        self
    }

    pub fn with_scale(mut self, x: f32, y: f32) -> Self {
        self.scale = Scale::new(x, y);
        self.mask = self.mask.with(ComponentKind::Scale);
        self
    }

    pub fn with_sprite(mut self, handle: SpriteHandle) -> Self {
        self.sprite = Sprite { handle };
        self.mask = self.mask.with(ComponentKind::Sprite);
        self
    }

    pub fn with_player(mut self, speed: f32) -> Self {
        self.player = PlayerStats { speed };
        self.mask = self.mask.with(ComponentKind::Player);
        self
    }

    pub fn with_emitter(mut self, emitter: ParticleEmitter) -> Self {
        self.emitter = emitter;
        self.mask = self.mask.with(ComponentKind::ParticleEmitter);
        self
    }

    pub fn with_lifetime(mut self, destroy_when_off_screen: bool) -> Self {
        self.lifetime = ParticleLifetime {
            destroy_when_off_screen,
        };
        self.mask = self.mask.with(ComponentKind::ParticleLifetime);
        self
    }

    /// Tag the entity for collision detection (marker bit, no record).
    pub fn with_collision(mut self) -> Self {
        self.mask = self.mask.with(ComponentKind::Collision);
        self
    }
}
