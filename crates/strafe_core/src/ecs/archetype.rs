//! Entity archetypes
//!
//! Factory spawns for the named entity kinds the demos build on. Each
//! factory commits one full blueprint, so the archetype's mask and defaults
//! appear in a single step.

use crate::ecs::{Entity, EntityBlueprint, ParticleEmitter, Position, SpriteHandle, World, WorldError};

// Player ship tuning.
const PLAYER_START: Position = Position::new(0.0, -0.9);
const PLAYER_SCALE: (f32, f32) = (0.05, 0.0525);
const PLAYER_SPEED: f32 = 1.0;
const PLAYER_FIRE_RATE: f32 = 5.0;

// Laser tuning.
const LASER_VELOCITY: (f32, f32) = (0.0, 2.0);
const LASER_SCALE: (f32, f32) = (0.0025, 0.0075);

// Enemy fighter tuning.
const ENEMY_START: Position = Position::new(0.0, 0.9);
const ENEMY_VELOCITY: (f32, f32) = (0.0, -0.25);

impl World {
    /// Spawn the player ship: parked near the bottom edge, steered by the
    /// input pass, firing `laser_sprite` particles on request at most
    /// `PLAYER_FIRE_RATE` per second.
    pub fn spawn_player_ship(
        &mut self,
        sprite: SpriteHandle,
        laser_sprite: SpriteHandle,
    ) -> Result<Entity, WorldError> {
        self.spawn(
            EntityBlueprint::new()
                .with_position(PLAYER_START.x, PLAYER_START.y)
                .with_velocity(0.0, 0.0)
                .with_scale(PLAYER_SCALE.0, PLAYER_SCALE.1)
                .with_sprite(sprite)
                .with_player(PLAYER_SPEED)
                .with_emitter(ParticleEmitter::new(false, PLAYER_FIRE_RATE, laser_sprite)),
        )
    }

    /// Spawn one laser particle at `position`, flying straight up and
    /// reaped once it leaves the screen.
    pub fn spawn_laser(
        &mut self,
        position: Position,
        sprite: SpriteHandle,
    ) -> Result<Entity, WorldError> {
        self.spawn(
            EntityBlueprint::new()
                .with_position(position.x, position.y)
                .with_velocity(LASER_VELOCITY.0, LASER_VELOCITY.1)
                .with_scale(LASER_SCALE.0, LASER_SCALE.1)
                .with_sprite(sprite)
                .with_lifetime(true),
        )
    }

    /// Spawn an enemy fighter drifting down from the top edge. Enemies carry
    /// the collision tag and are reaped once off screen.
    pub fn spawn_enemy(&mut self, sprite: SpriteHandle) -> Result<Entity, WorldError> {
        self.spawn(
            EntityBlueprint::new()
                .with_position(ENEMY_START.x, ENEMY_START.y)
                .with_velocity(ENEMY_VELOCITY.0, ENEMY_VELOCITY.1)
                .with_scale(PLAYER_SCALE.0, PLAYER_SCALE.1)
                .with_sprite(sprite)
                .with_lifetime(true)
                .with_collision(),
        )
    }
}
