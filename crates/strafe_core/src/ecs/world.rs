// world.rs - mask-table world: entity slots, dense component tables, queries

use thiserror::Error;

use crate::ecs::{
    ComponentKind, Entity, EntityBlueprint, Mask, ParticleEmitter, ParticleLifetime, PlayerStats,
    Position, Scale, Sprite, Velocity,
};

/// Errors surfaced by entity construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// Every slot's mask is non-empty; nothing was written.
    #[error("world is full ({capacity} entity slots)")]
    Full { capacity: usize },
    /// A component-less entity would be indistinguishable from a free slot.
    #[error("entity blueprint has no components")]
    EmptyBlueprint,
}

macro_rules! component_accessors {
    ($label:literal, $kind:ident, $table:ident, $ty:ty, $get:ident, $get_mut:ident) => {
        #[doc = concat!("The ", $label, " of `entity`, when its mask carries the bit.")]
        pub fn $get(&self, entity: Entity) -> Option<&$ty> {
            if self.has(entity, ComponentKind::$kind) {
                Some(&self.$table[entity.index()])
            } else {
                None
            }
        }

        #[doc = concat!("Write access to the ", $label, " of `entity`.")]
        pub fn $get_mut(&mut self, entity: Entity) -> Option<&mut $ty> {
            if self.has(entity, ComponentKind::$kind) {
                Some(&mut self.$table[entity.index()])
            } else {
                None
            }
        }
    };
}

/// The entity/component store.
///
/// All tables are allocated once at construction and indexed by entity slot.
/// A slot's mask records which tables hold valid data for it; an empty mask
/// means the slot is free. Destruction clears the mask only, leaving stale
/// values behind in the tables. Every public read is mask-checked, which
/// keeps them unreachable.
pub struct World {
    masks: Box<[Mask]>,
    positions: Box<[Position]>,
    velocities: Box<[Velocity]>,
    scales: Box<[Scale]>,
    sprites: Box<[Sprite]>,
    players: Box<[PlayerStats]>,
    emitters: Box<[ParticleEmitter]>,
    lifetimes: Box<[ParticleLifetime]>,
    live: usize,
}

impl World {
    /// Create a world with `capacity` entity slots, allocated up front.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or exceeds `u32::MAX`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "world capacity must be non-zero");
        assert!(
            capacity <= u32::MAX as usize,
            "world capacity cannot exceed u32::MAX"
        );
        Self {
            masks: vec![Mask::EMPTY; capacity].into_boxed_slice(),
            positions: vec![Position::default(); capacity].into_boxed_slice(),
            velocities: vec![Velocity::default(); capacity].into_boxed_slice(),
            scales: vec![Scale::default(); capacity].into_boxed_slice(),
            sprites: vec![Sprite::default(); capacity].into_boxed_slice(),
            players: vec![PlayerStats::default(); capacity].into_boxed_slice(),
            emitters: vec![ParticleEmitter::default(); capacity].into_boxed_slice(),
            lifetimes: vec![ParticleLifetime::default(); capacity].into_boxed_slice(),
            live: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.masks.len()
    }

    /// Number of slots with a non-empty mask.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Mask currently stored for `entity`, `None` when out of range.
    pub fn mask_of(&self, entity: Entity) -> Option<Mask> {
        self.masks.get(entity.index()).copied()
    }

    /// True iff every bit of `mask` is set for `entity`.
    ///
    /// Out-of-range entities satisfy nothing (except, vacuously, the empty
    /// mask on in-range slots).
    pub fn satisfies(&self, entity: Entity, mask: Mask) -> bool {
        match self.masks.get(entity.index()) {
            Some(stored) => stored.contains(mask),
            None => false,
        }
    }

    /// Entities whose mask satisfies `mask`, in slot order.
    ///
    /// Free slots never match, even against the empty mask.
    pub fn matching(&self, mask: Mask) -> impl Iterator<Item = Entity> + '_ {
        self.masks
            .iter()
            .enumerate()
            .filter(move |(_, stored)| !stored.is_empty() && stored.contains(mask))
            .map(|(index, _)| Entity::from_index(index))
    }

    /// Spawn the entity assembled by `blueprint`.
    ///
    /// The first free slot in index order is used. Component data lands in
    /// the tables before the mask is published, so partial construction is
    /// never observable. On a full world nothing is written.
    pub fn spawn(&mut self, blueprint: EntityBlueprint) -> Result<Entity, WorldError> {
        let mask = blueprint.mask();
        if mask.is_empty() {
            return Err(WorldError::EmptyBlueprint);
        }
        let entity = self.find_free()?;
        let index = entity.index();
        if mask.has(ComponentKind::Position) {
            self.positions[index] = blueprint.position;
        }
        if mask.has(ComponentKind::Velocity) {
            self.velocities[index] = blueprint.velocity;
        }
        if mask.has(ComponentKind::Scale) {
            self.scales[index] = blueprint.scale;
        }
        if mask.has(ComponentKind::Sprite) {
            self.sprites[index] = blueprint.sprite;
        }
        if mask.has(ComponentKind::Player) {
            self.players[index] = blueprint.player;
        }
        if mask.has(ComponentKind::ParticleEmitter) {
            self.emitters[index] = blueprint.emitter;
        }
        if mask.has(ComponentKind::ParticleLifetime) {
            self.lifetimes[index] = blueprint.lifetime;
        }
        self.masks[index] = mask;
        self.live += 1;
        Ok(entity)
    }

    /// Destroy `entity` by clearing its mask.
    ///
    /// Idempotent: a free or out-of-range slot returns false. Table data is
    /// left behind and overwritten on the slot's next use.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        match self.masks.get_mut(entity.index()) {
            Some(mask) if !mask.is_empty() => {
                *mask = Mask::EMPTY;
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    component_accessors!("position", Position, positions, Position, position, position_mut);
    component_accessors!("velocity", Velocity, velocities, Velocity, velocity, velocity_mut);
    component_accessors!("scale", Scale, scales, Scale, scale, scale_mut);
    component_accessors!("sprite", Sprite, sprites, Sprite, sprite, sprite_mut);
    component_accessors!("player stats", Player, players, PlayerStats, player, player_mut);
    component_accessors!(
        "particle emitter",
        ParticleEmitter,
        emitters,
        ParticleEmitter,
        emitter,
        emitter_mut
    );
    component_accessors!(
        "particle lifetime",
        ParticleLifetime,
        lifetimes,
        ParticleLifetime,
        lifetime,
        lifetime_mut
    );

    fn has(&self, entity: Entity, kind: ComponentKind) -> bool {
        matches!(self.masks.get(entity.index()), Some(mask) if mask.has(kind))
    }

    fn find_free(&self) -> Result<Entity, WorldError> {
        match self.masks.iter().position(|mask| mask.is_empty()) {
            Some(index) => Ok(Entity::from_index(index)),
            None => Err(WorldError::Full {
                capacity: self.capacity(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(x: f32, y: f32) -> EntityBlueprint {
        EntityBlueprint::new()
            .with_position(x, y)
            .with_velocity(0.0, 0.0)
    }

    #[test]
    fn new_world_is_empty() {
        let world = World::new(16);
        assert_eq!(world.capacity(), 16);
        assert_eq!(world.live_count(), 0);
        assert_eq!(world.matching(Mask::EMPTY).count(), 0);
    }

    #[test]
    fn spawn_uses_first_free_slot() {
        let mut world = World::new(4);
        let first = world.spawn(mover(0.0, 0.0)).unwrap();
        let second = world.spawn(mover(0.0, 0.0)).unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);

        assert!(world.despawn(first));
        let recycled = world.spawn(mover(0.0, 0.0)).unwrap();
        assert_eq!(recycled.index(), 0);
        assert_eq!(world.live_count(), 2);
    }

    #[test]
    fn satisfies_is_subset_of_stored_mask() {
        let mut world = World::new(4);
        let entity = world
            .spawn(
                EntityBlueprint::new()
                    .with_position(0.0, 0.0)
                    .with_sprite(crate::ecs::SpriteHandle::new(3))
                    .with_collision(),
            )
            .unwrap();

        assert!(world.satisfies(entity, Mask::of(&[ComponentKind::Position])));
        assert!(world.satisfies(
            entity,
            Mask::of(&[ComponentKind::Position, ComponentKind::Collision])
        ));
        assert!(!world.satisfies(entity, Mask::of(&[ComponentKind::Velocity])));
        assert!(world.satisfies(entity, Mask::EMPTY));
    }

    #[test]
    fn despawn_is_idempotent() {
        let mut world = World::new(2);
        let entity = world.spawn(mover(1.0, 1.0)).unwrap();
        assert!(world.despawn(entity));
        assert!(!world.despawn(entity));
        assert_eq!(world.mask_of(entity), Some(Mask::EMPTY));
        assert_eq!(world.live_count(), 0);
    }

    #[test]
    fn out_of_range_entity_is_rejected_everywhere() {
        let mut world = World::new(2);
        let bogus = Entity::from_index(99);
        assert!(!world.satisfies(bogus, Mask::EMPTY));
        assert!(!world.despawn(bogus));
        assert_eq!(world.mask_of(bogus), None);
        assert_eq!(world.position(bogus), None);
    }

    #[test]
    fn component_reads_are_mask_checked() {
        let mut world = World::new(2);
        let entity = world.spawn(mover(2.0, 3.0)).unwrap();
        assert_eq!(world.position(entity), Some(&Position::new(2.0, 3.0)));
        // No sprite bit, so the sprite table is unreachable for this slot.
        assert_eq!(world.sprite(entity), None);

        world.despawn(entity);
        // Stale table data still exists but can no longer be read.
        assert_eq!(world.position(entity), None);
    }

    #[test]
    fn empty_blueprint_is_rejected() {
        let mut world = World::new(2);
        assert_eq!(
            world.spawn(EntityBlueprint::new()),
            Err(WorldError::EmptyBlueprint)
        );
        assert_eq!(world.live_count(), 0);
    }

    #[test]
    fn full_world_fails_without_overwriting() {
        let mut world = World::new(2);
        let a = world.spawn(mover(1.0, 1.0)).unwrap();
        let b = world.spawn(mover(2.0, 2.0)).unwrap();

        assert_eq!(
            world.spawn(mover(9.0, 9.0)),
            Err(WorldError::Full { capacity: 2 })
        );
        // Neither existing entity was touched.
        assert_eq!(world.position(a), Some(&Position::new(1.0, 1.0)));
        assert_eq!(world.position(b), Some(&Position::new(2.0, 2.0)));
        assert_eq!(world.live_count(), 2);
    }

    #[test]
    fn matching_skips_free_slots() {
        let mut world = World::new(4);
        let a = world.spawn(mover(0.0, 0.0)).unwrap();
        let b = world.spawn(mover(0.0, 0.0)).unwrap();
        world.despawn(a);

        let matched: Vec<Entity> = world
            .matching(Mask::of(&[ComponentKind::Position]))
            .collect();
        assert_eq!(matched, vec![b]);
    }

    #[test]
    fn mutable_access_updates_in_place() {
        let mut world = World::new(2);
        let entity = world.spawn(mover(0.0, 0.0)).unwrap();
        if let Some(velocity) = world.velocity_mut(entity) {
            velocity.x = 4.0;
        }
        assert_eq!(world.velocity(entity), Some(&Velocity::new(4.0, 0.0)));
    }
}
