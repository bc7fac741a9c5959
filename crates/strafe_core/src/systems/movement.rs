//! Movement pass

use crate::ecs::{ComponentKind, Entity, Mask, World};
use crate::time::FrameTime;

const MOVEMENT_MASK: Mask = Mask::of(&[ComponentKind::Position, ComponentKind::Velocity]);

/// Advance every {Position, Velocity} entity by one frame of integration.
pub fn movement_pass(world: &mut World, frame: &FrameTime) {
    let dt = frame.delta_secs();
    for index in 0..world.capacity() {
        let entity = Entity::from_index(index);
        if !world.satisfies(entity, MOVEMENT_MASK) {
            continue;
        }
        let Some(velocity) = world.velocity(entity).copied() else {
            continue;
        };
        if let Some(position) = world.position_mut(entity) {
            position.x += velocity.x * dt;
            position.y += velocity.y * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{EntityBlueprint, Position};
    use std::time::Duration;

    #[test]
    fn integrates_velocity_over_delta() {
        let mut world = World::new(4);
        let entity = world
            .spawn(
                EntityBlueprint::new()
                    .with_position(0.0, 0.0)
                    .with_velocity(1.0, 2.0),
            )
            .unwrap();

        let frame = FrameTime::new(Duration::from_millis(500), Duration::from_millis(500));
        movement_pass(&mut world, &frame);

        let position = world.position(entity).unwrap();
        assert!((position.x - 0.5).abs() < 1e-6);
        assert!((position.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ignores_entities_without_velocity() {
        let mut world = World::new(4);
        let anchored = world
            .spawn(EntityBlueprint::new().with_position(0.25, 0.25))
            .unwrap();

        let frame = FrameTime::new(Duration::from_secs(1), Duration::from_secs(1));
        movement_pass(&mut world, &frame);

        assert_eq!(world.position(anchored), Some(&Position::new(0.25, 0.25)));
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut world = World::new(4);
        let entity = world
            .spawn(
                EntityBlueprint::new()
                    .with_position(0.5, -0.5)
                    .with_velocity(3.0, 3.0),
            )
            .unwrap();

        movement_pass(&mut world, &FrameTime::new(Duration::ZERO, Duration::ZERO));
        assert_eq!(world.position(entity), Some(&Position::new(0.5, -0.5)));
    }
}
