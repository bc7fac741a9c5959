//! Render-transform pass (graphics boundary)

use glam::Mat3;

use crate::ecs::{ComponentKind, Mask, SpriteHandle, World};

const RENDER_MASK: Mask = Mask::of(&[
    ComponentKind::Position,
    ComponentKind::Scale,
    ComponentKind::Sprite,
]);

/// Where the render pass delivers its draws.
///
/// This is the single seam between the simulation and the graphics stack;
/// everything past this call (pipelines, uniforms, submission) belongs to
/// the implementor.
pub trait DrawTarget {
    fn draw(&mut self, transform: Mat3, sprite: SpriteHandle);
}

/// Emit one draw per {Position, Scale, Sprite} entity, in slot order.
///
/// The transform is diagonal scale plus translation; rotation is not part
/// of the sprite model.
pub fn render_pass(world: &World, target: &mut impl DrawTarget) {
    for entity in world.matching(RENDER_MASK) {
        let (Some(position), Some(scale), Some(sprite)) = (
            world.position(entity),
            world.scale(entity),
            world.sprite(entity),
        ) else {
            continue;
        };
        let transform =
            Mat3::from_scale_angle_translation(scale.as_vec2(), 0.0, position.as_vec2());
        target.draw(transform, sprite.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EntityBlueprint;
    use glam::Vec3;

    #[derive(Default)]
    struct RecordingTarget {
        draws: Vec<(Mat3, SpriteHandle)>,
    }

    impl DrawTarget for RecordingTarget {
        fn draw(&mut self, transform: Mat3, sprite: SpriteHandle) {
            self.draws.push((transform, sprite));
        }
    }

    #[test]
    fn transform_encodes_scale_and_translation() {
        let mut world = World::new(4);
        world
            .spawn(
                EntityBlueprint::new()
                    .with_position(0.5, -0.25)
                    .with_scale(2.0, 3.0)
                    .with_sprite(SpriteHandle::new(9)),
            )
            .unwrap();

        let mut target = RecordingTarget::default();
        render_pass(&world, &mut target);

        assert_eq!(target.draws.len(), 1);
        let (transform, sprite) = target.draws[0];
        assert_eq!(sprite, SpriteHandle::new(9));
        assert_eq!(transform.x_axis, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(transform.y_axis, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(transform.z_axis, Vec3::new(0.5, -0.25, 1.0));
    }

    #[test]
    fn entities_without_a_sprite_are_not_drawn() {
        let mut world = World::new(4);
        world
            .spawn(
                EntityBlueprint::new()
                    .with_position(0.0, 0.0)
                    .with_scale(1.0, 1.0),
            )
            .unwrap();

        let mut target = RecordingTarget::default();
        render_pass(&world, &mut target);
        assert!(target.draws.is_empty());
    }

    #[test]
    fn draw_order_follows_slot_order() {
        let mut world = World::new(4);
        for handle in 1..=3u32 {
            world
                .spawn(
                    EntityBlueprint::new()
                        .with_position(0.0, 0.0)
                        .with_scale(1.0, 1.0)
                        .with_sprite(SpriteHandle::new(handle)),
                )
                .unwrap();
        }

        let mut target = RecordingTarget::default();
        render_pass(&world, &mut target);

        let handles: Vec<u32> = target.draws.iter().map(|(_, sprite)| sprite.raw()).collect();
        assert_eq!(handles, vec![1, 2, 3]);
    }
}
