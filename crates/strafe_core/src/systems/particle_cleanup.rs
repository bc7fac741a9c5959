//! Particle cleanup pass

use crate::ecs::{ComponentKind, Entity, Mask, Position, World};

const CLEANUP_MASK: Mask = Mask::of(&[ComponentKind::Position, ComponentKind::ParticleLifetime]);

/// Visible bound in normalized device space, per axis.
const SCREEN_BOUND: f32 = 1.0;

/// Reap entities flagged to die once they leave the screen.
///
/// Runs after movement and emission so nothing that drifted out this frame
/// survives into the next render pass.
pub fn particle_cleanup_pass(world: &mut World) {
    for index in 0..world.capacity() {
        let entity = Entity::from_index(index);
        if !world.satisfies(entity, CLEANUP_MASK) {
            continue;
        }
        let reap = match (world.lifetime(entity), world.position(entity)) {
            (Some(lifetime), Some(position)) => {
                lifetime.destroy_when_off_screen && is_off_screen(position)
            }
            _ => false,
        };
        if reap {
            world.despawn(entity);
        }
    }
}

fn is_off_screen(position: &Position) -> bool {
    position.x > SCREEN_BOUND
        || position.x < -SCREEN_BOUND
        || position.y > SCREEN_BOUND
        || position.y < -SCREEN_BOUND
}
