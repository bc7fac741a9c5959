//! Particle emitter pass

use crate::ecs::{ComponentKind, Entity, Mask, World, WorldError};
use crate::time::FrameTime;

const EMITTER_MASK: Mask = Mask::of(&[ComponentKind::Position, ComponentKind::ParticleEmitter]);

/// Fire every ready emitter once.
///
/// An emitter fires when it is continuous or was asked to fire this frame
/// and its rate-limit window has elapsed. At most one particle per emitter
/// per pass; windows missed beyond the first are discarded, never
/// back-filled. A full world skips the shot and leaves the window open so
/// the emitter retries next frame.
pub fn particle_emitter_pass(world: &mut World, frame: &FrameTime) {
    for index in 0..world.capacity() {
        let entity = Entity::from_index(index);
        if !world.satisfies(entity, EMITTER_MASK) {
            continue;
        }
        let Some((fires, sprite)) = world.emitter(entity).map(|emitter| {
            (
                (emitter.continuous || emitter.fire_requested) && emitter.ready(frame.now),
                emitter.particle_sprite,
            )
        }) else {
            continue;
        };
        if !fires {
            continue;
        }
        let Some(position) = world.position(entity).copied() else {
            continue;
        };
        match world.spawn_laser(position, sprite) {
            Ok(_) => {
                if let Some(emitter) = world.emitter_mut(entity) {
                    emitter.mark_fired(frame.now);
                }
            }
            Err(WorldError::Full { capacity }) => {
                tracing::warn!(capacity, "particle spawn skipped, world is full");
            }
            Err(error) => {
                tracing::warn!(%error, "particle spawn skipped");
            }
        }
    }
}
