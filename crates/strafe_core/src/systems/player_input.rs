//! Player input pass

use crate::ecs::{ComponentKind, Entity, Mask, World};
use crate::input::{Button, ButtonState};

const PLAYER_MASK: Mask = Mask::of(&[
    ComponentKind::Velocity,
    ComponentKind::Player,
    ComponentKind::ParticleEmitter,
]);

/// Drive every player-tagged entity from this frame's input snapshot.
///
/// Velocity is rebuilt from scratch each frame: held directions contribute
/// axis-aligned speed (opposing directions cancel), nothing held is a full
/// stop. The fire button becomes the emitter's fire request.
pub fn player_input_pass(world: &mut World, input: &ButtonState) {
    for index in 0..world.capacity() {
        let entity = Entity::from_index(index);
        if !world.satisfies(entity, PLAYER_MASK) {
            continue;
        }
        let Some(speed) = world.player(entity).map(|stats| stats.speed) else {
            continue;
        };
        if let Some(velocity) = world.velocity_mut(entity) {
            velocity.x = 0.0;
            velocity.y = 0.0;
            if input.is_pressed(Button::Left) {
                velocity.x -= speed;
            }
            if input.is_pressed(Button::Right) {
                velocity.x += speed;
            }
            if input.is_pressed(Button::Up) {
                velocity.y += speed;
            }
            if input.is_pressed(Button::Down) {
                velocity.y -= speed;
            }
        }
        if let Some(emitter) = world.emitter_mut(entity) {
            emitter.fire_requested = input.is_pressed(Button::Fire);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{SpriteHandle, World};

    fn world_with_ship() -> (World, crate::ecs::Entity) {
        let mut world = World::new(8);
        let ship = world
            .spawn_player_ship(SpriteHandle::new(1), SpriteHandle::new(2))
            .unwrap();
        (world, ship)
    }

    #[test]
    fn held_direction_sets_velocity() {
        let (mut world, ship) = world_with_ship();
        player_input_pass(&mut world, &ButtonState::holding(&[Button::Right]));
        let velocity = world.velocity(ship).unwrap();
        assert_eq!((velocity.x, velocity.y), (1.0, 0.0));
    }

    #[test]
    fn opposing_directions_cancel() {
        let (mut world, ship) = world_with_ship();
        player_input_pass(
            &mut world,
            &ButtonState::holding(&[Button::Up, Button::Down]),
        );
        let velocity = world.velocity(ship).unwrap();
        assert_eq!((velocity.x, velocity.y), (0.0, 0.0));
    }

    #[test]
    fn velocity_resets_when_nothing_is_held() {
        let (mut world, ship) = world_with_ship();
        player_input_pass(&mut world, &ButtonState::holding(&[Button::Left]));
        player_input_pass(&mut world, &ButtonState::default());
        let velocity = world.velocity(ship).unwrap();
        assert_eq!((velocity.x, velocity.y), (0.0, 0.0));
    }

    #[test]
    fn fire_button_requests_a_shot() {
        let (mut world, ship) = world_with_ship();
        player_input_pass(&mut world, &ButtonState::holding(&[Button::Fire]));
        assert!(world.emitter(ship).unwrap().fire_requested);

        player_input_pass(&mut world, &ButtonState::default());
        assert!(!world.emitter(ship).unwrap().fire_requested);
    }

    #[test]
    fn non_player_entities_are_untouched() {
        let mut world = World::new(8);
        let drifting = world
            .spawn(
                crate::ecs::EntityBlueprint::new()
                    .with_position(0.0, 0.0)
                    .with_velocity(0.5, 0.5),
            )
            .unwrap();
        player_input_pass(&mut world, &ButtonState::holding(&[Button::Left]));
        let velocity = world.velocity(drifting).unwrap();
        assert_eq!((velocity.x, velocity.y), (0.5, 0.5));
    }
}
