//! Strafe runtime
//!
//! Headless sandbox: boots a world from settings, replays a scripted flight
//! for ten seconds of fixed 16ms frames, and reports what the simulation
//! did. The windowed demo lives in examples/space_fight.rs.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use strafe_core::ecs::{ComponentKind, Mask, World};
use strafe_core::input::Button;
use strafe_core::math::DeterministicRng;
use strafe_core::systems::Schedule;
use strafe_core::time::FrameTime;
use strafe_metrics::FrameTimer;
use strafe_render::{DrawList, SpriteLibrary, SpritePixels};
use strafe_services::{InputScript, ResourceBank, Settings};

const FRAME_STEP: Duration = Duration::from_millis(16);
const FRAMES: u32 = 600;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Strafe v{}", strafe_core::VERSION);
    let settings = Settings::load_or_default("strafe.settings.json");

    let mut sprites = SpriteLibrary::new();
    let ship_sprite = sprites.insert(SpritePixels::solid(8, 8, [64, 220, 255, 255]));
    let laser_sprite = sprites.insert(SpritePixels::solid(1, 4, [255, 64, 64, 255]));
    let enemy_sprite = sprites.insert(SpritePixels::checker(
        8,
        8,
        2,
        [200, 80, 255, 255],
        [40, 40, 64, 255],
    ));

    let mut world = World::new(settings.simulation.max_entities);
    world.spawn_player_ship(ship_sprite, laser_sprite)?;

    let mut rng = DeterministicRng::new(settings.simulation.rng_seed);
    for _ in 0..settings.simulation.enemy_count {
        let enemy = world.spawn_enemy(enemy_sprite)?;
        if let Some(position) = world.position_mut(enemy) {
            position.x = rng.range_f32(-0.8, 0.8);
        }
    }
    tracing::info!(
        live = world.live_count(),
        capacity = world.capacity(),
        "world populated"
    );

    let bank = Arc::new(ResourceBank::new(settings.resources.starting_gold));
    let accrual = bank.start_accrual(
        settings.resources.accrual_amount,
        Duration::from_millis(settings.resources.accrual_interval_ms),
    )?;

    // Strafe right, open fire mid-run, swing back left, then right again.
    let script = InputScript::new()
        .hold(0..180, &[Button::Right])
        .hold(60..420, &[Button::Fire])
        .hold(180..420, &[Button::Left])
        .hold(420..FRAMES as usize, &[Button::Right]);

    let mut schedule = Schedule::new();
    let mut draw_list = DrawList::new();
    let mut frame_timer = FrameTimer::new(240);
    let mut contacts = 0usize;

    for index in 0..FRAMES {
        frame_timer.begin();
        let frame = FrameTime::new(FRAME_STEP * (index + 1), FRAME_STEP);
        let input = script.frame(index as usize);

        let pairs = schedule.simulate(&mut world, &frame, &input);
        if !pairs.is_empty() {
            contacts += pairs.len();
            tracing::debug!(frame = index, pairs = pairs.len(), "contact");
        }

        draw_list.clear();
        schedule.draw(&world, &mut draw_list);
        frame_timer.end();
    }

    accrual.stop();

    let fighters = world
        .matching(Mask::of(&[ComponentKind::Collision]))
        .count();
    tracing::info!(
        frames = FRAMES,
        live = world.live_count(),
        fighters,
        contacts,
        draws = draw_list.len(),
        gold = bank.gold(),
        "sandbox complete"
    );
    tracing::info!(
        average_ms = frame_timer.average_ms(),
        fps = frame_timer.fps() as u32,
        "frame timing"
    );
    for (pass, average) in schedule.pass_timings() {
        tracing::info!(pass, average_us = average.as_micros() as u64, "pass timing");
    }

    Ok(())
}
