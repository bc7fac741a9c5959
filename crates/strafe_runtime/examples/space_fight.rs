// Space fight demo
//
// A keyboard-flown ship at the bottom of the screen, waves of enemy
// fighters drifting down from the top, lasers on Space. WASD strafes the
// ship. Reinforcements are bought from the gold bank as earlier waves
// leave the screen, so the pressure is paced by accrual.
//
// Rendering is deliberately simple: every sprite collapses to its average
// color and is drawn as a flat-colored quad at the entity's transform.

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use strafe_core::ecs::{ComponentKind, Entity, Mask, SpriteHandle, World};
use strafe_core::input::ButtonState;
use strafe_core::math::{vec2, DeterministicRng};
use strafe_core::systems::Schedule;
use strafe_core::time::FrameClock;
use strafe_render::{
    create_event_loop, window_attributes, DrawList, SpriteAnimation, SpriteLibrary, SpritePixels,
    WindowConfig,
};
use strafe_services::{AccrualHandle, KeyBindings, ResourceBank, Settings};

const ENEMY_COST: i64 = 10;
const MAX_QUADS: usize = 256;

// ============================================================================
// Renderer
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 3],
}

/// Average color of a sprite's pixels; the whole quad is painted with it.
fn sprite_color(pixels: &SpritePixels) -> [f32; 3] {
    let data = pixels.data();
    let count = (data.len() / 4).max(1) as f32;
    let mut sum = [0.0f32; 3];
    for pixel in data.chunks_exact(4) {
        sum[0] += pixel[0] as f32;
        sum[1] += pixel[1] as f32;
        sum[2] += pixel[2] as f32;
    }
    [
        sum[0] / count / 255.0,
        sum[1] / count / 255.0,
        sum[2] / count / 255.0,
    ]
}

struct QuadRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    #[allow(dead_code)] // Stored for potential future use
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
}

impl QuadRenderer {
    async fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone()).unwrap();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap();

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .unwrap();

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats[0];

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/sprite.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        // Two triangles per quad, updated every frame.
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: (std::mem::size_of::<Vertex>() * 6 * MAX_QUADS) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
        }
    }

    fn render(
        &mut self,
        draw_list: &DrawList,
        palette: &[[f32; 3]],
    ) -> Result<(), wgpu::SurfaceError> {
        let mut vertices = Vec::new();

        for command in draw_list.commands().iter().take(MAX_QUADS) {
            let color = palette
                .get(command.sprite.raw() as usize)
                .copied()
                .unwrap_or([1.0, 1.0, 1.0]);
            // Unit quad corners through the entity's world transform.
            for corner in [
                [-0.5, -0.5],
                [0.5, -0.5],
                [0.5, 0.5],
                [-0.5, -0.5],
                [0.5, 0.5],
                [-0.5, 0.5],
            ] {
                let point = command.transform.transform_point2(vec2(corner[0], corner[1]));
                vertices.push(Vertex {
                    position: [point.x, point.y],
                    color,
                });
            }
        }

        if !vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.05,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..(vertices.len() as u32), 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

// ============================================================================
// Application
// ============================================================================

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<QuadRenderer>,
    config: WindowConfig,
    world: World,
    schedule: Schedule,
    clock: FrameClock,
    buttons: ButtonState,
    bindings: KeyBindings,
    draw_list: DrawList,
    palette: Vec<[f32; 3]>,
    enemy_sprite: SpriteHandle,
    enemy_animation: SpriteAnimation,
    enemy_target: usize,
    rng: DeterministicRng,
    bank: Arc<ResourceBank>,
    _accrual: AccrualHandle,
}

impl App {
    fn new(settings: Settings) -> anyhow::Result<Self> {
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
        // Second engine-glow frame; the two alternate to make fighters pulse.
        let enemy_glow = sprites.insert(SpritePixels::checker(
            8,
            8,
            2,
            [255, 120, 255, 255],
            [80, 80, 128, 255],
        ));
        let palette: Vec<[f32; 3]> = sprites
            .iter()
            .map(|(_, pixels)| sprite_color(pixels))
            .collect();
        let enemy_animation =
            SpriteAnimation::new(vec![enemy_sprite, enemy_glow], Duration::from_millis(300))?;

        let mut world = World::new(settings.simulation.max_entities);
        world.spawn_player_ship(ship_sprite, laser_sprite)?;

        let bank = Arc::new(ResourceBank::new(settings.resources.starting_gold));
        let accrual = bank.start_accrual(
            settings.resources.accrual_amount,
            Duration::from_millis(settings.resources.accrual_interval_ms),
        )?;

        Ok(Self {
            window: None,
            renderer: None,
            config: WindowConfig::new(
                settings.window.title.clone(),
                settings.window.width,
                settings.window.height,
            ),
            world,
            schedule: Schedule::new(),
            clock: FrameClock::new(),
            buttons: ButtonState::default(),
            bindings: KeyBindings::default(),
            draw_list: DrawList::new(),
            palette,
            enemy_sprite,
            enemy_animation,
            enemy_target: settings.simulation.enemy_count as usize,
            rng: DeterministicRng::new(settings.simulation.rng_seed),
            bank,
            _accrual: accrual,
        })
    }

    /// Buy enemy fighters until the wave is back at full strength or the
    /// gold runs out.
    fn reinforce(&mut self) {
        let fielded = self
            .world
            .matching(Mask::of(&[ComponentKind::Collision]))
            .count();
        for _ in fielded..self.enemy_target {
            if !self.bank.take_gold(ENEMY_COST) {
                break;
            }
            match self.world.spawn_enemy(self.enemy_sprite) {
                Ok(enemy) => {
                    if let Some(position) = self.world.position_mut(enemy) {
                        position.x = self.rng.range_f32(-0.8, 0.8);
                    }
                }
                Err(error) => {
                    self.bank.add_gold(ENEMY_COST);
                    tracing::warn!(%error, "reinforcement failed");
                    break;
                }
            }
        }
    }

    /// Step the shared fighter animation and restamp every fighter's sprite.
    fn animate_fighters(&mut self, delta: Duration) {
        let frame = self.enemy_animation.advance(delta);
        // Collect first to avoid borrow checker issues
        let fighters: Vec<Entity> = self
            .world
            .matching(Mask::of(&[ComponentKind::Collision]))
            .collect();
        for fighter in fighters {
            if let Some(sprite) = self.world.sprite_mut(fighter) {
                sprite.handle = frame;
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = Arc::new(
                event_loop
                    .create_window(window_attributes(&self.config))
                    .unwrap(),
            );

            let renderer = pollster::block_on(QuadRenderer::new(window.clone()));

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(button) = self.bindings.button_for(&format!("{code:?}")) {
                        self.buttons.set(button, event.state == ElementState::Pressed);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                let contacts = self
                    .schedule
                    .simulate(&mut self.world, &frame, &self.buttons)
                    .len();
                if contacts > 0 {
                    tracing::debug!(contacts, "fighters overlapping");
                }
                self.reinforce();
                self.animate_fighters(frame.delta);

                self.draw_list.clear();
                self.schedule.draw(&self.world, &mut self.draw_list);

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(&self.draw_list, &self.palette) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            // Reconfigure surface
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                        }
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let event_loop = create_event_loop()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(Settings::load_or_default("strafe.settings.json"))?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
