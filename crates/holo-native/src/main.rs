use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::Key,
    window::WindowBuilder,
};

use glam::{Mat4, Vec3};
use holo_core::{CardRect, Config, ConfigKey, HoloEngine, VisualParams};

const CAMERA_Z: f32 = 3.2;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    glare: [f32; 4],
    layers: [f32; 4],
    pattern: [f32; 4],
}

impl Uniforms {
    fn new(view_proj: Mat4, p: &VisualParams) -> Self {
        // card space is y-up: a positive pitch must push the top edge to -z
        let model = Mat4::from_rotation_x(-p.rotate_x.to_radians())
            * Mat4::from_rotation_y(p.rotate_y.to_radians());
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            glare: [p.from_left, p.from_top, p.from_center, p.intensity],
            layers: [
                p.glare_opacity,
                p.holo_opacity,
                p.sparkle_opacity,
                p.rainbow_angle.to_radians(),
            ],
            pattern: [
                p.rainbow_pos / 100.0,
                p.background_x / 100.0,
                p.background_y / 100.0,
                0.0,
            ],
        }
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("card_shader"),
            source: wgpu::ShaderSource::Wgsl(holo_core::CARD_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("card_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("card_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("card_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("card_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("card_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                // the card is seen from behind while flipping through zero
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height as f32;
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    fn render(&mut self, params: &VisualParams) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms::new(self.view_proj(), params)),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.04,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn env_key(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::MaxRotation => "HOLO_MAX_ROTATION",
        ConfigKey::IdleTimeoutMs => "HOLO_IDLE_TIMEOUT_MS",
        ConfigKey::Smoothing => "HOLO_SMOOTHING",
        ConfigKey::SpringBack => "HOLO_SPRING_BACK",
        ConfigKey::GyroScale => "HOLO_GYRO_SCALE",
        ConfigKey::Strategy => "HOLO_STRATEGY",
    }
}

/// The whole window acts as the card's hover area.
fn window_rect(size: winit::dpi::PhysicalSize<u32>) -> CardRect {
    CardRect::new(0.0, 0.0, size.width as f32, size.height as f32)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::from_overrides(|key| std::env::var(env_key(key)).ok());
    log::info!(
        "[config] max_rotation={} idle_timeout={:?} strategy={:?}",
        config.max_rotation,
        config.idle_timeout,
        config.strategy
    );
    let mut engine = HoloEngine::new(config).expect("config");

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Holo card (native)")
        .with_inner_size(LogicalSize::new(600.0, 800.0))
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");
    let origin = Instant::now();
    log::info!("move the cursor over the window; T toggles tilt, R recenters");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    state.resize(size);
                    engine.invalidate_rect();
                }
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    if engine.needs_rect() {
                        engine.set_card_rect(window_rect(state.window.inner_size()));
                    }
                    engine.handle_pointer_input(position.x as f32, position.y as f32, origin.elapsed());
                }
                WindowEvent::CursorLeft { .. } => engine.handle_pointer_leave(),
                WindowEvent::Touch(touch) => match touch.phase {
                    TouchPhase::Started | TouchPhase::Moved => {
                        if engine.needs_rect() {
                            engine.set_card_rect(window_rect(state.window.inner_size()));
                        }
                        engine.handle_touch_input(
                            touch.location.x as f32,
                            touch.location.y as f32,
                            origin.elapsed(),
                        );
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => engine.handle_touch_end(),
                },
                WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                    match event.logical_key.as_ref() {
                        Key::Character("t") | Key::Character("T") => {
                            let enabled = !engine.tilt_enabled();
                            engine.set_tilt_enabled(enabled);
                            log::info!("tilt {}", if enabled { "on" } else { "off" });
                        }
                        Key::Character("r") | Key::Character("R") => engine.reset_to_center(),
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if let Some(p) = engine.frame(origin.elapsed()) {
                    log::trace!("rot=({:.2},{:.2}) intensity={:.3}", p.rotate_x, p.rotate_y, p.intensity);
                }
                match state.render(&engine.visual_params()) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .expect("event loop");
}
