use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

mod config;
mod hull;
mod logging;
mod points;
mod renderer;
mod ui;

use config::{DEFAULT_SETTINGS_PATH, Settings};
use hull::{VertexBuffer, build_vertex_buffer, compute_hull};
use logging::{LoggingConfig, init_logging};
use renderer::{GpuState, SpinTransform};
use ui::{HudState, apply_theme, draw_hud};

const WINDOW_TITLE: &str = "hullview";
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    egui_ctx: egui::Context,

    /// Handed to the GPU once the window exists.
    pending: Option<VertexBuffer>,
    spin: Option<SpinTransform>,
    hud: HudState,
    started: Instant,

    error: Option<anyhow::Error>,
}

impl App {
    fn new(vertices: VertexBuffer, hud: HudState) -> Self {
        Self {
            window: None,
            gpu: None,
            egui_state: None,
            egui_renderer: None,
            egui_ctx: egui::Context::default(),

            pending: Some(vertices),
            spin: None,
            hud,
            started: Instant::now(),

            error: None,
        }
    }

    fn init_gpu(&mut self, window: Arc<Window>) -> anyhow::Result<()> {
        let Some(vertices) = self.pending.take() else {
            return Ok(());
        };

        let gpu = pollster::block_on(GpuState::new(window.clone(), &vertices))
            .context("failed to initialise the GPU")?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            self.egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );

        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1, false);

        apply_theme(&self.egui_ctx);

        self.spin = Some(SpinTransform::new(gpu.config.width, gpu.config.height));
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);
        self.started = Instant::now();

        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(egui_state)) = (&self.window, &mut self.egui_state) else {
            return;
        };

        let raw_input = egui_state.take_egui_input(window);
        let hud = &self.hud;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            draw_hud(ctx, hud);
        });

        let (Some(gpu), Some(spin), Some(egui_renderer)) =
            (&mut self.gpu, &self.spin, &mut self.egui_renderer)
        else {
            return;
        };

        egui_state.handle_platform_output(window, full_output.platform_output);

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.resize(gpu.size);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, shutting down");
                event_loop.exit();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::trace!("surface timeout, skipping frame");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.update_transform(spin, self.started.elapsed().as_secs_f32());

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, delta) in full_output.textures_delta.set {
            egui_renderer.update_texture(&gpu.device, &gpu.queue, id, &delta);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        gpu.render_hull(&view, &mut encoder);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in full_output.textures_delta.free {
            egui_renderer.free_texture(&id);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.hud.tick();
        window.request_redraw();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyH => self.hud.toggle(),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(event_loop, anyhow::Error::new(err).context("failed to create window"));
                return;
            }
        };

        if let Err(err) = self.init_gpu(window) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            // the projection keeps its startup aspect ratio
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        self.handle_key(event_loop, key);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.render(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let settings_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let settings = Settings::load(&settings_path).context("invalid settings")?;
    log::info!(
        "rendering {} hull of points \"{}\"",
        settings.mode,
        settings.point_spec
    );

    let points = points::generate(&settings.point_spec)
        .with_context(|| format!("invalid point spec \"{}\"", settings.point_spec))?;
    log::info!("generated {} points", points.len());

    let hull = compute_hull(&points).context("failed to compute the convex hull")?;
    log::info!(
        "hull has {} facets over {} vertices",
        hull.facet_count(),
        hull.vertex_count()
    );

    let vertices =
        build_vertex_buffer(&hull, settings.mode).context("failed to build hull geometry")?;
    log::info!("uploading {} vertices", vertices.vertex_count());

    let hud = HudState::new(settings.mode, hull.facet_count(), vertices.vertex_count());
    let mut app = App::new(vertices, hud);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
