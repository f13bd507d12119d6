//! Window driver: hosts the swarm inside a winit event loop.
//!
//! The driver is the only place that knows about frame scheduling. Every
//! redraw it updates the clock, ticks the swarm, and hands the segment path
//! to the renderer; pointer and resize events are forwarded to the swarm as
//! they arrive. The swarm itself never touches winit.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::SwarmConfig;
use crate::gpu::GpuState;
use crate::swarm::{Swarm, Tick};
use crate::time::Time;

pub(crate) struct App {
    config: Option<SwarmConfig>,
    seed: Option<u32>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    swarm: Option<Swarm>,
    time: Time,
    disabled: bool,
}

impl App {
    pub(crate) fn new(config: SwarmConfig, seed: Option<u32>) -> Self {
        Self {
            config: Some(config),
            seed,
            window: None,
            gpu: None,
            swarm: None,
            time: Time::new(),
            disabled: false,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.disabled {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Wisp")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            // Precondition violation: no usable surface. Disable the effect
            // and leave the host process alive.
            tracing::warn!("zero-sized surface at startup, swarm disabled");
            self.disabled = true;
            return;
        }

        let config = self.config.take().unwrap_or_default();
        let bounds = Vec2::new(size.width as f32, size.height as f32);
        let swarm = Swarm::with_seed(config, bounds, self.seed);
        let max_vertices = swarm.particles().len() * 2;

        match pollster::block_on(GpuState::new(
            window.clone(),
            &swarm.config().visuals,
            max_vertices,
        )) {
            Ok(gpu) => {
                tracing::info!(
                    particles = swarm.particles().len(),
                    width = size.width,
                    height = size.height,
                    "swarm initialized"
                );
                self.gpu = Some(gpu);
                self.swarm = Some(swarm);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                tracing::error!("gpu initialization failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(swarm) = &mut self.swarm {
            swarm.pointer_mut().handle_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && matches!(event.physical_key, PhysicalKey::Code(KeyCode::Escape))
                {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let (Some(gpu), Some(swarm)) = (&mut self.gpu, &mut self.swarm) {
                    gpu.resize(size);
                    swarm.set_bounds(Vec2::new(size.width as f32, size.height as f32));
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(swarm)) = (&mut self.gpu, &mut self.swarm) {
                    let (elapsed, _delta) = self.time.update();
                    swarm.tick(elapsed);

                    match gpu.render(swarm.path()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            });
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            tracing::error!("out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => tracing::warn!("surface error: {e:?}"),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
