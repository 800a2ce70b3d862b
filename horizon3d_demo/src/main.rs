//! Horizon3D demo - windowed OpenGL scene with the shader pipeline
//!
//! Opens a GL 4.5 core-profile window, builds the scene shader program
//! through the engine's build recipe, and redraws continuously while frame
//! statistics are re-evaluated once per second. Input callbacks are
//! registered but the camera controls behind them are stubs.

use std::num::NonZeroU32;
use std::time::Instant;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use horizon_3d_engine::{engine_error, engine_info, engine_warn};
use horizon_3d_engine_renderer_gl::GlRenderDevice;

mod frame_stats;
mod render_widget;

use frame_stats::FrameStats;
use render_widget::RenderWidget;

const FRAME_WIDTH: u32 = 1344;
const FRAME_HEIGHT: u32 = 756;

const LOG_SOURCE: &str = "horizon3d::Demo";

/// Everything that only exists while the GL window is alive
struct GlState {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    device: GlRenderDevice,
    widget: RenderWidget,
}

/// Application state for the winit event loop
struct DemoApp {
    state: Option<GlState>,
    stats: FrameStats,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            state: None,
            stats: FrameStats::new(Instant::now()),
        }
    }

    /// Create window, GL context, device and widget; None aborts the app
    fn create_gl_state(&mut self, event_loop: &ActiveEventLoop) -> Option<GlState> {
        let window_attributes = Window::default_attributes()
            .with_title("rendering")
            .with_inner_size(PhysicalSize::new(FRAME_WIDTH, FRAME_HEIGHT));
        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder =
            DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        let (window, gl_config) = match display_builder.build(event_loop, template, |configs| {
            // Prefer the config with the most samples, like the glutin examples
            configs
                .reduce(|best, candidate| {
                    if candidate.num_samples() > best.num_samples() {
                        candidate
                    } else {
                        best
                    }
                })
                .expect("at least one GL config")
        }) {
            Ok((Some(window), gl_config)) => (window, gl_config),
            Ok((None, _)) => {
                engine_error!(LOG_SOURCE, "display builder returned no window");
                return None;
            }
            Err(err) => {
                engine_error!(LOG_SOURCE, "failed to create window: {}", err);
                return None;
            }
        };

        let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
        let gl_display = gl_config.display();

        // GL 4.5 core, as the shaders expect
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 5))))
            .build(raw_window_handle);

        let not_current_context =
            match unsafe { gl_display.create_context(&gl_config, &context_attributes) } {
                Ok(context) => context,
                Err(err) => {
                    engine_error!(LOG_SOURCE, "failed to create GL context: {}", err);
                    return None;
                }
            };

        let surface_attributes = match window.build_surface_attributes(Default::default()) {
            Ok(attributes) => attributes,
            Err(err) => {
                engine_error!(LOG_SOURCE, "failed to build surface attributes: {}", err);
                return None;
            }
        };
        let surface =
            match unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) } {
                Ok(surface) => surface,
                Err(err) => {
                    engine_error!(LOG_SOURCE, "failed to create GL surface: {}", err);
                    return None;
                }
            };
        let context = match not_current_context.make_current(&surface) {
            Ok(context) => context,
            Err(err) => {
                engine_error!(LOG_SOURCE, "failed to make GL context current: {}", err);
                return None;
            }
        };

        // vsync disabled, the frame statistics measure raw throughput
        if let Err(err) = surface.set_swap_interval(&context, SwapInterval::DontWait) {
            engine_warn!(LOG_SOURCE, "failed to disable vsync: {}", err);
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
        };
        let mut device = GlRenderDevice::new(gl);

        let size = window.inner_size();
        let widget = match RenderWidget::init(&mut device, size.width, size.height) {
            Ok(widget) => widget,
            Err(err) => {
                engine_error!(LOG_SOURCE, "render widget init failed: {}", err);
                return None;
            }
        };

        engine_info!(LOG_SOURCE, "GL window ready ({}x{})", size.width, size.height);
        Some(GlState {
            window,
            surface,
            context,
            device,
            widget,
        })
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.create_gl_state(event_loop) {
            Some(state) => self.state = Some(state),
            None => event_loop.exit(),
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

            WindowEvent::Resized(size) if size.width != 0 && size.height != 0 => {
                if let Some(state) = self.state.as_mut() {
                    let width = NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN);
                    let height = NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN);
                    state.surface.resize(&state.context, width, height);
                    state.widget.resize(&state.device, size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(state) = self.state.as_mut() {
                    state.widget.update();
                    state.widget.render(&state.device);
                    if let Err(err) = state.surface.swap_buffers(&state.context) {
                        engine_warn!(LOG_SOURCE, "swap_buffers failed: {}", err);
                    }
                    if self.stats.frame_presented(Instant::now()).is_some() {
                        engine_info!(
                            LOG_SOURCE,
                            "fps: {:.5}  ms: {:.5}",
                            self.stats.fps(),
                            self.stats.frame_ms()
                        );
                    }
                }
            }

            // Camera controls are stubs: the bindings exist, the handlers do nothing
            WindowEvent::KeyboardInput { event, .. } => {
                match (event.physical_key, event.state) {
                    (PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed) => {}
                    (PhysicalKey::Code(KeyCode::KeyW), ElementState::Released) => {}
                    _ => {}
                }
            }
            WindowEvent::MouseInput { button, state, .. } => match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => {}
                (MouseButton::Left, ElementState::Released) => {}
                (MouseButton::Right, ElementState::Pressed) => {}
                (MouseButton::Right, ElementState::Released) => {}
                _ => {}
            },
            WindowEvent::CursorMoved { .. } => {}
            WindowEvent::MouseWheel { .. } => {}

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }
}

fn main() {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            engine_error!(LOG_SOURCE, "failed to create event loop: {}", err);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        engine_error!(LOG_SOURCE, "event loop error: {}", err);
        std::process::exit(1);
    }
}
