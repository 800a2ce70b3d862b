/// RenderWidget - the demo scene behind the window.
///
/// Owns the scene shader program, two cameras (a player camera whose view
/// volume is visualized, and a god camera the scene is viewed from), and
/// the passive scene stubs. The program is built once at init through the
/// engine's raster recipe from the GLSL files shipped with this crate.

use std::path::Path;

use glow::HasContext;

use horizon_3d_engine::engine_info;
use horizon_3d_engine::glam::{Mat4, Vec3};
use horizon_3d_engine::horizon3d::camera::{Camera, Viewport};
use horizon_3d_engine::horizon3d::scene::{HorizonGround, ViewFrustum};
use horizon_3d_engine::horizon3d::shader::{build_raster_program, ShaderProgram};
use horizon_3d_engine::horizon3d::Result;
use horizon_3d_engine_renderer_gl::GlRenderDevice;

const LOG_SOURCE: &str = "horizon3d::RenderWidget";

const GROUND_HALF_EXTENT: f32 = 128.0;
const GROUND_HEIGHT: f32 = 0.0;

const PLAYER_EYE: Vec3 = Vec3::new(0.0, 8.0, 24.0);
const PLAYER_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);
const GOD_EYE: Vec3 = Vec3::new(60.0, 80.0, 60.0);

fn projection_for(viewport: Viewport) -> Mat4 {
    Mat4::perspective_rh_gl(60f32.to_radians(), viewport.aspect_ratio(), 0.1, 1000.0)
}

/// The demo scene: program, cameras, scene stubs
pub struct RenderWidget {
    scene_program: ShaderProgram,
    player_camera: Camera,
    god_camera: Camera,
    view_frustum: ViewFrustum,
    ground: HorizonGround,
}

impl RenderWidget {
    /// Build the scene program and set up cameras and scene stubs.
    ///
    /// Fails when the shader build fails; the error has already been logged
    /// by the build recipe.
    pub fn init(device: &mut GlRenderDevice, width: u32, height: u32) -> Result<Self> {
        let shader_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
        let scene_program = build_raster_program(
            device,
            shader_dir.join("scene.vert"),
            shader_dir.join("scene.frag"),
        )?;

        let viewport = Viewport::full_frame(width, height);
        let player_camera = Camera::new(
            Mat4::look_at_rh(PLAYER_EYE, PLAYER_TARGET, Vec3::Y),
            projection_for(viewport),
            viewport,
        );
        let god_camera = Camera::new(
            Mat4::look_at_rh(GOD_EYE, Vec3::ZERO, Vec3::Y),
            projection_for(viewport),
            viewport,
        );

        let mut widget = Self {
            scene_program,
            player_camera,
            god_camera,
            view_frustum: ViewFrustum::new(),
            ground: HorizonGround::new(GROUND_HALF_EXTENT, GROUND_HEIGHT),
        };
        widget.resize(device, width, height);
        widget.update();

        engine_info!(LOG_SOURCE, "render widget initialized ({}x{})", width, height);
        Ok(widget)
    }

    /// Track a new frame size: viewports, projections, GL viewport
    pub fn resize(&mut self, device: &GlRenderDevice, width: u32, height: u32) {
        let viewport = Viewport::full_frame(width, height);
        self.player_camera.set_viewport(viewport);
        self.player_camera.set_projection(projection_for(viewport));
        self.god_camera.set_viewport(viewport);
        self.god_camera.set_projection(projection_for(viewport));

        unsafe {
            device.gl().viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Per-frame state update.
    ///
    /// Camera controls are not wired up; the scene stubs still track the
    /// (static) player camera every frame.
    pub fn update(&mut self) {
        self.view_frustum
            .update(&self.player_camera.view_projection_matrix());
        self.ground.update(PLAYER_EYE);
    }

    /// Clear the frame and activate the scene program from the god camera.
    ///
    /// The scene stubs carry no GPU buffers, so no draws are issued behind
    /// the activation.
    pub fn render(&self, device: &GlRenderDevice) {
        let gl = device.gl();
        unsafe {
            gl.clear_color(0.2, 0.2, 0.2, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        if let Some(native) = self
            .scene_program
            .handle()
            .and_then(|handle| device.native_program(handle))
        {
            let view_projection = self.god_camera.view_projection_matrix();
            unsafe {
                gl.use_program(Some(native));
                if let Some(location) = gl.get_uniform_location(native, "viewProjection") {
                    gl.uniform_matrix_4_f32_slice(
                        Some(&location),
                        false,
                        view_projection.as_ref(),
                    );
                }
            }
        }
    }
}
