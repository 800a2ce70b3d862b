/*!
# Horizon3D Engine

Core types for the Horizon3D rendering demo.

This crate provides the platform-agnostic shader-program lifecycle used by
the demo: shader units that compile one source each, shader programs that
aggregate compiled units and link, and the build recipes that orchestrate
both. The GPU backend is abstracted behind the `RenderDevice` trait; the
OpenGL implementation lives in the `horizon_3d_engine_renderer_gl` crate.

## Architecture

- **RenderDevice**: backend seam — shader/program operations on explicit handles
- **ShaderUnit**: one shader source and its compile state machine
- **ShaderProgram**: program handle, stage readiness, aggregate link status
- **build_raster_program / build_compute_program**: all-or-nothing recipes
- **Camera / scene stubs**: passive data consumed by the demo's render loop

Every device-touching operation takes the device as an explicit parameter;
the thread that owns the rendering context must be the one calling in.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod device;
pub mod shader;
pub mod camera;
pub mod scene;

// Main horizon3d namespace module
pub mod horizon3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging slot)
    pub use crate::engine::Engine;

    // Backend seam
    pub use crate::device::{RawProgramHandle, RawShaderHandle, RenderDevice, ShaderStage};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Device sub-module
    pub mod device {
        pub use crate::device::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
