//! Shader compilation and program linking
//!
//! One `ShaderUnit` per source, one `ShaderProgram` per linked program, and
//! the build recipes that run the whole pipeline front to back.

mod unit;
mod program;
mod builder;

pub use unit::{ShaderUnit, ShaderStatus, INFO_LOG_LIMIT};
pub use program::{ShaderProgram, ProgramStatus, ReadyFlags};
pub use builder::{build_raster_program, build_compute_program};
