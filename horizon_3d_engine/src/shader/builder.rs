/// Build recipes that turn shader source files into linked programs.
///
/// Both recipes follow the same skeleton: compile one unit per stage,
/// allocate and initialize a program, attach, check the aggregate status,
/// link. Any stage failure short-circuits the rest and nothing is returned
/// to the caller — the result is all-or-nothing. Diagnostics are logged
/// here before the error goes back up.

use std::path::Path;

use crate::device::{RenderDevice, ShaderStage};
use crate::error::{Error, Result};
use super::program::{ProgramStatus, ShaderProgram};
use super::unit::{ShaderStatus, ShaderUnit};

const LOG_SOURCE: &str = "horizon3d::ShaderBuilder";

/// Helper to log errors before returning them (internal use)
fn log_and_return_error(error: Error) -> Error {
    crate::engine_error!(LOG_SOURCE, "{}", error);
    error
}

/// Load and compile one stage from a file, or report why it could not be.
///
/// The unit's own status tells a read failure (`NoSource`) apart from a
/// compile failure (`SourceLoaded`); the diagnostic text is already in the
/// unit either way.
fn compiled_unit_from_file(
    device: &mut dyn RenderDevice,
    stage: ShaderStage,
    path: &Path,
) -> Result<ShaderUnit> {
    let mut unit = ShaderUnit::new(stage);
    if unit.load_from_file(device, path) {
        return Ok(unit);
    }

    let diagnostic = format!("{:?} shader {}: {}", stage, path.display(), unit.info_log());
    let error = match unit.status() {
        ShaderStatus::NoSource => Error::FileRead(diagnostic),
        _ => Error::CompileFailed(diagnostic),
    };
    Err(log_and_return_error(error))
}

/// Assemble, check and link a program from already-compiled units.
fn assemble_program(
    device: &mut dyn RenderDevice,
    units: &mut [&mut ShaderUnit],
) -> Result<ShaderProgram> {
    let mut program = ShaderProgram::new();

    if !program.init(device) {
        for unit in units.iter_mut() {
            unit.release(device);
        }
        return Err(log_and_return_error(Error::BackendError(
            "program allocation refused by backend".to_string(),
        )));
    }

    for index in 0..units.len() {
        if !program.attach(device, &mut *units[index]) {
            let stage = units[index].stage();
            for unit in units.iter_mut() {
                unit.release(device);
            }
            return Err(log_and_return_error(Error::AttachRejected(format!(
                "{:?} shader rejected by program",
                stage
            ))));
        }
    }

    let status = program.check_status();
    if status != ProgramStatus::Ready {
        return Err(log_and_return_error(Error::ProgramIncomplete(format!(
            "aggregate status {:?} after attach",
            status
        ))));
    }

    program.link(device);
    Ok(program)
}

/// Build a graphics (vertex + fragment) program from two source files.
///
/// Returns the linked program, or the first error encountered; on error no
/// program object reaches the caller. The transient units are discarded
/// here — their backend handles were transferred to the program at attach.
pub fn build_raster_program(
    device: &mut dyn RenderDevice,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<ShaderProgram> {
    let vertex_path = vertex_path.as_ref();
    let fragment_path = fragment_path.as_ref();

    let mut vertex = compiled_unit_from_file(device, ShaderStage::Vertex, vertex_path)?;
    let mut fragment = match compiled_unit_from_file(device, ShaderStage::Fragment, fragment_path)
    {
        Ok(unit) => unit,
        Err(error) => {
            vertex.release(device);
            return Err(error);
        }
    };

    let program = assemble_program(device, &mut [&mut vertex, &mut fragment])?;

    crate::engine_debug!(
        LOG_SOURCE,
        "raster program linked ({} + {})",
        vertex_path.display(),
        fragment_path.display()
    );
    Ok(program)
}

/// Build a compute program from a single source file.
///
/// Identical skeleton to the graphics recipe with one compute-stage unit.
pub fn build_compute_program(
    device: &mut dyn RenderDevice,
    compute_path: impl AsRef<Path>,
) -> Result<ShaderProgram> {
    let compute_path = compute_path.as_ref();

    let mut compute = compiled_unit_from_file(device, ShaderStage::Compute, compute_path)?;

    let program = assemble_program(device, &mut [&mut compute])?;

    crate::engine_debug!(
        LOG_SOURCE,
        "compute program linked ({})",
        compute_path.display()
    );
    Ok(program)
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
