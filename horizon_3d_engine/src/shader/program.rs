/// ShaderProgram — program handle, stage readiness, aggregate link status.
///
/// A program aggregates compiled units. Attaching transfers each unit's
/// backend handle into the program; the unit wrapper can be discarded
/// afterwards. `check_status` derives the aggregate status purely from the
/// readiness flags, so the compute flag short-circuits: a program with a
/// compute unit attached is `Ready` no matter what the vertex/fragment
/// flags say (compute and graphics pipelines are mutually exclusive by
/// convention, never validated).

use crate::device::{RawProgramHandle, RenderDevice, ShaderStage};
use super::unit::{ShaderStatus, ShaderUnit};

/// Aggregate link-readiness of a shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStatus {
    /// No backend program allocated yet
    NoProgramId,
    /// Program allocated, nothing attached yet
    ProgramIdReady,
    /// Neither vertex nor fragment stage is attached
    MissingVertexAndFragment,
    /// Fragment attached, vertex missing
    MissingVertex,
    /// Vertex attached, fragment missing
    MissingFragment,
    /// Linkable: compute attached, or vertex and fragment both attached
    Ready,
}

/// One readiness bit per shader stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadyFlags {
    pub vertex: bool,
    pub fragment: bool,
    pub compute: bool,
}

/// Backend program handle plus the attach/link state machine
pub struct ShaderProgram {
    handle: Option<RawProgramHandle>,
    flags: ReadyFlags,
    status: ProgramStatus,
}

impl ShaderProgram {
    /// Create a program with no backend handle
    pub fn new() -> Self {
        Self {
            handle: None,
            flags: ReadyFlags::default(),
            status: ProgramStatus::NoProgramId,
        }
    }

    // ===== GETTERS =====

    /// Backend program handle, present once `init` succeeded
    pub fn handle(&self) -> Option<RawProgramHandle> {
        self.handle
    }

    /// Aggregate status as of the last transition
    pub fn status(&self) -> ProgramStatus {
        self.status
    }

    /// Per-stage readiness flags
    pub fn ready_flags(&self) -> ReadyFlags {
        self.flags
    }

    // ===== LIFECYCLE =====

    /// Allocate the backend program object.
    ///
    /// Fails (returns false, status unchanged) when the backend refuses the
    /// allocation. On success the status moves to `ProgramIdReady`.
    pub fn init(&mut self, device: &mut dyn RenderDevice) -> bool {
        let handle = device.create_program();

        // backend refused
        if !handle.is_valid() {
            return false;
        }

        self.handle = Some(handle);
        self.status = ProgramStatus::ProgramIdReady;
        true
    }

    /// Attach a compiled unit, transferring its handle into the program.
    ///
    /// Requires the program status `ProgramIdReady` and the unit status
    /// `Compiled` (still holding its handle); otherwise returns false with
    /// no side effect. On success the readiness flag selected by the unit's
    /// stage is set; re-attaching the same stage just re-sets the flag.
    pub fn attach(&mut self, device: &mut dyn RenderDevice, unit: &mut ShaderUnit) -> bool {
        if self.status != ProgramStatus::ProgramIdReady {
            return false;
        }
        if unit.status() != ShaderStatus::Compiled {
            return false;
        }
        let program = match self.handle {
            Some(handle) => handle,
            None => return false,
        };
        let shader = match unit.take_handle() {
            Some(handle) => handle,
            None => return false,
        };

        device.attach_shader(program, shader);

        match unit.stage() {
            ShaderStage::Vertex => self.flags.vertex = true,
            ShaderStage::Fragment => self.flags.fragment = true,
            ShaderStage::Compute => self.flags.compute = true,
        }
        true
    }

    /// Recompute the aggregate status from the readiness flags.
    ///
    /// A pure function of the three flags: no precondition, idempotent, and
    /// independent of whatever status was stored before.
    pub fn check_status(&mut self) -> ProgramStatus {
        // compute shader program
        self.status = if self.flags.compute {
            ProgramStatus::Ready
        }
        // render program
        else if !self.flags.vertex && !self.flags.fragment {
            ProgramStatus::MissingVertexAndFragment
        } else if !self.flags.vertex {
            ProgramStatus::MissingVertex
        } else if !self.flags.fragment {
            ProgramStatus::MissingFragment
        } else {
            ProgramStatus::Ready
        };

        self.status
    }

    /// Link the program.
    ///
    /// Silent no-op unless the status is `Ready`. Known limitation: the
    /// backend's link-status flag is not queried afterwards, so a link
    /// failure is invisible here; callers that need certainty must validate
    /// the program on first use.
    pub fn link(&mut self, device: &mut dyn RenderDevice) {
        if self.status != ProgramStatus::Ready {
            return;
        }
        if let Some(handle) = self.handle {
            device.link_program(handle);
        }
    }
}

impl Default for ShaderProgram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
