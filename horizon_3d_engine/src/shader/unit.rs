/// ShaderUnit — one shader source and its compile state machine.
///
/// A unit owns its backend shader handle from a successful compile until
/// the handle is either released or transferred to a program by attach.
/// Two asymmetries of the status field are deliberate and load-bearing for
/// callers:
/// - a failed compile leaves the status at `SourceLoaded`; retrying without
///   a fresh `append_source` will keep failing with the same source
/// - `release` does not move the status away from `Compiled`; the cleared
///   handle is what records that the backend object is gone

use std::path::Path;

use crate::device::{RawShaderHandle, RenderDevice, ShaderStage};

/// Upper bound on backend diagnostics captured into a unit, in bytes
pub const INFO_LOG_LIMIT: usize = 1024;

/// Compile lifecycle of a single shader unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStatus {
    /// No source recorded yet, or the last file read failed
    NoSource,
    /// Source recorded but not compiled, or the last compile failed
    SourceLoaded,
    /// Compiled successfully
    Compiled,
}

/// One shader source and its compile state
pub struct ShaderUnit {
    stage: ShaderStage,
    source: String,
    handle: Option<RawShaderHandle>,
    status: ShaderStatus,
    info_log: String,
}

impl ShaderUnit {
    /// Create a unit for `stage` with no source
    pub fn new(stage: ShaderStage) -> Self {
        Self {
            stage,
            source: String::new(),
            handle: None,
            status: ShaderStatus::NoSource,
            info_log: String::new(),
        }
    }

    // ===== GETTERS =====

    /// Shader stage this unit compiles for
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Current lifecycle status
    pub fn status(&self) -> ShaderStatus {
        self.status
    }

    /// Backend handle, held only between a successful compile and
    /// release/attach
    pub fn handle(&self) -> Option<RawShaderHandle> {
        self.handle
    }

    /// Last diagnostic: a backend or file error, or `"ready"` after a
    /// successful compile
    pub fn info_log(&self) -> &str {
        &self.info_log
    }

    // ===== LIFECYCLE =====

    /// Record `code` as the unit's source and mark it loaded.
    ///
    /// Despite the name this is a reset, not an append: any previous source
    /// is replaced and the status returns to `SourceLoaded` regardless of
    /// where it was.
    pub fn append_source(&mut self, code: &str) {
        self.source = code.to_string();
        self.status = ShaderStatus::SourceLoaded;
    }

    /// Compile the loaded source on `device`.
    ///
    /// Requires status `SourceLoaded`; otherwise returns false with no side
    /// effect (in particular, a second compile after a success is rejected).
    /// On backend failure the diagnostic is captured (at most
    /// `INFO_LOG_LIMIT` bytes), the freshly created backend object is
    /// deleted, and the status stays `SourceLoaded`.
    pub fn compile(&mut self, device: &mut dyn RenderDevice) -> bool {
        if self.status != ShaderStatus::SourceLoaded {
            return false;
        }

        let handle = device.create_shader(self.stage);
        if !handle.is_valid() {
            self.info_log = String::from("shader allocation refused by backend");
            return false;
        }

        device.shader_source(handle, &self.source);
        device.compile_shader(handle);

        // compile failed
        if !device.shader_compile_succeeded(handle) {
            self.info_log = device.shader_info_log(handle, INFO_LOG_LIMIT);
            device.delete_shader(handle);
            return false;
        }

        // compile success
        self.info_log = String::from("ready");
        self.handle = Some(handle);
        self.status = ShaderStatus::Compiled;

        true
    }

    /// Delete the backend handle, if this unit still holds one.
    ///
    /// No-op unless the status is `Compiled`. The status itself is left at
    /// `Compiled`; a second release finds no handle and does nothing.
    pub fn release(&mut self, device: &mut dyn RenderDevice) {
        if self.status != ShaderStatus::Compiled {
            return;
        }
        if let Some(handle) = self.handle.take() {
            device.delete_shader(handle);
        }
    }

    /// Read the file at `path`, then load and compile its contents.
    ///
    /// On a read failure the status drops back to `NoSource` and the
    /// platform error text becomes the diagnostic. On success this is
    /// `append_source` followed by `compile`, returning compile's result.
    pub fn load_from_file(
        &mut self,
        device: &mut dyn RenderDevice,
        path: impl AsRef<Path>,
    ) -> bool {
        let code = match std::fs::read_to_string(path.as_ref()) {
            Ok(code) => code,
            Err(err) => {
                self.info_log = err.to_string();
                self.status = ShaderStatus::NoSource;
                return false;
            }
        };

        self.append_source(&code);
        self.compile(device)
    }

    /// Hand the backend handle over to a program at attach time.
    ///
    /// After the transfer the wrapper can be dropped or released without
    /// touching a handle the program still uses.
    pub(crate) fn take_handle(&mut self) -> Option<RawShaderHandle> {
        self.handle.take()
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
