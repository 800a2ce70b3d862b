/// Mock RenderDevice for unit tests (no GPU required)
///
/// The mock hands out sequential integer handles and records every call so
/// tests can assert on the exact backend traffic. Compilation is
/// deterministic: a source containing the `#error` directive (or an
/// effectively empty source) fails with a GLSL-style diagnostic, everything
/// else succeeds.

use crate::device::{RawProgramHandle, RawShaderHandle, RenderDevice, ShaderStage};

// ============================================================================
// Recorded state
// ============================================================================

/// State of one shader object created on the mock
#[derive(Debug, Clone)]
pub struct MockShaderState {
    pub handle: RawShaderHandle,
    pub stage: ShaderStage,
    pub source: String,
    pub compiled: bool,
    pub compile_attempts: u32,
    pub info_log: String,
    pub deleted: bool,
}

/// State of one program object created on the mock
#[derive(Debug, Clone)]
pub struct MockProgramState {
    pub handle: RawProgramHandle,
    pub attached: Vec<RawShaderHandle>,
    pub link_count: u32,
}

// ============================================================================
// Mock device
// ============================================================================

/// Mock RenderDevice that records all backend traffic
#[derive(Debug, Default)]
pub struct MockRenderDevice {
    next_handle: u32,
    refuse_shader_creation: bool,
    refuse_program_creation: bool,
    shaders: Vec<MockShaderState>,
    programs: Vec<MockProgramState>,
}

impl MockRenderDevice {
    /// Create a new mock device
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent create_shader return the null handle
    pub fn refuse_shader_creation(&mut self) {
        self.refuse_shader_creation = true;
    }

    /// Make every subsequent create_program return the null handle
    pub fn refuse_program_creation(&mut self) {
        self.refuse_program_creation = true;
    }

    /// Look up a shader record by handle
    pub fn shader(&self, handle: RawShaderHandle) -> Option<&MockShaderState> {
        self.shaders.iter().find(|s| s.handle == handle)
    }

    /// Look up a program record by handle
    pub fn program(&self, handle: RawProgramHandle) -> Option<&MockProgramState> {
        self.programs.iter().find(|p| p.handle == handle)
    }

    /// Number of shader objects ever created
    pub fn created_shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Number of shader objects created and not yet deleted
    pub fn live_shader_count(&self) -> usize {
        self.shaders.iter().filter(|s| !s.deleted).count()
    }

    /// Number of program objects ever created
    pub fn created_program_count(&self) -> usize {
        self.programs.len()
    }

    fn alloc_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }

    fn shader_mut(&mut self, handle: RawShaderHandle) -> Option<&mut MockShaderState> {
        self.shaders
            .iter_mut()
            .find(|s| s.handle == handle && !s.deleted)
    }
}

/// GLSL-flavored compile verdict for a mock source
fn mock_compile(source: &str) -> (bool, String) {
    if source.trim().is_empty() {
        return (false, "0:1(1): error: empty shader source".to_string());
    }
    if source.contains("#error") {
        return (
            false,
            "0:1(1): preprocessor error: #error directive encountered".to_string(),
        );
    }
    (true, String::new())
}

impl RenderDevice for MockRenderDevice {
    fn create_shader(&mut self, stage: ShaderStage) -> RawShaderHandle {
        if self.refuse_shader_creation {
            return RawShaderHandle::NULL;
        }
        let handle = RawShaderHandle(self.alloc_handle());
        self.shaders.push(MockShaderState {
            handle,
            stage,
            source: String::new(),
            compiled: false,
            compile_attempts: 0,
            info_log: String::new(),
            deleted: false,
        });
        handle
    }

    fn shader_source(&mut self, shader: RawShaderHandle, source: &str) {
        if let Some(state) = self.shader_mut(shader) {
            state.source = source.to_string();
        }
    }

    fn compile_shader(&mut self, shader: RawShaderHandle) {
        if let Some(state) = self.shader_mut(shader) {
            state.compile_attempts += 1;
            let (compiled, info_log) = mock_compile(&state.source);
            state.compiled = compiled;
            state.info_log = info_log;
        }
    }

    fn shader_compile_succeeded(&self, shader: RawShaderHandle) -> bool {
        self.shader(shader).map(|s| s.compiled).unwrap_or(false)
    }

    fn shader_info_log(&self, shader: RawShaderHandle, max_len: usize) -> String {
        let mut log = self
            .shader(shader)
            .map(|s| s.info_log.clone())
            .unwrap_or_default();
        if log.len() > max_len {
            log.truncate(max_len);
        }
        log
    }

    fn delete_shader(&mut self, shader: RawShaderHandle) {
        if let Some(state) = self.shader_mut(shader) {
            state.deleted = true;
        }
    }

    fn create_program(&mut self) -> RawProgramHandle {
        if self.refuse_program_creation {
            return RawProgramHandle::NULL;
        }
        let handle = RawProgramHandle(self.alloc_handle());
        self.programs.push(MockProgramState {
            handle,
            attached: Vec::new(),
            link_count: 0,
        });
        handle
    }

    fn attach_shader(&mut self, program: RawProgramHandle, shader: RawShaderHandle) {
        let shader_live = self.shader(shader).map(|s| !s.deleted).unwrap_or(false);
        if !shader_live {
            return;
        }
        if let Some(state) = self.programs.iter_mut().find(|p| p.handle == program) {
            state.attached.push(shader);
        }
    }

    fn link_program(&mut self, program: RawProgramHandle) {
        if let Some(state) = self.programs.iter_mut().find(|p| p.handle == program) {
            state.link_count += 1;
        }
    }
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
