/// GlRenderDevice - OpenGL implementation of the RenderDevice trait
///
/// Handles handed to the engine are sequential integers owned by this
/// device and mapped to native GL objects internally; they are not GL
/// names. Operations on unknown handles are silent no-ops, matching the
/// trait contract. All GL entry points require the context to be current
/// on the calling thread.

use glow::HasContext;
use rustc_hash::FxHashMap;

use horizon_3d_engine::horizon3d::{
    RawProgramHandle, RawShaderHandle, RenderDevice, ShaderStage,
};

/// Map a shader stage to its GL shader type
fn gl_shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        ShaderStage::Compute => glow::COMPUTE_SHADER,
    }
}

/// Truncate a log to `max_len` bytes without splitting a UTF-8 character
fn truncate_log(mut log: String, max_len: usize) -> String {
    if log.len() > max_len {
        let mut end = max_len;
        while end > 0 && !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}

/// OpenGL render device
pub struct GlRenderDevice {
    gl: glow::Context,
    shaders: FxHashMap<u32, glow::NativeShader>,
    programs: FxHashMap<u32, glow::NativeProgram>,
    next_handle: u32,
}

impl GlRenderDevice {
    /// Wrap a loaded `glow::Context`.
    ///
    /// The context must be current on this thread, and must stay current
    /// whenever device operations are issued.
    pub fn new(gl: glow::Context) -> Self {
        Self {
            gl,
            shaders: FxHashMap::default(),
            programs: FxHashMap::default(),
            next_handle: 0,
        }
    }

    /// The underlying `glow::Context`, for renderer glue (clears, draws)
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Native GL program behind an engine handle, for activation
    pub fn native_program(&self, handle: RawProgramHandle) -> Option<glow::NativeProgram> {
        self.programs.get(&handle.0).copied()
    }

    fn alloc_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl RenderDevice for GlRenderDevice {
    fn create_shader(&mut self, stage: ShaderStage) -> RawShaderHandle {
        let native = match unsafe { self.gl.create_shader(gl_shader_type(stage)) } {
            Ok(native) => native,
            Err(_) => return RawShaderHandle::NULL,
        };
        let handle = self.alloc_handle();
        self.shaders.insert(handle, native);
        RawShaderHandle(handle)
    }

    fn shader_source(&mut self, shader: RawShaderHandle, source: &str) {
        if let Some(&native) = self.shaders.get(&shader.0) {
            unsafe { self.gl.shader_source(native, source) };
        }
    }

    fn compile_shader(&mut self, shader: RawShaderHandle) {
        if let Some(&native) = self.shaders.get(&shader.0) {
            unsafe { self.gl.compile_shader(native) };
        }
    }

    fn shader_compile_succeeded(&self, shader: RawShaderHandle) -> bool {
        match self.shaders.get(&shader.0) {
            Some(&native) => unsafe { self.gl.get_shader_compile_status(native) },
            None => false,
        }
    }

    fn shader_info_log(&self, shader: RawShaderHandle, max_len: usize) -> String {
        match self.shaders.get(&shader.0) {
            Some(&native) => {
                let log = unsafe { self.gl.get_shader_info_log(native) };
                truncate_log(log, max_len)
            }
            None => String::new(),
        }
    }

    fn delete_shader(&mut self, shader: RawShaderHandle) {
        if let Some(native) = self.shaders.remove(&shader.0) {
            unsafe { self.gl.delete_shader(native) };
        }
    }

    fn create_program(&mut self) -> RawProgramHandle {
        let native = match unsafe { self.gl.create_program() } {
            Ok(native) => native,
            Err(_) => return RawProgramHandle::NULL,
        };
        let handle = self.alloc_handle();
        self.programs.insert(handle, native);
        RawProgramHandle(handle)
    }

    fn attach_shader(&mut self, program: RawProgramHandle, shader: RawShaderHandle) {
        if let (Some(&native_program), Some(&native_shader)) =
            (self.programs.get(&program.0), self.shaders.get(&shader.0))
        {
            unsafe { self.gl.attach_shader(native_program, native_shader) };
        }
    }

    fn link_program(&mut self, program: RawProgramHandle) {
        if let Some(&native) = self.programs.get(&program.0) {
            unsafe { self.gl.link_program(native) };
        }
    }
}
