/// RenderDevice trait and backend handle types
///
/// Instead of reaching into an ambient rendering context, every
/// unit/program operation takes an explicit `RenderDevice` parameter, so
/// the single-thread-owns-context rule is a borrow instead of an implicit
/// assumption.

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
    /// Compute shader
    Compute,
}

/// Backend-assigned shader object handle
///
/// Zero is the null handle; a backend returns it when allocation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawShaderHandle(pub u32);

impl RawShaderHandle {
    /// The null handle
    pub const NULL: RawShaderHandle = RawShaderHandle(0);

    /// True when the handle refers to a backend object
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Backend-assigned program object handle
///
/// Zero is the null handle; a backend returns it when allocation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawProgramHandle(pub u32);

impl RawProgramHandle {
    /// The null handle
    pub const NULL: RawProgramHandle = RawProgramHandle(0);

    /// True when the handle refers to a backend object
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Backend seam for shader compilation and program linking
///
/// Implemented by backend-specific devices (e.g., GlRenderDevice) and by the
/// test mock. All operations are synchronous and must be called from the
/// thread that owns the rendering context. Operations on handles the device
/// does not know are silent no-ops (queries report failure/empty), matching
/// how a driver treats stale names.
pub trait RenderDevice {
    /// Allocate a shader object for `stage`
    ///
    /// Returns the null handle when the backend refuses the allocation.
    fn create_shader(&mut self, stage: ShaderStage) -> RawShaderHandle;

    /// Replace the source text of `shader`
    fn shader_source(&mut self, shader: RawShaderHandle, source: &str);

    /// Request compilation of `shader`
    fn compile_shader(&mut self, shader: RawShaderHandle);

    /// Backend compile-status flag for `shader`
    fn shader_compile_succeeded(&self, shader: RawShaderHandle) -> bool;

    /// Backend compile diagnostic for `shader`, truncated to `max_len` bytes
    fn shader_info_log(&self, shader: RawShaderHandle, max_len: usize) -> String;

    /// Release the backend object behind `shader`
    fn delete_shader(&mut self, shader: RawShaderHandle);

    /// Allocate a program object
    ///
    /// Returns the null handle when the backend refuses the allocation.
    fn create_program(&mut self) -> RawProgramHandle;

    /// Register a compiled `shader` with `program`
    fn attach_shader(&mut self, program: RawProgramHandle, shader: RawShaderHandle);

    /// Link `program`
    ///
    /// Link success is not reported back through this interface; see
    /// `ShaderProgram::link` for the documented consequence.
    fn link_program(&mut self, program: RawProgramHandle);
}
