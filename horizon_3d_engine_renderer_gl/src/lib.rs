/*!
# Horizon3D Engine - OpenGL Renderer Backend

OpenGL implementation of the Horizon3D render device.

This crate provides the OpenGL backend that implements the
horizon_3d_engine `RenderDevice` trait using the glow bindings. The caller
creates the GL context (the demo does this through glutin) and hands the
loaded `glow::Context` in; from there every shader/program operation goes
through explicit handles.
*/

// OpenGL implementation modules
mod gl_device;

pub use gl_device::GlRenderDevice;
