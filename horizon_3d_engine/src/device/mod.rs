/// Render device module - the explicit backend seam for shader operations

// Module declarations
pub mod device;

// Re-export everything from device.rs
pub use device::*;

// Mock render device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
