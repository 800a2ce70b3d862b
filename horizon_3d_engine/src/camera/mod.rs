//! Camera module
//!
//! Passive camera data driven entirely by the caller.

mod camera;

pub use camera::{Camera, Viewport};
