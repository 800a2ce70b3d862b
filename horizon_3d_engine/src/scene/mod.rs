//! Scene stubs for the demo
//!
//! Passive scene objects: a visualized view frustum and a horizon ground
//! plane. Both recompute their geometry data on `update`; drawing them is
//! the renderer's job and carries no GPU state here.

mod view_frustum;
mod horizon_ground;

pub use view_frustum::ViewFrustum;
pub use horizon_ground::HorizonGround;
