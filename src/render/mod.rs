//! Layer compositing: canvas geometry, premultiplied blending and PNG encoding.

/// Layer drawing and the per-character compositor.
pub mod composite;
/// Canvas extent and per-layer placement.
pub mod geometry;
/// RGBA8 surface and PNG encoding.
pub mod raster;
