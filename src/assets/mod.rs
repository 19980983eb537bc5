/// Image decoding into premultiplied RGBA8.
pub mod decode;
/// The image-loading seam used by the compositor.
pub mod loader;
