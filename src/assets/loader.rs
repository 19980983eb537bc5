use crate::{assets::decode::PreparedImage, foundation::error::SpriteResult};

/// Source of layer images for the compositor.
///
/// Implementations fetch and decode the image behind an absolute reference. A failure affects
/// only the layer that asked for it; the compositor logs it and carries on.
#[async_trait::async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, image_ref: &str) -> SpriteResult<PreparedImage>;
}
