//! Network plumbing behind the [`PageFetcher`] and [`ImageLoader`] seams.
//!
//! [`ImageLoader`]: crate::assets::loader::ImageLoader

/// reqwest-backed fetcher that also understands `file://` URLs.
pub mod http;

use crate::foundation::error::SpriteResult;

/// Source of HTML pages.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> SpriteResult<String>;
}
