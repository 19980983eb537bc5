//! The pipeline object and its two drivers.
//!
//! [`SpritePipeline`] exposes the pure steps (`extract`) and the per-character compositor
//! (`compose`/`composite`); the drivers in [`images`] and [`metadata`] own iteration, fan-out
//! and error aggregation.

/// Image pipeline driver: one PNG per character.
pub mod images;
/// Metadata pipeline driver: detail pages to JSON records.
pub mod metadata;

use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    assets::loader::ImageLoader,
    composition::model::Character,
    extract::layers::LayerExtractor,
    extract::metadata::MetadataExtractor,
    fetch::{PageFetcher, http::HttpFetcher},
    foundation::config::SpriteConfig,
    foundation::error::SpriteResult,
    render::composite::{ComposedSprite, compose},
};

pub struct SpritePipeline {
    config: SpriteConfig,
    layers: LayerExtractor,
    metadata: MetadataExtractor,
    fetcher: Arc<dyn PageFetcher>,
    loader: Arc<dyn ImageLoader>,
}

impl SpritePipeline {
    pub fn new(
        config: SpriteConfig,
        fetcher: Arc<dyn PageFetcher>,
        loader: Arc<dyn ImageLoader>,
    ) -> SpriteResult<Self> {
        config.validate()?;
        Ok(Self {
            layers: LayerExtractor::new(&config)?,
            metadata: MetadataExtractor::new(&config)?,
            config,
            fetcher,
            loader,
        })
    }

    /// Pipeline that fetches pages and images with one shared HTTP client.
    pub fn with_http(config: SpriteConfig) -> SpriteResult<Self> {
        let http = Arc::new(HttpFetcher::new(&config)?);
        Self::new(config, http.clone(), http)
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Characters with at least one layer, in page order.
    pub fn extract(&self, page: &str) -> Vec<Character> {
        self.layers.extract(page)
    }

    pub async fn compose(&self, character: &Character) -> SpriteResult<ComposedSprite> {
        compose(character, self.loader.as_ref(), self.config.layer_jobs).await
    }

    /// Composite `character` and encode the result as PNG.
    pub async fn composite(&self, character: &Character) -> SpriteResult<Vec<u8>> {
        self.compose(character).await?.raster.encode_png()
    }

    /// The gallery page, from `list_page_file` when set, otherwise fetched from `list_url`.
    pub async fn list_page(&self) -> SpriteResult<String> {
        match &self.config.list_page_file {
            Some(path) => Ok(tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read list page '{}'", path.display()))?),
            None => self.fetcher.fetch_text(&self.config.list_url).await,
        }
    }
}
