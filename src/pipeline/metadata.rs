use std::path::Path;
use std::time::Duration;

use crate::{
    composition::model::CharacterRecord,
    foundation::error::{SpriteError, SpriteResult},
    pipeline::SpritePipeline,
};

impl SpritePipeline {
    /// Scrape every character's detail page, one at a time.
    ///
    /// Sleeps `request_delay_ms` after each request. Characters whose page cannot be fetched or
    /// has no attribute table are logged and left out; only a failure to obtain the gallery
    /// page is returned as an error.
    pub async fn run_metadata(&self) -> SpriteResult<Vec<CharacterRecord>> {
        let page = self.list_page().await?;
        let urls = self.metadata.detail_urls(&page);
        tracing::info!(characters = urls.len(), "discovered detail pages");

        let delay = Duration::from_millis(self.config.request_delay_ms);
        let mut records = Vec::with_capacity(urls.len());
        for url in &urls {
            match self.fetch_record(url).await {
                Ok(record) => {
                    tracing::info!(character = %record.name, "fetched");
                    records.push(record);
                }
                Err(err) => tracing::warn!(url = %url, error = %err, "failed to fetch character"),
            }
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
        Ok(records)
    }

    pub async fn fetch_record(&self, url: &str) -> SpriteResult<CharacterRecord> {
        let page = self.fetcher.fetch_text(url).await?;
        self.metadata.record(url, &page)
    }
}

pub fn metadata_json(records: &[CharacterRecord]) -> SpriteResult<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| SpriteError::encode(format!("metadata json: {e}")))
}

pub async fn write_metadata(path: &Path, json: &str) -> SpriteResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/metadata.rs"]
mod tests;
