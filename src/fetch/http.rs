use std::time::Duration;

use url::Url;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    assets::loader::ImageLoader,
    fetch::PageFetcher,
    foundation::config::SpriteConfig,
    foundation::error::{SpriteError, SpriteResult},
};

/// Fetches pages and layer images over HTTP(S).
///
/// `file://` URLs are read straight from disk, which lets a mirrored gallery page be
/// composited offline.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &SpriteConfig) -> SpriteResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SpriteError::config(format!("build http client: {e}")))?;
        Ok(Self { client })
    }

    pub async fn fetch_bytes(&self, url: &str) -> SpriteResult<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|e| SpriteError::fetch(format!("{url}: {e}")))?;

        if parsed.scheme() == "file" {
            let path = parsed
                .to_file_path()
                .map_err(|()| SpriteError::fetch(format!("{url}: not a local path")))?;
            return tokio::fs::read(&path)
                .await
                .map_err(|e| SpriteError::fetch(format!("{}: {e}", path.display())));
        }

        let resp = self.get(parsed).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| SpriteError::fetch(format!("{url}: read body: {e}")))?;
        Ok(bytes.to_vec())
    }

    async fn get(&self, url: Url) -> SpriteResult<reqwest::Response> {
        let shown = url.to_string();
        tracing::debug!(url = %shown, "GET");
        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| SpriteError::fetch(format!("{shown}: {e}")))
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> SpriteResult<String> {
        let parsed = Url::parse(url).map_err(|e| SpriteError::fetch(format!("{url}: {e}")))?;
        if parsed.scheme() == "file" {
            let bytes = self.fetch_bytes(url).await?;
            return Ok(String::from_utf8_lossy(&bytes).into_owned());
        }
        self.get(parsed)
            .await?
            .text()
            .await
            .map_err(|e| SpriteError::fetch(format!("{url}: read body: {e}")))
    }
}

#[async_trait::async_trait]
impl ImageLoader for HttpFetcher {
    async fn load(&self, image_ref: &str) -> SpriteResult<PreparedImage> {
        let bytes = self.fetch_bytes(image_ref).await?;
        decode_image(&bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/http.rs"]
mod tests;
