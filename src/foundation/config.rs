use std::path::{Path, PathBuf};

use anyhow::Context as _;
use url::Url;

use crate::foundation::error::{SpriteError, SpriteResult};

/// Wiki origin that detail links are relative to.
pub const WIKI_BASE: &str = "https://wiki.biligame.com";
/// Character gallery page (角色图鉴).
pub const LIST_URL: &str = "https://wiki.biligame.com/xytx/%E8%A7%92%E8%89%B2%E5%9B%BE%E9%89%B4";
/// Host that root-relative image references resolve against.
pub const IMAGE_HOST: &str = "https://patchwiki.biligame.com";
pub const DETAIL_PREFIX: &str = "/xytx/";
/// First header cell of the attribute table on a detail page.
pub const TABLE_MARKER: &str = "名称";
pub const UNNAMED_SENTINEL: &str = "no_name";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 200;

/// Runtime configuration shared by both pipelines.
///
/// Every field has a default matching the fixed endpoints of the wiki, so an empty JSON object
/// (or no config file at all) reproduces the stock behaviour.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteConfig {
    pub wiki_base: String,
    pub list_url: String,
    pub image_host: String,
    pub detail_prefix: String,
    pub table_marker: String,
    pub unnamed_sentinel: String,
    pub output_dir: PathBuf,
    pub metadata_path: PathBuf,
    /// Pause after every detail-page request in the metadata pipeline.
    pub request_delay_ms: u64,
    /// Characters composited concurrently.
    pub jobs: usize,
    /// Layer images fetched ahead of the draw cursor within one character.
    pub layer_jobs: usize,
    pub user_agent: String,
    pub request_timeout_secs: Option<u64>,
    /// Read the list page from disk instead of fetching `list_url`.
    pub list_page_file: Option<PathBuf>,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            wiki_base: WIKI_BASE.to_string(),
            list_url: LIST_URL.to_string(),
            image_host: IMAGE_HOST.to_string(),
            detail_prefix: DETAIL_PREFIX.to_string(),
            table_marker: TABLE_MARKER.to_string(),
            unnamed_sentinel: UNNAMED_SENTINEL.to_string(),
            output_dir: PathBuf::from("output"),
            metadata_path: PathBuf::from("characters.json"),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            jobs: 1,
            layer_jobs: 1,
            user_agent: concat!("xytx-sprites/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: None,
            list_page_file: None,
        }
    }
}

impl SpriteConfig {
    pub fn from_path(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&raw)
            .map_err(|e| SpriteError::config(format!("parse '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SpriteResult<()> {
        self.wiki_base_url()?;
        self.image_host_url()?;
        parse_url("list_url", &self.list_url)?;
        if self.jobs == 0 {
            return Err(SpriteError::config("jobs must be >= 1"));
        }
        if self.layer_jobs == 0 {
            return Err(SpriteError::config("layer_jobs must be >= 1"));
        }
        if self.unnamed_sentinel.trim().is_empty() {
            return Err(SpriteError::config("unnamed_sentinel must not be blank"));
        }
        Ok(())
    }

    pub fn wiki_base_url(&self) -> SpriteResult<Url> {
        parse_url("wiki_base", &self.wiki_base)
    }

    pub fn image_host_url(&self) -> SpriteResult<Url> {
        parse_url("image_host", &self.image_host)
    }
}

fn parse_url(field: &str, raw: &str) -> SpriteResult<Url> {
    Url::parse(raw).map_err(|e| SpriteError::config(format!("{field} '{raw}' is not a url: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
