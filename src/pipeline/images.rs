use std::path::{Path, PathBuf};

use futures::StreamExt as _;

use crate::{
    composition::model::Character,
    foundation::error::{SpriteError, SpriteResult},
    pipeline::SpritePipeline,
};

/// What an image run produced. Per-character failures never abort the run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageRunReport {
    pub written: Vec<PathBuf>,
    /// Names of characters that produced no file.
    pub failed: Vec<String>,
    pub layers_skipped: usize,
}

enum Outcome {
    Written { path: PathBuf, layers_skipped: usize },
    Failed { name: String, layers_skipped: usize },
}

/// File name for a character's PNG. Path separators and characters that are invalid on common
/// filesystems become `_`.
pub fn output_file_name(name: &str, fallback: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = match cleaned.as_str() {
        "" | "." | ".." => fallback,
        s => s,
    };
    format!("{stem}.png")
}

impl SpritePipeline {
    /// Fetch the gallery, composite every character and write one PNG each.
    ///
    /// Only a failure to obtain the gallery page is returned as an error.
    pub async fn run_images(&self) -> SpriteResult<ImageRunReport> {
        let page = self.list_page().await?;
        let characters = self.extract(&page);
        tracing::info!(characters = characters.len(), "extracted characters");
        self.render_all(&characters).await
    }

    /// Composite and write `characters` into the output directory.
    pub async fn render_all(&self, characters: &[Character]) -> SpriteResult<ImageRunReport> {
        let out_dir = self.config.output_dir.as_path();
        if let Err(err) = tokio::fs::create_dir_all(out_dir).await {
            tracing::debug!(path = %out_dir.display(), error = %err, "create output dir");
        }

        let outcomes: Vec<Outcome> = futures::stream::iter(
            characters
                .iter()
                .map(|character| self.render_one(character, out_dir)),
        )
        .buffer_unordered(self.config.jobs.max(1))
        .collect()
        .await;

        let mut report = ImageRunReport::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Written {
                    path,
                    layers_skipped,
                } => {
                    report.written.push(path);
                    report.layers_skipped += layers_skipped;
                }
                Outcome::Failed {
                    name,
                    layers_skipped,
                } => {
                    report.failed.push(name);
                    report.layers_skipped += layers_skipped;
                }
            }
        }
        Ok(report)
    }

    async fn render_one(&self, character: &Character, out_dir: &Path) -> Outcome {
        let sprite = match self.compose(character).await {
            Ok(sprite) => sprite,
            Err(err) => {
                tracing::warn!(character = %character.name, error = %err, "failed to composite");
                return Outcome::Failed {
                    name: character.name.clone(),
                    layers_skipped: 0,
                };
            }
        };

        let path = out_dir.join(output_file_name(
            &character.name,
            &self.config.unnamed_sentinel,
        ));
        let written = match sprite.raster.encode_png() {
            Ok(png) => tokio::fs::write(&path, png).await.map_err(SpriteError::from),
            Err(err) => Err(err),
        };

        match written {
            Ok(()) => {
                tracing::info!(
                    character = %character.name,
                    path = %path.display(),
                    width = sprite.geometry.width,
                    height = sprite.geometry.height,
                    "saved image"
                );
                Outcome::Written {
                    path,
                    layers_skipped: sprite.layers_skipped,
                }
            }
            Err(err) => {
                tracing::error!(character = %character.name, path = %path.display(), error = %err, "failed to write image");
                Outcome::Failed {
                    name: character.name.clone(),
                    layers_skipped: sprite.layers_skipped,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/images.rs"]
mod tests;
