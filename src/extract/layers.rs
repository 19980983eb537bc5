use url::Url;

use crate::{
    composition::model::{Character, LayerDescriptor},
    foundation::config::SpriteConfig,
    foundation::error::SpriteResult,
    markup::dom::{Document, NodeId},
    markup::style,
};

/// Class carried by each character's container on the gallery page.
pub const CONTAINER_CLASS: &str = "divsort";

/// `bottom`/`left` offsets read from an inline style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub bottom: i64,
    pub left: i64,
}

/// Missing or unparsable offsets fall back to 0.
pub fn parse_position(style_attr: &str) -> Position {
    let px = |name: &str| {
        style::property(style_attr, name)
            .and_then(style::parse_px)
            .unwrap_or(0)
    };
    Position {
        bottom: px("bottom"),
        left: px("left"),
    }
}

pub fn is_absolutely_positioned(style_attr: &str) -> bool {
    style::property(style_attr, "position").is_some_and(|v| v.eq_ignore_ascii_case("absolute"))
}

/// Turns the gallery page into characters with their ordered layer stacks.
#[derive(Clone, Debug)]
pub struct LayerExtractor {
    image_host: Url,
    unnamed: String,
}

impl LayerExtractor {
    pub fn new(config: &SpriteConfig) -> SpriteResult<Self> {
        Ok(Self {
            image_host: config.image_host_url()?,
            unnamed: config.unnamed_sentinel.clone(),
        })
    }

    pub fn extract(&self, page: &str) -> Vec<Character> {
        self.extract_document(&Document::parse(page))
    }

    /// Characters in page order. Containers without a single usable layer are dropped.
    pub fn extract_document(&self, doc: &Document) -> Vec<Character> {
        doc.find_all_by_class(doc.root(), CONTAINER_CLASS)
            .into_iter()
            .map(|container| self.character(doc, container))
            .filter(|c| {
                if c.layers.is_empty() {
                    tracing::debug!(character = %c.name, "no layers, dropping");
                }
                !c.layers.is_empty()
            })
            .collect()
    }

    fn character(&self, doc: &Document, container: NodeId) -> Character {
        let name = doc
            .find_first_by_tag(container, "a")
            .and_then(|a| doc.element(a))
            .and_then(|a| a.attr("title"))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.unnamed.as_str())
            .to_string();

        let layers = doc
            .descendant_elements(container)
            .filter(|(_, el)| {
                el.is("div") && el.attr("style").is_some_and(is_absolutely_positioned)
            })
            .filter_map(|(id, _)| self.layer(doc, id))
            .collect();

        Character { name, layers }
    }

    fn layer(&self, doc: &Document, candidate: NodeId) -> Option<LayerDescriptor> {
        let style_attr = doc.element(candidate)?.attr("style").unwrap_or_default();
        let Position { bottom, left } = parse_position(style_attr);

        let img = doc
            .find_first_by_tag(candidate, "img")
            .and_then(|id| doc.element(id))?;
        let image_ref = self.resolve_image_ref(img.attr("src")?)?;

        let dim = |name: &str| img.attr(name).and_then(style::parse_dimension).unwrap_or(0);

        Some(LayerDescriptor {
            image_ref,
            bottom,
            left,
            width: dim("width"),
            height: dim("height"),
        })
    }

    /// Absolute, fetchable form of an `<img src>`; `None` when it cannot be resolved.
    pub fn resolve_image_ref(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.starts_with("//") {
            let absolute = format!("https:{raw}");
            return Url::parse(&absolute).is_ok().then_some(absolute);
        }
        if raw.starts_with('/') {
            return self.image_host.join(raw).ok().map(String::from);
        }
        Url::parse(raw).is_ok().then(|| raw.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/extract/layers.rs"]
mod tests;
