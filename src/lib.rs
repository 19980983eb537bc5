#![forbid(unsafe_code)]
//! Scrapes layered character sprites from the XYTX wiki gallery and composites each character's
//! layers into a single PNG. A second pipeline collects every character's attribute table into a
//! JSON document.
//!
//! The pure stages (markup extraction, canvas geometry, pixel compositing) take no I/O; fetching
//! goes through the [`PageFetcher`] and [`ImageLoader`] seams so tests can substitute in-memory
//! sources.

pub mod assets;
pub mod composition;
pub mod extract;
pub mod fetch;
pub mod foundation;
pub mod markup;
pub mod pipeline;
pub mod render;

pub use assets::decode::{PreparedImage, decode_image};
pub use assets::loader::ImageLoader;
pub use composition::model::{Character, CharacterRecord, InfoTable, LayerDescriptor};
pub use extract::layers::{LayerExtractor, Position, parse_position};
pub use extract::metadata::MetadataExtractor;
pub use fetch::{PageFetcher, http::HttpFetcher};
pub use foundation::config::SpriteConfig;
pub use foundation::error::{SpriteError, SpriteResult};
pub use markup::dom::Document;
pub use pipeline::SpritePipeline;
pub use pipeline::images::{ImageRunReport, output_file_name};
pub use pipeline::metadata::{metadata_json, write_metadata};
pub use render::composite::{ComposedSprite, compose, over};
pub use render::geometry::{CanvasGeometry, canvas_geometry, draw_origin};
pub use render::raster::Raster;
