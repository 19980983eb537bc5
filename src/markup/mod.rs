//! HTML plumbing: an owned DOM built with html5ever plus inline-style helpers.

/// Arena DOM and element queries.
pub mod dom;
/// Inline style declarations and CSS pixel lengths.
pub mod style;
