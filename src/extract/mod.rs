//! Pure extraction over parsed pages: no I/O happens here.

/// Character layer stacks from the gallery page.
pub mod layers;
/// Detail-page discovery and attribute tables.
pub mod metadata;
