/// Characters, their layers and scraped metadata records.
pub mod model;
