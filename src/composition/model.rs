use serde::ser::SerializeMap as _;

/// One positioned image of a character sprite.
///
/// `bottom` and `left` are measured from the bottom-left corner of the character's frame, as
/// published by the page's absolute positioning.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LayerDescriptor {
    pub image_ref: String,
    pub bottom: i64,
    pub left: i64,
    pub width: u32,
    pub height: u32,
}

impl LayerDescriptor {
    pub fn right(&self) -> i64 {
        self.left.saturating_add(i64::from(self.width))
    }

    pub fn top(&self) -> i64 {
        self.bottom.saturating_add(i64::from(self.height))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Character {
    pub name: String,
    pub layers: Vec<LayerDescriptor>, // paint order, first drawn first
}

/// Metadata scraped from a character's detail page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CharacterRecord {
    pub name: String,
    pub url: String,
    pub info: InfoTable,
}

/// Insertion-ordered attribute table. Serializes as a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoTable {
    entries: Vec<(String, String)>,
}

impl InfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl serde::Serialize for InfoTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
