//! Collection of instruments forming one `.cki` document

use super::{Instrument, InstrumentMetadata};
use crate::error::Result;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Top-level key of the document
pub const ROOT_KEY: &str = "instrument_data";

/// Ordered mapping from instrument name to metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentDefinition {
    instruments: IndexMap<String, InstrumentMetadata>,
}

#[derive(Serialize)]
struct Document<'a> {
    instrument_data: &'a InstrumentDefinition,
}

impl InstrumentDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instrument. A duplicate name replaces the earlier metadata in
    /// place and returns it.
    pub fn add(&mut self, instrument: Instrument) -> Option<InstrumentMetadata> {
        let Instrument { name, metadata } = instrument;
        self.instruments.insert(name, metadata)
    }

    pub fn get(&self, name: &str) -> Option<&InstrumentMetadata> {
        self.instruments.get(name)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.instruments.keys().map(String::as_str)
    }

    /// Build the document tree, wrapped under [`ROOT_KEY`]
    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(Document {
            instrument_data: self,
        })?)
    }
}

impl From<Instrument> for InstrumentDefinition {
    fn from(instrument: Instrument) -> Self {
        let mut definition = Self::new();
        definition.add(instrument);
        definition
    }
}

impl FromIterator<Instrument> for InstrumentDefinition {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        let mut definition = Self::new();
        for instrument in iter {
            definition.add(instrument);
        }
        definition
    }
}

impl Serialize for InstrumentDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.instruments.len()))?;
        for (name, metadata) in &self.instruments {
            map.serialize_entry(name, metadata)?;
        }
        map.end()
    }
}
