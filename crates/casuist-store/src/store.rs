//! Precedent store: load, hold, and look up the precedent collection.

use casuist_core::{Error, Precedent, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Holds the loaded precedent collection. Read-only after construction;
/// downstream components receive borrowed precedents and must deep-copy
/// anything they adapt.
#[derive(Clone, Debug, Default)]
pub struct PrecedentStore {
    precedents: Vec<Precedent>,
}

impl PrecedentStore {
    /// Load a precedent database from a JSON file.
    ///
    /// Accepts either a top-level array of precedent records or an object
    /// with a `precedents` array. Individual malformed entries are skipped
    /// with a warning; only I/O or top-level JSON failures are errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let store = Self::from_reader(BufReader::new(file))?;
        debug!(
            precedents = store.len(),
            path = %path.display(),
            "precedent database loaded"
        );
        Ok(store)
    }

    /// Build a store from any JSON reader.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Build a store from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let entries = match value {
            serde_json::Value::Array(entries) => entries,
            serde_json::Value::Object(mut map) => match map.remove("precedents") {
                Some(serde_json::Value::Array(entries)) => entries,
                _ => {
                    return Err(Error::database(
                        "expected a precedent array or an object with a 'precedents' array",
                    ))
                }
            },
            _ => return Err(Error::database("expected a precedent array")),
        };

        let mut precedents = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Precedent>(entry) {
                Ok(precedent) => precedents.push(precedent),
                Err(err) => {
                    warn!(index, error = %err, "skipping malformed precedent entry");
                }
            }
        }
        Ok(Self { precedents })
    }

    /// Construct directly from precedents (used by tests and embedders).
    pub fn from_precedents(precedents: Vec<Precedent>) -> Self {
        Self { precedents }
    }

    /// Look up a precedent by id.
    pub fn get(&self, id: &str) -> Option<&Precedent> {
        self.precedents.iter().find(|p| p.id == id)
    }

    /// The full ordered collection.
    pub fn precedents(&self) -> &[Precedent] {
        &self.precedents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Precedent> {
        self.precedents.iter()
    }

    pub fn len(&self) -> usize {
        self.precedents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precedents.is_empty()
    }
}
