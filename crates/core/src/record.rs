//! Record model and the full-text marker
//!
//! A [`Record`] maps field names to [`FieldValue`]s. The marker is a
//! closed two-case union rather than a runtime probe: the indexing engine
//! pattern-matches it exhaustively, so no call site can confuse an opaque
//! string with full-text-eligible text.
//!
//! # Wire shape
//!
//! On the JSON wire an indexed field is the object
//! `{"$lexi.indexed": true, "$lexi.value": "<text>"}`; any other JSON
//! value deserializes as an opaque [`Value`].

use crate::value::Value;
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker key flagging a field as full-text eligible on the wire
const MARKER_FLAG: &str = "$lexi.indexed";
/// Marker key carrying the indexed text on the wire
const MARKER_TEXT: &str = "$lexi.value";

// ============================================================================
// FieldValue
// ============================================================================

/// A single record field: opaque scalar or full-text-eligible text
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Stored verbatim, never tokenized
    Scalar(Value),
    /// Tokenized and fed to the inverted index
    Indexed(String),
}

impl FieldValue {
    /// Create a full-text-eligible field
    pub fn indexed(text: impl Into<String>) -> Self {
        FieldValue::Indexed(text.into())
    }

    /// Create an opaque field
    pub fn scalar(value: impl Into<Value>) -> Self {
        FieldValue::Scalar(value.into())
    }

    /// Text visible to substring scans: indexed text or a string scalar.
    /// Non-string scalars have no text and are skipped by every search.
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Indexed(text) => Some(text),
            FieldValue::Scalar(value) => value.as_str(),
        }
    }

    /// The text to tokenize, present only on marked fields
    pub fn indexed_text(&self) -> Option<&str> {
        match self {
            FieldValue::Indexed(text) => Some(text),
            FieldValue::Scalar(_) => None,
        }
    }

    fn from_wire(value: Value) -> Self {
        if let Value::Object(map) = &value {
            if map.len() == 2 && map.get(MARKER_FLAG) == Some(&Value::Bool(true)) {
                if let Some(Value::String(text)) = map.get(MARKER_TEXT) {
                    return FieldValue::Indexed(text.clone());
                }
            }
        }
        FieldValue::Scalar(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Scalar(value) => value.serialize(serializer),
            FieldValue::Indexed(text) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(MARKER_FLAG, &true)?;
                map.serialize_entry(MARKER_TEXT, text)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(FieldValue::from_wire(Value::deserialize(deserializer)?))
    }
}

// ============================================================================
// Record
// ============================================================================

/// A record: field name → field value, uniquely identified by its store key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(FxHashMap<String, FieldValue>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record(FxHashMap::default())
    }

    /// Set a field, replacing any previous value for that name
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.0.insert(field.into(), value);
    }

    /// Builder-style [`insert`](Record::insert)
    pub fn with(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.insert(field, value);
        self
    }

    /// Look up a field by name
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all fields
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over the marked fields only, as `(name, text)` pairs
    pub fn indexed_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(name, value)| Some((name.as_str(), value.indexed_text()?)))
    }

    /// Copy with every full-text marker unwrapped to a plain string scalar.
    /// This is the shape readers receive back from the store.
    pub fn normalized(&self) -> Record {
        self.0
            .iter()
            .map(|(name, value)| {
                let plain = match value {
                    FieldValue::Indexed(text) => {
                        FieldValue::Scalar(Value::String(text.clone()))
                    }
                    scalar => scalar.clone(),
                };
                (name.clone(), plain)
            })
            .collect()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
