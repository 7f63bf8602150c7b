//! Server-defined formatted sections.
//!
//! On the wire a section is a single-entry JSON object mapping the section
//! title to an object of fields:
//!
//! ```json
//! {"ambrosus.event.info": {"name": "Harvest", "quantity": 12}}
//! ```
//!
//! Field order is preserved as received.

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title of the section that is rendered as a map instead of key/value rows.
pub const LOCATION_SECTION_TITLE: &str = "ambrosus.event.location";

/// One named group of fields describing an aspect of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FormattedSection {
    pub title: String,
    pub fields: Map<String, Value>,
}

impl FormattedSection {
    /// Creates a section with no fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Map::new(),
        }
    }

    /// Appends a field, keeping insertion order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Number of fields in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether this is the location section.
    #[must_use]
    pub fn is_location(&self) -> bool {
        self.title == LOCATION_SECTION_TITLE
    }

    /// Parses an ordered list of sections from JSON.
    pub fn list_from_json(json: &str) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<Map<String, Value>> for FormattedSection {
    type Error = Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(Error::InvalidSection { entries: map.len() });
        }
        let Some((title, value)) = map.into_iter().next() else {
            return Err(Error::InvalidSection { entries: 0 });
        };
        match value {
            Value::Object(fields) => Ok(Self { title, fields }),
            _ => Err(Error::InvalidSectionFields { title }),
        }
    }
}

impl From<FormattedSection> for Map<String, Value> {
    fn from(section: FormattedSection) -> Self {
        let mut map = Map::new();
        map.insert(section.title, Value::Object(section.fields));
        map
    }
}
