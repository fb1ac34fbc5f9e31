//! Opaque attribute bags returned by a backend.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{FluentQueryError, Result};

/// One entity record: a logical name, an optional id and a string-keyed map
/// of dynamically typed attribute values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Record {
    pub logical_name: String,
    pub id: Option<Uuid>,
    pub attributes: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Reads an attribute as `T`; `Ok(None)` when the attribute is absent or null.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.attributes.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|e| FluentQueryError::Mapping(format!("attribute '{name}': {e}"))),
        }
    }
}

/// Types a retrieved [`Record`] can be converted into.
pub trait FromRecord: Sized {
    fn from_record(record: Record) -> Result<Self>;
}

impl FromRecord for Record {
    fn from_record(record: Record) -> Result<Self> {
        Ok(record)
    }
}

/// Deserializes a record's attribute bag into `T`.
///
/// Intended for `FromRecord` impls of plain serde structs:
///
/// ```ignore
/// impl FromRecord for Account {
///     fn from_record(record: Record) -> Result<Self> {
///         deserialize_record(record)
///     }
/// }
/// ```
pub fn deserialize_record<T: DeserializeOwned>(record: Record) -> Result<T> {
    let Record {
        logical_name,
        attributes,
        ..
    } = record;
    let object = attributes.into_iter().collect::<serde_json::Map<_, _>>();
    serde_json::from_value(Value::Object(object))
        .map_err(|e| FluentQueryError::Mapping(format!("{logical_name}: {e}")))
}
