//! Frontend Models
//!
//! Data structures matching the backend's JSON shapes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend identifier. Opaque to the frontend: the backend may send a
/// string (`"65a1f0c2"`) or a number (`3`); it is kept as text and written
/// back in the form it arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EntityId {
    value: String,
    numeric: bool,
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self { value: value.to_string(), numeric: false }
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self { value, numeric: false }
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self { value: value.to_string(), numeric: true }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self { value: value.to_string(), numeric: true }
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_numeric() {
            if let Ok(n) = self.value.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
            if let Ok(n) = self.value.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
        }
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EntityId::from(s),
            RawId::Unsigned(n) => EntityId::from(n),
            RawId::Signed(n) => EntityId::from(n),
        })
    }
}

/// Lightweight list representation for the overview screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: EntityId,
    pub name: String,
    /// Computed by the backend; never derived locally
    #[serde(default)]
    pub item_count: Option<u32>,
}

/// Full list including its items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDetail {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ListDetail {
    pub fn item(&self, item_id: &EntityId) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_str() == item_id.as_str())
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub label: String,
    pub checked: bool,
}

/// Body returned by `POST /lists`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewListResponse {
    pub id: EntityId,
    pub name: String,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewList<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem<'a> {
    pub label: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckedStateUpdate<'a> {
    pub item_id: &'a EntityId,
    pub checked_state: bool,
}
