//! Blueprint Entity
//!
//! One catalog entry. Records are supplied by the page data set and never
//! mutated after load.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text rendering of a blueprint's `typeId`.
///
/// The data set ships ids as JSON numbers, hand-edited entries sometimes as
/// strings. Both collapse to the same text so comparisons stay textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlueprintId(String);

impl BlueprintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlueprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlueprintId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for BlueprintId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for BlueprintId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct BlueprintIdVisitor;

impl<'de> Visitor<'de> for BlueprintIdVisitor {
    type Value = BlueprintId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a typeId as string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(BlueprintId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(BlueprintId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BlueprintId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BlueprintId(v.to_string()))
    }

    // JS numbers arrive as f64; integral values must not render as "1234.0"
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() && v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
            Ok(BlueprintId((v as i64).to_string()))
        } else {
            Ok(BlueprintId(v.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for BlueprintId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BlueprintIdVisitor)
    }
}

/// A blueprint original (BPO) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    /// Unique identifier (uniqueness assumed, not enforced)
    pub type_id: BlueprintId,
    /// Display name
    pub name: String,
    /// Category the blueprint is filed under
    pub category: String,
    /// Market group, informational only
    #[serde(default)]
    pub group: String,
}

impl Blueprint {
    pub fn new(type_id: impl Into<String>, name: &str, category: &str, group: &str) -> Self {
        Self {
            type_id: BlueprintId::new(type_id),
            name: name.to_string(),
            category: category.to_string(),
            group: group.to_string(),
        }
    }

    /// Lower-cased name used for search and ordering
    pub fn folded_name(&self) -> String {
        self.name.to_lowercase()
    }
}
