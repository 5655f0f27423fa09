use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque row identifier assigned by the remote store.
///
/// Tables use integer keys or uuids depending on how they were created, so
/// the id deserializes from either a JSON string or a JSON number and is kept
/// as text. Integer ids serialize back as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for RowId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<i64>() {
            Ok(n) if n.to_string() == self.0 => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for RowId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de;

        struct IdVisitor;
        impl de::Visitor<'_> for IdVisitor {
            type Value = RowId;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer row id")
            }
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RowId, E> {
                Ok(RowId(v.to_string()))
            }
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RowId, E> {
                Ok(RowId(v.to_string()))
            }
            fn visit_str<E: de::Error>(self, v: &str) -> Result<RowId, E> {
                Ok(RowId(v.to_string()))
            }
            fn visit_string<E: de::Error>(self, v: String) -> Result<RowId, E> {
                Ok(RowId(v))
            }
        }
        deserializer.deserialize_any(IdVisitor)
    }
}
