//! Reference Model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Id of another document
///
/// Accepts `"abc"` as well as `{ "_id": "abc", ... }` on the wire and always
/// serializes back as the bare id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef(pub String);

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRef {
    Id(String),
    Doc {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawRef::deserialize(deserializer)? {
            RawRef::Id(id) | RawRef::Doc { id } => Self(id),
        })
    }
}

impl Serialize for EntityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Compare an optional reference against an id
pub fn ref_matches(reference: Option<&EntityRef>, id: &str) -> bool {
    reference.is_some_and(|r| r.0 == id)
}
