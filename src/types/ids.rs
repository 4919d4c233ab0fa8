use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Opaque string identifier, typed by what it names.
///
/// Identifiers are assigned by the caller and never validated: they exist for
/// addressing and debugging, and are not reflected in emitted payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParentMarker;

/// Identifier of a content unit.
pub type UnitId = Id<UnitMarker>;
/// Identifier of the logical container a unit belongs under.
pub type ParentId = Id<ParentMarker>;

impl<T> Id<T> {
    /// Wrap a caller-supplied identifier as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// The "no parent" sentinel.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Create a new random v4 UUID ID
    pub fn new_v4() -> Self {
        Self::new(Uuid::new_v4().as_simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<T> From<String> for Id<T> {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
