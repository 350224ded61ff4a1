//! Unique identifier types for the event log generator
//!
//! This module contains the UUID-based case identifier used to key every case
//! and to link events back to the case that owns them.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::{Builder, Uuid};

/// Unique identifier for a case (one process instance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseId(pub Uuid);

impl CaseId {
    /// Create a new case ID from operating system entropy
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a case ID from the given random source
    ///
    /// Draws 16 bytes and lays them out as a version 4 UUID, so a seeded source
    /// yields the same sequence of identifiers on every run.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Access the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for CaseId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.hyphenated())
    }
}

impl<'de> Deserialize<'de> for CaseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
        Ok(CaseId(uuid))
    }
}
