// crates/recast-core/src/core/record.rs
// ============================================================================
// Module: Recast Error Record
// Description: Externally-defined validation error structure.
// Purpose: Carry the message field plus arbitrary untouched extra fields.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! An [`ErrorRecord`] is whatever shape the originating validation layer
//! emits: a `msg` field plus arbitrary additional fields. The engine replaces
//! `msg` during translation and never inspects or alters anything else. Extra
//! fields are held in a `BTreeMap` so serialization order is deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Error Record
// ============================================================================

/// A single validation error as produced by an upstream validation layer.
///
/// # Invariants
/// - `fields` is carried through translation byte-for-byte; only `msg` is
///   ever rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The formatted, human-readable error message.
    pub msg: String,
    /// All remaining fields of the record, preserved untouched.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ErrorRecord {
    /// Creates a record with the given message and no extra fields.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns a copy of this record with an additional preserved field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Returns a copy of this record with `msg` replaced.
    #[must_use]
    pub fn with_msg(&self, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            fields: self.fields.clone(),
        }
    }
}
