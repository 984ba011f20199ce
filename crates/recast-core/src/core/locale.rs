// crates/recast-core/src/core/locale.rs
// ============================================================================
// Module: Recast Locale Identifier
// Description: Opaque locale identifier with a stable wire form.
// Purpose: Provide a strongly typed locale key for translation lookups.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Locales are opaque strings such as `en_US` or `pt_BR`. The engine applies
//! no normalization or validation; the set of valid locales is whatever the
//! configured [`TemplateSource`](crate::interfaces::TemplateSource) reports.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Opaque locale identifier.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Creates a new locale identifier.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    /// Returns the locale as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
