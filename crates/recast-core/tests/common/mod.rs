// crates/recast-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared helpers for recast-core tests.
// Purpose: Provide a reusable in-memory template source for engine tests.
// Dependencies: recast-core
// ============================================================================

//! ## Overview
//! Provides an in-memory [`TemplateSource`] backed by nested maps so engine
//! tests can declare translation data inline.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only helpers; not every test binary uses every helper."
)]

use std::collections::BTreeMap;

use recast_core::Locale;
use recast_core::SourceError;
use recast_core::TemplateSource;

// ============================================================================
// SECTION: Map Source
// ============================================================================

/// In-memory template source for tests.
#[derive(Debug, Default, Clone)]
pub struct MapSource {
    /// Translation entries keyed by locale, then by canonical template.
    locales: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl MapSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a locale with the given canonical/translated entries.
    pub fn with_locale(mut self, locale: &str, entries: &[(&str, &str)]) -> Self {
        let map = entries
            .iter()
            .map(|(template, translated)| (template.to_string(), translated.to_string()))
            .collect();
        self.locales.insert(Locale::new(locale), map);
        self
    }
}

impl TemplateSource for MapSource {
    fn translations(&self, locale: &Locale) -> Result<BTreeMap<String, String>, SourceError> {
        self.locales.get(locale).cloned().ok_or_else(|| SourceError::LocaleNotFound {
            locale: locale.clone(),
        })
    }

    fn gettext(&self, template: &str, locale: &Locale) -> Result<String, SourceError> {
        let entries = self.locales.get(locale).ok_or_else(|| SourceError::LocaleNotFound {
            locale: locale.clone(),
        })?;
        entries.get(template).cloned().ok_or_else(|| SourceError::TemplateNotFound {
            locale: locale.clone(),
            template: template.to_string(),
        })
    }

    fn locales(&self) -> Vec<Locale> {
        self.locales.keys().cloned().collect()
    }
}
