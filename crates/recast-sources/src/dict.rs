// crates/recast-sources/src/dict.rs
// ============================================================================
// Module: Recast Dictionary Source
// Description: Static in-memory template source.
// Purpose: Serve translation data from nested maps built at construction.
// Dependencies: recast-core
// ============================================================================

//! ## Overview
//! `DictSource` holds the full translation universe in nested `BTreeMap`s:
//! locale, then canonical template, then translated template. It is the
//! simplest backend and the delegation target for the file-backed sources
//! once their files are parsed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use recast_core::Locale;
use recast_core::SourceError;
use recast_core::TemplateSource;

// ============================================================================
// SECTION: Dictionary Source
// ============================================================================

/// In-memory template source backed by nested maps.
///
/// # Invariants
/// - Contents are fixed at construction; the source is never mutated.
#[derive(Debug, Clone, Default)]
pub struct DictSource {
    /// Translation entries keyed by locale, then by canonical template.
    translations: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl DictSource {
    /// Creates a dictionary source from prebuilt translation maps.
    #[must_use]
    pub const fn new(translations: BTreeMap<Locale, BTreeMap<String, String>>) -> Self {
        Self {
            translations,
        }
    }
}

impl From<BTreeMap<Locale, BTreeMap<String, String>>> for DictSource {
    fn from(translations: BTreeMap<Locale, BTreeMap<String, String>>) -> Self {
        Self::new(translations)
    }
}

impl TemplateSource for DictSource {
    fn translations(&self, locale: &Locale) -> Result<BTreeMap<String, String>, SourceError> {
        self.translations.get(locale).cloned().ok_or_else(|| SourceError::LocaleNotFound {
            locale: locale.clone(),
        })
    }

    fn gettext(&self, template: &str, locale: &Locale) -> Result<String, SourceError> {
        let entries =
            self.translations.get(locale).ok_or_else(|| SourceError::LocaleNotFound {
                locale: locale.clone(),
            })?;
        entries.get(template).cloned().ok_or_else(|| SourceError::TemplateNotFound {
            locale: locale.clone(),
            template: template.to_string(),
        })
    }

    fn locales(&self) -> Vec<Locale> {
        self.translations.keys().cloned().collect()
    }
}
