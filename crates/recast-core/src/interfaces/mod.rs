// crates/recast-core/src/interfaces/mod.rs
// ============================================================================
// Module: Recast Interfaces
// Description: Backend-agnostic contract for translation data providers.
// Purpose: Define the surface the engine consumes for locale and template data.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! A [`TemplateSource`] supplies translation data: the full canonical-to-
//! translated mapping for a locale, single-template lookup, and locale
//! enumeration. Implementations must be deterministic; the engine builds its
//! permanent template universe from one `translations` call at construction
//! and never refreshes it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::Locale;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Translation data lookup errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling; an unknown locale and an
///   unknown template are always distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The requested locale is not configured in the source.
    #[error("locale not found: {locale}")]
    LocaleNotFound {
        /// The locale that was requested.
        locale: Locale,
    },
    /// The locale exists but carries no entry for the requested template.
    #[error("no translation for template {template:?} in locale {locale}")]
    TemplateNotFound {
        /// The locale that was requested.
        locale: Locale,
        /// The canonical template that had no translation entry.
        template: String,
    },
}

// ============================================================================
// SECTION: Template Source
// ============================================================================

/// Backend-agnostic provider of translation data.
pub trait TemplateSource {
    /// Returns the full canonical-to-translated mapping for a locale.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::LocaleNotFound`] when the locale is unknown.
    fn translations(&self, locale: &Locale) -> Result<BTreeMap<String, String>, SourceError>;

    /// Looks up the translated template for one canonical template.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::LocaleNotFound`] when the locale is unknown and
    /// [`SourceError::TemplateNotFound`] when the locale exists but carries no
    /// entry for `template`.
    fn gettext(&self, template: &str, locale: &Locale) -> Result<String, SourceError>;

    /// Enumerates the configured locales in a stable order.
    fn locales(&self) -> Vec<Locale>;
}
