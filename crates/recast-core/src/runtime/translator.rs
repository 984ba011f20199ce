// crates/recast-core/src/runtime/translator.rs
// ============================================================================
// Module: Recast Translator
// Description: Batch translation of error records across locales.
// Purpose: Tie pattern lookup, source lookup, extraction, and rendering
//          together behind one immutable engine value.
// Dependencies: crate::core, crate::interfaces, crate::runtime
// ============================================================================

//! ## Overview
//! A [`Translator`] is constructed once per source and default locale. At
//! construction it fetches the default locale's full translation set and
//! compiles the pattern cache; that cache permanently fixes the universe of
//! known templates. Every `translate` call resolves *rendering* against the
//! caller-supplied locale while *matching* always runs against the
//! construction-time universe, so which messages match never depends on the
//! requested locale.
//!
//! After construction the engine is read-only and safe to share across
//! threads (given a `Sync` source); construction itself must complete before
//! any concurrent use begins.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ErrorRecord;
use crate::core::Locale;
use crate::interfaces::SourceError;
use crate::interfaces::TemplateSource;
use crate::runtime::pattern::PatternError;
use crate::runtime::pattern::PatternSet;
use crate::runtime::render::RenderError;
use crate::runtime::render::render;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Translation failures surfaced by [`Translator`].
///
/// # Invariants
/// - Variants are stable for programmatic handling. An unmatched message is
///   never an error; it falls through as the original text.
#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    /// The source could not supply requested translation data.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// A canonical template could not be compiled into a matching pattern.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// A translated template could not be rendered with the captured values.
    #[error(transparent)]
    Render(#[from] RenderError),
}

// ============================================================================
// SECTION: Translator
// ============================================================================

/// Template-aware translation engine for validation error records.
///
/// # Invariants
/// - The compiled pattern cache is built once, from the default locale's
///   translation set, and is immutable thereafter.
#[derive(Debug)]
pub struct Translator<S> {
    /// Provider of translation data.
    source: S,
    /// Locale whose translation set defines the known-template universe.
    default_locale: Locale,
    /// Immutable compiled pattern cache.
    patterns: PatternSet,
}

impl<S: TemplateSource> Translator<S> {
    /// Builds a translator over `source` with the given default locale.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Source`] when the default locale is unknown
    /// to the source and [`TranslateError::Pattern`] when one of its canonical
    /// templates cannot be compiled.
    pub fn new(source: S, default_locale: impl Into<Locale>) -> Result<Self, TranslateError> {
        let default_locale = default_locale.into();
        let translations = source.translations(&default_locale)?;
        let patterns = PatternSet::compile(translations.keys().map(String::as_str))?;
        Ok(Self {
            source,
            default_locale,
            patterns,
        })
    }

    /// Returns the construction-time default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Enumerates the locales configured in the underlying source.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        self.source.locales()
    }

    /// Returns the immutable compiled pattern cache.
    #[must_use]
    pub const fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Translates one formatted message into the requested locale.
    ///
    /// A message that matches no known template is returned unchanged; that
    /// pass-through is the engine's only local recovery.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Source`] when the matched template has no
    /// translation for `locale` (or the locale is unknown), and
    /// [`TranslateError::Render`] when the translated template requires more
    /// values than the message yielded.
    pub fn translate_message(
        &self,
        message: &str,
        locale: &Locale,
    ) -> Result<String, TranslateError> {
        let Some(compiled) = self.patterns.find(message) else {
            return Ok(message.to_string());
        };
        let translated = self.source.gettext(compiled.template(), locale)?;
        let Some(values) = compiled.extract(message) else {
            return Ok(message.to_string());
        };
        Ok(render(&translated, &values)?)
    }

    /// Translates a batch of error records into the requested locale.
    ///
    /// The output preserves input order exactly and every record's extra
    /// fields byte-for-byte; only `msg` is rewritten. Records whose message
    /// matches no known template are copied unchanged, and an unknown locale
    /// therefore only surfaces when some record actually matches.
    ///
    /// The first lookup or rendering failure aborts the whole batch. Callers
    /// that want per-record resilience can invoke
    /// [`translate_message`](Self::translate_message) per record and collect
    /// individual results instead.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TranslateError`] produced by any record.
    pub fn translate(
        &self,
        errors: &[ErrorRecord],
        locale: &Locale,
    ) -> Result<Vec<ErrorRecord>, TranslateError> {
        let mut translated = Vec::with_capacity(errors.len());
        for record in errors {
            let msg = self.translate_message(&record.msg, locale)?;
            translated.push(record.with_msg(msg));
        }
        Ok(translated)
    }
}
