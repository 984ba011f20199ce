// crates/recast-sources/src/json.rs
// ============================================================================
// Module: Recast JSON Directory Source
// Description: Template source backed by per-locale JSON translation files.
// Purpose: Load `<locale>.json` files eagerly into an in-memory source.
// Dependencies: recast-core, serde_json, crate::dict
// ============================================================================

//! ## Overview
//! A translations directory holds one flat JSON object per locale, named
//! `<locale>.json` (for example `pt_BR.json`), mapping canonical templates to
//! translated templates. All files are read and parsed at construction; I/O
//! never happens on the lookup path. Non-JSON directory entries are ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use recast_core::Locale;
use recast_core::SourceError;
use recast_core::TemplateSource;

use crate::LoadError;
use crate::dict::DictSource;

// ============================================================================
// SECTION: JSON Directory Source
// ============================================================================

/// Template source loaded from a directory of `<locale>.json` files.
///
/// # Invariants
/// - All translation data is resident in memory after construction.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    /// Parsed translation data, served through the dictionary source.
    inner: DictSource,
}

impl JsonDirSource {
    /// Loads every `<locale>.json` file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] when the directory or a file cannot be read
    /// and [`LoadError::Parse`] when a file is not a flat string-to-string
    /// JSON object.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|err| LoadError::Io {
            path: dir.display().to_string(),
            message: err.to_string(),
        })?;

        let mut translations = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|err| LoadError::Io {
                path: dir.display().to_string(),
                message: err.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let contents = std::fs::read_to_string(&path).map_err(|err| LoadError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
            let entries: BTreeMap<String, String> =
                serde_json::from_str(&contents).map_err(|err| LoadError::Parse {
                    path: path.display().to_string(),
                    message: err.to_string(),
                })?;
            translations.insert(Locale::new(stem), entries);
        }

        Ok(Self {
            inner: DictSource::new(translations),
        })
    }
}

impl TemplateSource for JsonDirSource {
    fn translations(&self, locale: &Locale) -> Result<BTreeMap<String, String>, SourceError> {
        self.inner.translations(locale)
    }

    fn gettext(&self, template: &str, locale: &Locale) -> Result<String, SourceError> {
        self.inner.gettext(template, locale)
    }

    fn locales(&self) -> Vec<Locale> {
        self.inner.locales()
    }
}
