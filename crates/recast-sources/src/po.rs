// crates/recast-sources/src/po.rs
// ============================================================================
// Module: Recast Gettext Directory Source
// Description: Template source backed by per-locale gettext catalogs.
// Purpose: Load `<locale>.po` msgid/msgstr catalogs into an in-memory source.
// Dependencies: recast-core, crate::dict
// ============================================================================

//! ## Overview
//! A translations directory holds one gettext catalog per locale, named
//! `<locale>.po`. The parser accepts the minimal msgid/msgstr subset that the
//! CLI's `babel` export emits: `#` comments, `msgid "..."`, `msgstr "..."`,
//! and bare `"..."` continuation lines appended to the preceding keyword.
//!
//! The conventional header entry (empty msgid) is skipped. An entry whose
//! msgstr is empty falls back to its msgid text, so untranslated entries
//! never erase messages.

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
// SECTION: Gettext Directory Source
// ============================================================================

/// Template source loaded from a directory of `<locale>.po` catalogs.
///
/// # Invariants
/// - All translation data is resident in memory after construction.
#[derive(Debug, Clone)]
pub struct PoDirSource {
    /// Parsed translation data, served through the dictionary source.
    inner: DictSource,
}

impl PoDirSource {
    /// Loads every `<locale>.po` catalog in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] when the directory or a file cannot be read
    /// and [`LoadError::Parse`] when a catalog line is malformed.
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
            if path.extension().and_then(|ext| ext.to_str()) != Some("po") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let contents = std::fs::read_to_string(&path).map_err(|err| LoadError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
            let catalog = parse_catalog(&contents, &path.display().to_string())?;
            translations.insert(Locale::new(stem), catalog);
        }

        Ok(Self {
            inner: DictSource::new(translations),
        })
    }
}

impl TemplateSource for PoDirSource {
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

// ============================================================================
// SECTION: Catalog Parser
// ============================================================================

/// Parser position within a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryField {
    /// No keyword seen yet (or the previous entry was flushed).
    Idle,
    /// Accumulating the msgid text.
    Msgid,
    /// Accumulating the msgstr text.
    Msgstr,
}

/// Parses one catalog into a canonical-to-translated map.
fn parse_catalog(contents: &str, path: &str) -> Result<BTreeMap<String, String>, LoadError> {
    let mut catalog = BTreeMap::new();
    let mut field = EntryField::Idle;
    let mut msgid = String::new();
    let mut msgstr = String::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("msgid ") {
            if field == EntryField::Msgstr {
                flush_entry(&mut catalog, &mut msgid, &mut msgstr);
            }
            msgid.push_str(&parse_quoted(rest, path, index)?);
            field = EntryField::Msgid;
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            msgstr.push_str(&parse_quoted(rest, path, index)?);
            field = EntryField::Msgstr;
        } else if line.starts_with('"') {
            let text = parse_quoted(line, path, index)?;
            match field {
                EntryField::Msgid => msgid.push_str(&text),
                EntryField::Msgstr => msgstr.push_str(&text),
                EntryField::Idle => {
                    return Err(LoadError::Parse {
                        path: path.to_string(),
                        message: format!("continuation string outside an entry on line {}", index + 1),
                    });
                }
            }
        } else {
            return Err(LoadError::Parse {
                path: path.to_string(),
                message: format!("unrecognized catalog line {}", index + 1),
            });
        }
    }
    if field == EntryField::Msgstr {
        flush_entry(&mut catalog, &mut msgid, &mut msgstr);
    }
    Ok(catalog)
}

/// Completes one msgid/msgstr entry, skipping the header and applying the
/// untranslated-entry fallback.
fn flush_entry(catalog: &mut BTreeMap<String, String>, msgid: &mut String, msgstr: &mut String) {
    let id = std::mem::take(msgid);
    let text = std::mem::take(msgstr);
    if id.is_empty() {
        return;
    }
    let translated = if text.is_empty() { id.clone() } else { text };
    catalog.insert(id, translated);
}

/// Parses a double-quoted catalog string with gettext escapes resolved.
fn parse_quoted(raw: &str, path: &str, index: usize) -> Result<String, LoadError> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| LoadError::Parse {
            path: path.to_string(),
            message: format!("expected a quoted string on line {}", index + 1),
        })?;

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            text.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('"') => text.push('"'),
            Some('\\') => text.push('\\'),
            Some(other) => {
                text.push('\\');
                text.push(other);
            }
            None => {
                return Err(LoadError::Parse {
                    path: path.to_string(),
                    message: format!("dangling escape on line {}", index + 1),
                });
            }
        }
    }
    Ok(text)
}
