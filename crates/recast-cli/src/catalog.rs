// crates/recast-cli/src/catalog.rs
// ============================================================================
// Module: Built-In Message Catalog
// Description: Baseline validation message templates and export formats.
// Purpose: Produce seed translation data suitable for any template source.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Validation layers ship a fixed set of message templates, and translators
//! need that set enumerated before they can localize it. This module carries
//! a baseline catalog of widely used validation error templates (positional
//! `{}` markers) and renders it in three formats: a plain tab-separated
//! mapping, pretty JSON, and a gettext-style `msgid`/`msgstr` skeleton that
//! the `po` translation source loads directly.
//!
//! The export starts every entry as an identity mapping; translators replace
//! the right-hand side per locale. This utility is deliberately independent
//! of the engine so other catalogs can be swapped in without touching it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// SECTION: Built-In Templates
// ============================================================================

/// Baseline canonical validation message templates.
///
/// # Invariants
/// - Placeholders are positional `{}` markers; entries are unique.
const BUILTIN_TEMPLATES: &[&str] = &[
    "field required",
    "extra fields not permitted",
    "none is not an allowed value",
    "value is not none",
    "value could not be parsed to a boolean",
    "byte type expected",
    "value is not a valid integer",
    "value is not a valid float",
    "value is not a valid decimal",
    "value is not a valid dict",
    "value is not a valid list",
    "value is not a valid tuple",
    "value is not a valid set",
    "value is not a valid sequence",
    "value is not a valid path",
    "value is not a valid uuid",
    "value is not a valid email address",
    "value is not a valid enumeration member; permitted: {}",
    "invalid datetime format",
    "invalid date format",
    "invalid time format",
    "invalid duration format",
    "invalid or missing URL scheme",
    "URL scheme not permitted",
    "ensure this value has at least {} characters",
    "ensure this value has at most {} characters",
    "ensure this value is greater than {}",
    "ensure this value is greater than or equal to {}",
    "ensure this value is less than {}",
    "ensure this value is less than or equal to {}",
    "ensure that there are no more than {} digits in total",
    "ensure that there are no more than {} decimal places",
    "wrong tuple length {}, expected {}",
    "string does not match regex \"{}\"",
    "file or directory at path \"{}\" does not exist",
    "path \"{}\" does not point to a file",
    "path \"{}\" does not point to a directory",
];

/// Returns the built-in templates as an identity mapping.
///
/// The result is directly usable as a default-locale translation set and as
/// the starting point for authoring new locales.
#[must_use]
pub fn builtin_templates() -> BTreeMap<String, String> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|template| ((*template).to_string(), (*template).to_string()))
        .collect()
}

// ============================================================================
// SECTION: Export Formats
// ============================================================================

/// Supported catalog export formats.
///
/// # Invariants
/// - The set is closed; unknown tags are rejected at parse time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain tab-separated mapping, one entry per line.
    Dict,
    /// Pretty-printed JSON object.
    Json,
    /// Gettext-style msgid/msgstr skeleton.
    Babel,
}

impl ExportFormat {
    /// Returns the canonical format tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dict => "dict",
            Self::Json => "json",
            Self::Babel => "babel",
        }
    }
}

/// Rejection of an unrecognized export format tag.
///
/// # Invariants
/// - Carries the offending tag verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format: {tag:?} (expected dict, json, or babel)")]
pub struct UnknownFormatError {
    /// The tag that failed to parse.
    pub tag: String,
}

impl FromStr for ExportFormat {
    type Err = UnknownFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dict" => Ok(Self::Dict),
            "json" => Ok(Self::Json),
            "babel" => Ok(Self::Babel),
            _ => Err(UnknownFormatError {
                tag: value.to_string(),
            }),
        }
    }
}

// ============================================================================
// SECTION: Renderers
// ============================================================================

/// Renders a catalog in the requested format.
///
/// # Errors
///
/// Returns a serialization failure only for [`ExportFormat::Json`]; the text
/// formats are infallible.
pub fn export(
    format: ExportFormat,
    templates: &BTreeMap<String, String>,
) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Dict => Ok(export_dict(templates)),
        ExportFormat::Json => serde_json::to_string_pretty(templates),
        ExportFormat::Babel => Ok(export_babel(templates)),
    }
}

/// Renders a catalog as a tab-separated mapping, one entry per line.
#[must_use]
pub fn export_dict(templates: &BTreeMap<String, String>) -> String {
    let mut output = String::new();
    for (template, translated) in templates {
        output.push_str(template);
        output.push('\t');
        output.push_str(translated);
        output.push('\n');
    }
    output
}

/// Renders a catalog as a gettext msgid/msgstr skeleton.
///
/// The output parses back through the `po` translation source, so an exported
/// skeleton can be translated in place and loaded without conversion.
#[must_use]
pub fn export_babel(templates: &BTreeMap<String, String>) -> String {
    let mut blocks = Vec::with_capacity(templates.len());
    for (template, translated) in templates {
        blocks.push(format!(
            "msgid \"{}\"\nmsgstr \"{}\"",
            escape_po(template),
            escape_po(translated)
        ));
    }
    blocks.join("\n\n")
}

/// Escapes a catalog string for embedding in a gettext entry.
fn escape_po(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
