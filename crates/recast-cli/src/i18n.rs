// crates/recast-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for a tool that translates others'.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The Recast CLI stores its own user-facing strings in a small translation
//! catalog to enforce consistent messaging. All runtime output should be
//! routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Portuguese.
    Pt,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Pt];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries loaded into the localized message bundle.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "recast {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("messages.render_failed", "Failed to render the message catalog: {error}"),
    ("messages.write_failed", "Failed to write the message catalog to {path}: {error}"),
    ("messages.ok", "Message catalog written to {path}"),
    ("translate.errors.read_failed", "Failed to read errors file at {path}: {error}"),
    (
        "translate.errors.too_large",
        "Refusing to read errors file at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("translate.errors.parse_failed", "Failed to parse errors JSON at {path}: {error}"),
    (
        "translate.translations.load_failed",
        "Failed to load translations from {path}: {error}",
    ),
    ("translate.engine.init_failed", "Failed to initialize translator: {error}"),
    ("translate.failed", "Translation failed: {error}"),
    ("translate.serialize_failed", "Failed to serialize translated errors: {error}"),
    ("translate.write_failed", "Failed to write translated errors to {path}: {error}"),
    ("translate.ok", "Translated errors written to {path}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'pt'."),
];

/// Static Portuguese catalog entries loaded into the localized message bundle.
const CATALOG_PT: &[(&str, &str)] = &[
    ("main.version", "recast {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "saída"),
    ("output.write_failed", "Não foi possível escrever em {stream}: {error}"),
    (
        "messages.render_failed",
        "Não foi possível renderizar o catálogo de mensagens: {error}",
    ),
    (
        "messages.write_failed",
        "Não foi possível escrever o catálogo de mensagens em {path}: {error}",
    ),
    ("messages.ok", "Catálogo de mensagens escrito em {path}"),
    (
        "translate.errors.read_failed",
        "Não foi possível ler o arquivo de erros em {path}: {error}",
    ),
    (
        "translate.errors.too_large",
        "Recusando ler o arquivo de erros em {path} porque ele tem {size} bytes (limite {limit}).",
    ),
    (
        "translate.errors.parse_failed",
        "Não foi possível analisar o JSON de erros em {path}: {error}",
    ),
    (
        "translate.translations.load_failed",
        "Não foi possível carregar as traduções de {path}: {error}",
    ),
    ("translate.engine.init_failed", "Não foi possível inicializar o tradutor: {error}"),
    ("translate.failed", "A tradução falhou: {error}"),
    (
        "translate.serialize_failed",
        "Não foi possível serializar os erros traduzidos: {error}",
    ),
    (
        "translate.write_failed",
        "Não foi possível escrever os erros traduzidos em {path}: {error}",
    ),
    ("translate.ok", "Erros traduzidos escritos em {path}"),
    (
        "i18n.lang.invalid_env",
        "Valor inválido para {env}: {value}. Esperava-se 'en' ou 'pt'.",
    ),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_PT_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Pt => CATALOG_PT_MAP.get_or_init(|| CATALOG_PT.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
