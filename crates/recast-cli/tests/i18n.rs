// crates/recast-cli/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Exercises the translation catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable i18n helpers.
// Dependencies: recast-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the Recast CLI i18n catalog behavior:
//! - Message arguments capture key/value substitutions.
//! - Translation falls back to keys on misses.
//! - The [`t!`](recast_cli::t) macro formats placeholders correctly.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use recast_cli::i18n::Locale;
use recast_cli::i18n::MessageArg;
use recast_cli::i18n::SUPPORTED_LOCALES;
use recast_cli::i18n::translate;
use recast_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms message arguments capture key/value pairs.
#[test]
fn message_arg_new_captures_key_and_value() {
    let arg = MessageArg::new("path", "/tmp/errors.json");
    assert_eq!(arg.key, "path");
    assert_eq!(arg.value, "/tmp/errors.json");
}

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![MessageArg::new("path", "/tmp/errors.json")];
    let result = translate("translate.ok", args);
    assert_eq!(result, "Translated errors written to /tmp/errors.json");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    let result = translate("missing.key", Vec::new());
    assert_eq!(result, "missing.key");
}

/// Confirms the t! macro formats named arguments.
#[test]
fn t_macro_formats_message() {
    let rendered = t!("main.version", version = "0.1.0");
    assert!(rendered.contains("recast"));
    assert!(rendered.contains("0.1.0"));
}

/// Confirms locale parsing tolerates case and region tags.
#[test]
fn locale_parse_is_tolerant() {
    assert_eq!(Locale::parse("PT"), Some(Locale::Pt));
    assert_eq!(Locale::parse("pt-BR"), Some(Locale::Pt));
    assert_eq!(Locale::parse("en_US"), Some(Locale::En));
    assert_eq!(Locale::parse("fr"), None);
    assert_eq!(Locale::parse(""), None);
}

/// Confirms the supported locale list is stable and labeled.
#[test]
fn supported_locales_are_labeled() {
    assert_eq!(SUPPORTED_LOCALES.len(), 2);
    assert_eq!(SUPPORTED_LOCALES[0].as_str(), "en");
    assert_eq!(SUPPORTED_LOCALES[1].as_str(), "pt");
}
