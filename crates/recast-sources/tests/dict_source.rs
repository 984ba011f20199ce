// crates/recast-sources/tests/dict_source.rs
// ============================================================================
// Module: Dictionary Source Tests
// Description: Exercises the in-memory template source contract.
// Purpose: Ensure lookup failures are distinct and enumeration is stable.
// ============================================================================

//! ## Overview
//! Validates the [`TemplateSource`] contract over `DictSource`: full-set
//! retrieval, single-entry lookup, distinct locale/template failures, and
//! deterministic locale enumeration.

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

use std::collections::BTreeMap;

use recast_core::Locale;
use recast_core::SourceError;
use recast_core::TemplateSource;
use recast_sources::DictSource;

/// Builds a two-locale dictionary source.
fn sample_source() -> DictSource {
    let mut en_us = BTreeMap::new();
    en_us.insert("field required".to_string(), "field required".to_string());
    en_us.insert(
        "value is not a valid {}".to_string(),
        "value is not a valid {}".to_string(),
    );

    let mut pt_br = BTreeMap::new();
    pt_br.insert("field required".to_string(), "campo obrigatório".to_string());

    let mut translations = BTreeMap::new();
    translations.insert(Locale::new("en_US"), en_us);
    translations.insert(Locale::new("pt_BR"), pt_br);
    DictSource::new(translations)
}

/// Confirms the full translation set is returned for a known locale.
#[test]
fn translations_returns_full_set() {
    let source = sample_source();
    let set = source.translations(&Locale::new("en_US")).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.get("field required"), Some(&"field required".to_string()));
}

/// Confirms single-entry lookup resolves a translated template.
#[test]
fn gettext_resolves_entry() {
    let source = sample_source();
    let translated = source.gettext("field required", &Locale::new("pt_BR")).unwrap();
    assert_eq!(translated, "campo obrigatório");
}

/// Confirms an unknown locale is reported distinctly.
#[test]
fn unknown_locale_is_distinct_failure() {
    let source = sample_source();
    let err = source.gettext("field required", &Locale::new("xx_XX")).unwrap_err();
    assert_eq!(
        err,
        SourceError::LocaleNotFound {
            locale: Locale::new("xx_XX"),
        }
    );
}

/// Confirms an unknown template in a known locale is reported distinctly.
#[test]
fn unknown_template_is_distinct_failure() {
    let source = sample_source();
    let err = source.gettext("value is not a valid {}", &Locale::new("pt_BR")).unwrap_err();
    assert_eq!(
        err,
        SourceError::TemplateNotFound {
            locale: Locale::new("pt_BR"),
            template: "value is not a valid {}".to_string(),
        }
    );
}

/// Confirms locales enumerate in a stable order.
#[test]
fn locales_enumerate_in_stable_order() {
    let source = sample_source();
    assert_eq!(source.locales(), vec![Locale::new("en_US"), Locale::new("pt_BR")]);
}
