// crates/recast-core/examples/minimal.rs
// ============================================================================
// Module: Recast Minimal Example
// Description: Minimal end-to-end translation using an in-memory source.
// Purpose: Demonstrate Translator construction and batch translation.
// Dependencies: recast-core
// ============================================================================

//! ## Overview
//! Translates a small batch of validation errors from English into Brazilian
//! Portuguese using an in-memory template source. This example is
//! backend-agnostic and suitable for quick verification.

use std::collections::BTreeMap;

use recast_core::ErrorRecord;
use recast_core::Locale;
use recast_core::SourceError;
use recast_core::TemplateSource;
use recast_core::runtime::Translator;
use serde_json::json;

/// In-memory template source holding a fixed locale map.
struct ExampleSource {
    /// Translation entries keyed by locale, then by canonical template.
    locales: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl ExampleSource {
    /// Builds the example's en_US / pt_BR translation data.
    fn new() -> Self {
        let mut en_us = BTreeMap::new();
        en_us.insert(
            "value is not a valid {}".to_string(),
            "value is not a valid {}".to_string(),
        );
        en_us.insert("field required".to_string(), "field required".to_string());

        let mut pt_br = BTreeMap::new();
        pt_br.insert(
            "value is not a valid {}".to_string(),
            "valor não é um {} válido".to_string(),
        );
        pt_br.insert("field required".to_string(), "campo obrigatório".to_string());

        let mut locales = BTreeMap::new();
        locales.insert(Locale::new("en_US"), en_us);
        locales.insert(Locale::new("pt_BR"), pt_br);
        Self {
            locales,
        }
    }
}

impl TemplateSource for ExampleSource {
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

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let translator = Translator::new(ExampleSource::new(), "en_US")?;

    let errors = vec![
        ErrorRecord::new("value is not a valid integer")
            .with_field("loc", json!(["body", "age"]))
            .with_field("type", json!("type_error.integer")),
        ErrorRecord::new("field required").with_field("loc", json!(["body", "name"])),
        ErrorRecord::new("some completely unrelated text"),
    ];

    let translated = translator.translate(&errors, &Locale::new("pt_BR"))?;
    if translated[0].msg != "valor não é um integer válido" {
        return Err(Box::new(ExampleError("matched template did not re-render")));
    }
    if translated[1].msg != "campo obrigatório" {
        return Err(Box::new(ExampleError("literal template did not translate")));
    }
    if translated[2].msg != "some completely unrelated text" {
        return Err(Box::new(ExampleError("unknown message must pass through")));
    }

    let _ = translator.locales();
    Ok(())
}
