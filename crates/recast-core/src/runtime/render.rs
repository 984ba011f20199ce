// crates/recast-core/src/runtime/render.rs
// ============================================================================
// Module: Recast Translation Renderer
// Description: Positional substitution of values into translated templates.
// Purpose: Re-render a translated template with recovered placeholder values.
// Dependencies: crate::core::template, thiserror
// ============================================================================

//! ## Overview
//! Rendering is literal positional substitution: the nth placeholder receives
//! the nth value as opaque, preformatted text. A template with no
//! placeholders renders verbatim and ignores any values. A template that
//! needs more values than were provided is an arity mismatch and propagates;
//! surplus values are dropped, matching standard positional-formatting
//! semantics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::TemplateToken;
use crate::core::tokenize;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rendering failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template requires more positional values than were provided.
    #[error("template requires {required} positional values but {provided} were provided")]
    ArityMismatch {
        /// Number of placeholders in the template.
        required: usize,
        /// Number of values that were provided.
        provided: usize,
    },
}

// ============================================================================
// SECTION: Renderer
// ============================================================================

/// Renders a translated template with values substituted positionally.
///
/// # Errors
///
/// Returns [`RenderError::ArityMismatch`] when the template contains more
/// placeholders than `values` has entries.
pub fn render(template: &str, values: &[impl AsRef<str>]) -> Result<String, RenderError> {
    let tokens = tokenize(template);
    let required =
        tokens.iter().filter(|token| matches!(token, TemplateToken::Placeholder)).count();
    if required > values.len() {
        return Err(RenderError::ArityMismatch {
            required,
            provided: values.len(),
        });
    }

    let mut output = String::with_capacity(template.len());
    let mut next_value = values.iter();
    for token in &tokens {
        match token {
            TemplateToken::Literal(text) => output.push_str(text),
            TemplateToken::Placeholder => {
                if let Some(value) = next_value.next() {
                    output.push_str(value.as_ref());
                }
            }
        }
    }
    Ok(output)
}
