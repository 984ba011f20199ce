// crates/recast-core/src/core/template.rs
// ============================================================================
// Module: Recast Template Tokenizer
// Description: Splits message templates into literal and placeholder runs.
// Purpose: Single tokenizer pass shared by pattern compilation and rendering.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical and translated templates both use brace-delimited positional
//! placeholders. The tokenizer is the one place that syntax is interpreted;
//! pattern compilation and rendering consume its token stream and never
//! re-parse the template text.
//!
//! ### Syntax (informal)
//! - `{}` or `{anything}` — one positional placeholder. Interior text is
//!   discarded; placeholders are tracked by position only, never by name.
//! - `{{` and `}}` — escaped literal braces.
//! - An unterminated `{` and a lone `}` are literal text.

// ============================================================================
// SECTION: Tokens
// ============================================================================

/// One token of a tokenized message template.
///
/// # Invariants
/// - Adjacent `Literal` tokens never occur; the tokenizer coalesces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    /// A run of literal text, with brace escapes already resolved.
    Literal(String),
    /// One positional placeholder.
    Placeholder,
}

// ============================================================================
// SECTION: Tokenizer
// ============================================================================

/// Tokenizes a template into literal and placeholder runs.
#[must_use]
pub fn tokenize(template: &str) -> Vec<TemplateToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                let mut interior = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    interior.push(inner);
                }
                if closed {
                    if !literal.is_empty() {
                        tokens.push(TemplateToken::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(TemplateToken::Placeholder);
                } else {
                    literal.push('{');
                    literal.push_str(&interior);
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                literal.push('}');
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        tokens.push(TemplateToken::Literal(literal));
    }
    tokens
}

/// Returns the number of positional placeholders in a template.
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    tokenize(template).iter().filter(|token| matches!(token, TemplateToken::Placeholder)).count()
}
