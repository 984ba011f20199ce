// crates/recast-core/src/runtime/pattern.rs
// ============================================================================
// Module: Recast Pattern Compiler
// Description: Compiles canonical templates into anchored matching patterns.
// Purpose: Recognize formatted messages and recover their placeholder values.
// Dependencies: crate::core::template, regex, thiserror
// ============================================================================

//! ## Overview
//! A canonical template compiles to an anchored regular expression: literal
//! runs are escaped verbatim and every positional placeholder becomes a
//! greedy `(.*)` capture. Matching is full-string, so a template with zero
//! placeholders recognizes only its exact literal text, and any message
//! rendered from a template (with values free of brace markers) matches its
//! own pattern and yields the values back in order.
//!
//! [`PatternSet`] is the one-time compiled cache over a template universe.
//! Lookup order is lexicographic by canonical template, which makes the
//! tie-break between ambiguous templates explicit and stable. The regex
//! engine guarantees linear-time matching, so templates with adjacent
//! placeholders cannot trigger pathological backtracking cost.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use regex::Regex;
use thiserror::Error;

use crate::core::TemplateToken;
use crate::core::tokenize;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure to compile a canonical template into a matching pattern.
///
/// # Invariants
/// - `template` is the exact canonical template text that failed.
#[derive(Debug, Clone, Error)]
#[error("failed to compile matching pattern for template {template:?}: {source}")]
pub struct PatternError {
    /// The canonical template that failed to compile.
    pub template: String,
    /// The underlying regex compilation failure.
    #[source]
    pub source: regex::Error,
}

// ============================================================================
// SECTION: Compiled Template
// ============================================================================

/// A canonical template paired with its derived matching pattern.
///
/// # Invariants
/// - `pattern` is anchored at both ends and has exactly `placeholders`
///   capture groups, one per placeholder in order of appearance.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    /// The canonical template text.
    template: String,
    /// Anchored matching pattern derived from the template.
    pattern: Regex,
    /// Number of positional placeholders in the template.
    placeholders: usize,
}

impl CompiledTemplate {
    /// Compiles a canonical template into a matching pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the derived expression fails to compile.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let tokens = tokenize(template);
        let mut expression = String::from("(?s)^");
        let mut placeholders = 0_usize;
        for token in &tokens {
            match token {
                TemplateToken::Literal(text) => expression.push_str(&regex::escape(text)),
                TemplateToken::Placeholder => {
                    placeholders += 1;
                    expression.push_str("(.*)");
                }
            }
        }
        expression.push('$');
        let pattern = Regex::new(&expression).map_err(|source| PatternError {
            template: template.to_string(),
            source,
        })?;
        Ok(Self {
            template: template.to_string(),
            pattern,
            placeholders,
        })
    }

    /// Returns the canonical template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the number of positional placeholders.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Reports whether the full message was produced from this template.
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }

    /// Extracts the placeholder values from a message in order of appearance.
    ///
    /// Returns `None` when the message was not produced from this template.
    #[must_use]
    pub fn extract(&self, message: &str) -> Option<Vec<String>> {
        let captures = self.pattern.captures(message)?;
        let values = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        Some(values)
    }
}

// ============================================================================
// SECTION: Pattern Set
// ============================================================================

/// Immutable cache of compiled templates for a fixed template universe.
///
/// # Invariants
/// - Entries are unique, ordered lexicographically by canonical template, and
///   never change after construction.
#[derive(Debug, Clone)]
pub struct PatternSet {
    /// Compiled templates in lexicographic canonical-template order.
    entries: Vec<CompiledTemplate>,
}

impl PatternSet {
    /// Compiles a template universe into an immutable pattern set.
    ///
    /// Duplicate templates collapse to one entry; entries are ordered
    /// lexicographically regardless of input order so lookup is deterministic
    /// for any source backend.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for the first template that fails to compile.
    pub fn compile<'a, I>(templates: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ordered: BTreeSet<&str> = templates.into_iter().collect();
        let mut entries = Vec::with_capacity(ordered.len());
        for template in ordered {
            entries.push(CompiledTemplate::compile(template)?);
        }
        Ok(Self {
            entries,
        })
    }

    /// Finds the template that produced a message.
    ///
    /// When more than one template could structurally match, the
    /// lexicographically smallest canonical template wins; this tie-break is
    /// part of the contract, not an implementation accident.
    #[must_use]
    pub fn find(&self, message: &str) -> Option<&CompiledTemplate> {
        self.entries.iter().find(|entry| entry.matches(message))
    }

    /// Returns the number of compiled templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the compiled templates in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledTemplate> {
        self.entries.iter()
    }
}
