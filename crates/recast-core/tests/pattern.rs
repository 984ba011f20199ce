// crates/recast-core/tests/pattern.rs
// ============================================================================
// Module: Pattern Compiler Tests
// Description: Exercises template tokenization and pattern matching.
// Purpose: Ensure compiled patterns recognize exactly the messages their
//          templates produce and recover values in order.
// ============================================================================

//! ## Overview
//! Covers the tokenizer pass (escapes, unterminated markers), anchored
//! full-string matching, value extraction, regex metacharacter escaping, and
//! the lexicographic tie-break of the pattern set.

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

use recast_core::TemplateToken;
use recast_core::placeholder_count;
use recast_core::runtime::CompiledTemplate;
use recast_core::runtime::PatternSet;
use recast_core::tokenize;

// ============================================================================
// SECTION: Tokenizer
// ============================================================================

/// Confirms literal and placeholder runs tokenize in order.
#[test]
fn tokenize_splits_literals_and_placeholders() {
    let tokens = tokenize("ensure this value has at least {} characters");
    assert_eq!(
        tokens,
        vec![
            TemplateToken::Literal("ensure this value has at least ".to_string()),
            TemplateToken::Placeholder,
            TemplateToken::Literal(" characters".to_string()),
        ]
    );
}

/// Confirms named markers are positional placeholders.
#[test]
fn tokenize_treats_named_markers_positionally() {
    let tokens = tokenize("wrong tuple length {actual}, expected {expected}");
    assert_eq!(
        tokens,
        vec![
            TemplateToken::Literal("wrong tuple length ".to_string()),
            TemplateToken::Placeholder,
            TemplateToken::Literal(", expected ".to_string()),
            TemplateToken::Placeholder,
        ]
    );
}

/// Confirms doubled braces resolve to literal braces.
#[test]
fn tokenize_resolves_brace_escapes() {
    let tokens = tokenize("literal {{braces}} and {} value");
    assert_eq!(
        tokens,
        vec![
            TemplateToken::Literal("literal {braces} and ".to_string()),
            TemplateToken::Placeholder,
            TemplateToken::Literal(" value".to_string()),
        ]
    );
}

/// Confirms an unterminated marker stays literal text.
#[test]
fn tokenize_keeps_unterminated_marker_literal() {
    let tokens = tokenize("dangling {marker");
    assert_eq!(tokens, vec![TemplateToken::Literal("dangling {marker".to_string())]);
}

/// Confirms a lone closing brace stays literal text.
#[test]
fn tokenize_keeps_lone_closing_brace_literal() {
    let tokens = tokenize("closing } brace");
    assert_eq!(tokens, vec![TemplateToken::Literal("closing } brace".to_string())]);
}

/// Confirms placeholder counting matches tokenization.
#[test]
fn placeholder_count_counts_markers() {
    assert_eq!(placeholder_count("field required"), 0);
    assert_eq!(placeholder_count("value is not a valid {}"), 1);
    assert_eq!(placeholder_count("wrong tuple length {}, expected {}"), 2);
    assert_eq!(placeholder_count("literal {{}} braces"), 0);
}

// ============================================================================
// SECTION: Compiled Templates
// ============================================================================

/// Confirms a rendered message matches its own template and yields values.
#[test]
fn compiled_template_extracts_values_in_order() {
    let compiled = CompiledTemplate::compile("wrong tuple length {}, expected {}").unwrap();
    let values = compiled.extract("wrong tuple length 3, expected 4").unwrap();
    assert_eq!(values, vec!["3".to_string(), "4".to_string()]);
}

/// Confirms matching is anchored to the full message.
#[test]
fn compiled_template_rejects_partial_matches() {
    let compiled = CompiledTemplate::compile("value is not a valid {}").unwrap();
    assert!(compiled.matches("value is not a valid integer"));
    assert!(!compiled.matches("prefix value is not a valid integer"));
    assert!(!compiled.matches("value is not a valid"));
}

/// Confirms zero-placeholder templates match only their exact text.
#[test]
fn literal_template_matches_only_identical_message() {
    let compiled = CompiledTemplate::compile("field required").unwrap();
    assert!(compiled.matches("field required"));
    assert!(!compiled.matches("field required!"));
    assert!(!compiled.matches("a field required"));
    assert_eq!(compiled.extract("field required").unwrap(), Vec::<String>::new());
}

/// Confirms captured values may be empty strings.
#[test]
fn compiled_template_captures_empty_values() {
    let compiled = CompiledTemplate::compile("value is not a valid {}").unwrap();
    let values = compiled.extract("value is not a valid ").unwrap();
    assert_eq!(values, vec![String::new()]);
}

/// Confirms regex metacharacters in literal runs are escaped.
#[test]
fn compiled_template_escapes_metacharacters() {
    let compiled = CompiledTemplate::compile("string does not match regex \"{}\"").unwrap();
    let values = compiled.extract("string does not match regex \"^[a-z]+$\"").unwrap();
    assert_eq!(values, vec!["^[a-z]+$".to_string()]);

    let literal = CompiledTemplate::compile("ensure this value is greater than (or equal to) {}")
        .unwrap();
    assert!(!literal.matches("ensure this value is greater than Xor equal toY 5"));
}

/// Confirms values spanning multiple lines are captured.
#[test]
fn compiled_template_captures_multiline_values() {
    let compiled = CompiledTemplate::compile("value is not a valid {}").unwrap();
    let values = compiled.extract("value is not a valid first\nsecond").unwrap();
    assert_eq!(values, vec!["first\nsecond".to_string()]);
}

/// Confirms greedy captures still honor trailing literal text.
#[test]
fn compiled_template_greedy_capture_honors_trailing_literal() {
    let compiled =
        CompiledTemplate::compile("ensure this value has at least {} characters").unwrap();
    let values = compiled.extract("ensure this value has at least 10 characters").unwrap();
    assert_eq!(values, vec!["10".to_string()]);
}

// ============================================================================
// SECTION: Pattern Set
// ============================================================================

/// Confirms lookup finds the producing template.
#[test]
fn pattern_set_finds_producing_template() {
    let set = PatternSet::compile([
        "field required",
        "value is not a valid {}",
        "ensure this value has at least {} characters",
    ])
    .unwrap();
    let found = set.find("ensure this value has at least 10 characters").unwrap();
    assert_eq!(found.template(), "ensure this value has at least {} characters");
    assert!(set.find("no template produces this").is_none());
}

/// Confirms ambiguous messages resolve to the lexicographically smallest template.
#[test]
fn pattern_set_tie_break_is_lexicographic() {
    let set = PatternSet::compile(["value {} is {}", "value {} is invalid"]).unwrap();
    let found = set.find("value x is invalid").unwrap();
    assert_eq!(found.template(), "value {} is invalid");
}

/// Confirms input order does not affect lookup order.
#[test]
fn pattern_set_order_is_input_independent() {
    let forward = PatternSet::compile(["value {} is {}", "value {} is invalid"]).unwrap();
    let reverse = PatternSet::compile(["value {} is invalid", "value {} is {}"]).unwrap();
    assert_eq!(
        forward.find("value x is invalid").unwrap().template(),
        reverse.find("value x is invalid").unwrap().template(),
    );
}

/// Confirms duplicate templates collapse to one entry.
#[test]
fn pattern_set_deduplicates_templates() {
    let set = PatternSet::compile(["field required", "field required"]).unwrap();
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
}
