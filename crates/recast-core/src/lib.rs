// crates/recast-core/src/lib.rs
// ============================================================================
// Module: Recast Core Library
// Description: Template-aware translation engine for validation errors.
// Purpose: Match formatted messages back to canonical templates and re-render
//          them in a target locale with the original values preserved.
// Dependencies: regex, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `recast-core` recovers the canonical template that produced an
//! already-formatted validation-error message, extracts the interpolated
//! placeholder values, and re-renders the translated template for a requested
//! locale with those values substituted positionally.
//!
//! The engine is deterministic and stateless beyond an immutable compiled
//! pattern cache built once at construction from the default locale's
//! translation set. Translation data is supplied through the
//! [`TemplateSource`] contract; this crate performs no I/O and no logging.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::ErrorRecord;
pub use self::core::Locale;
pub use self::core::TemplateToken;
pub use self::core::placeholder_count;
pub use self::core::tokenize;
pub use interfaces::SourceError;
pub use interfaces::TemplateSource;
