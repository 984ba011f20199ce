// crates/recast-sources/src/lib.rs
// ============================================================================
// Module: Recast Sources Library
// Description: Template source implementations for the Recast engine.
// Purpose: Supply translation data from in-memory maps and translation files.
// Dependencies: recast-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `recast-sources` implements the [`TemplateSource`](recast_core::TemplateSource)
//! contract over three backends: a static in-memory dictionary, a directory of
//! per-locale JSON files, and a directory of per-locale gettext catalogs. The
//! file-backed sources load eagerly at construction and are immutable
//! afterwards, so a fully constructed source is safe to share across threads.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dict;
pub mod json;
pub mod po;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dict::DictSource;
pub use json::JsonDirSource;
pub use po::PoDirSource;

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures while loading translation data from disk.
///
/// # Invariants
/// - Variants are stable for programmatic handling and carry the offending
///   path for context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Reading a translation file or directory failed.
    #[error("failed to read translation data at {path}: {message}")]
    Io {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O failure, rendered as text.
        message: String,
    },
    /// A translation file was read but could not be parsed.
    #[error("failed to parse translation file at {path}: {message}")]
    Parse {
        /// The file that failed to parse.
        path: String,
        /// The underlying parse failure, rendered as text.
        message: String,
    },
}
