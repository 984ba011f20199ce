// crates/recast-cli/src/lib.rs
// ============================================================================
// Module: Recast CLI Library
// Description: Reusable CLI building blocks for the recast binary.
// Purpose: Expose the message catalog utilities and CLI i18n helpers.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The library half of the Recast CLI: the built-in validation template
//! catalog with its export formats, and the CLI's own localized message
//! catalog behind the [`t!`](crate::t) macro. The binary in `main.rs` is a
//! thin dispatcher over these pieces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod i18n;
