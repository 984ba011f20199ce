// crates/recast-core/src/runtime/mod.rs
// ============================================================================
// Module: Recast Runtime
// Description: Pattern compilation, matching, rendering, and batch translation.
// Purpose: House the pure evaluation passes of the translation engine.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime is a pure request/response pipeline: templates compile to
//! matching patterns once, messages are matched against that immutable set,
//! and translated templates are re-rendered with the extracted values. No
//! pass holds mutable state after construction.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod pattern;
pub mod render;
pub mod translator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use pattern::CompiledTemplate;
pub use pattern::PatternError;
pub use pattern::PatternSet;
pub use render::RenderError;
pub use render::render;
pub use translator::TranslateError;
pub use translator::Translator;
