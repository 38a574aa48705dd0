// src/tree/mod.rs
// =============================================================================
// This module renders flat path lists as ASCII trees.
//
// Submodules:
// - render: builds the nested tree structure and draws it
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod render;

// Re-export the main function from render.rs
pub use render::render_tree;
