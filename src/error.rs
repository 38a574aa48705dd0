// src/error.rs
// =============================================================================
// This module defines the error type for repository tree generation.
//
// Why a dedicated enum instead of anyhow everywhere?
// - The caller needs to tell failure kinds apart (a missing repository is
//   handled differently than a private one)
// - Each kind carries a human-readable message for display
// - anyhow is still used at the application layer for unexpected failures
//
// Rust concepts:
// - Enums: Types that can be one of several variants
// - thiserror: Derive macro that implements std::error::Error for us
// =============================================================================

use thiserror::Error;

// All the ways fetching and rendering a repository tree can fail
//
// #[derive(Error)] generates the Display and Error trait implementations
// from the #[error("...")] attributes on each variant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// The repository URL could not be parsed into workspace + slug
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    /// The remote reports the repository does not exist (404)
    #[error("Repository not found")]
    NotFound,

    /// The remote reports the repository is forbidden (403)
    #[error("Access denied - repository may be private")]
    AccessDenied,

    /// Any other non-success response or transport failure
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Traversal completed but found no files or directories at all
    #[error("No files found in repository")]
    EmptyRepository,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why derive Clone and PartialEq?
//    - Clone lets tests store pre-built errors in fake API responses
//    - PartialEq lets tests assert on exact error values
//    - Neither costs anything for callers who don't need them
//
// 2. What does thiserror generate?
//    - impl Display (using the #[error] format strings)
//    - impl std::error::Error
//    - This makes TreeError work with the ? operator and anyhow
//
// 3. Library errors vs application errors:
//    - Libraries should use specific error types (like this enum)
//    - Applications can use anyhow::Error to hold anything
//    - We do both: TreeError in the core, anyhow in main.rs
// -----------------------------------------------------------------------------
