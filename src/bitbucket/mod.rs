// src/bitbucket/mod.rs
// =============================================================================
// This module handles everything that talks to Bitbucket.
//
// Submodules:
// - fetch: URL parsing, the listing API client, entry classification
// - walk: the depth-first traversal that builds the flat path list
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod fetch;
mod walk;

// Re-export public items from submodules
// This lets users write `bitbucket::collect_paths()` instead of
// `bitbucket::walk::collect_paths()`
pub use fetch::{parse_repo_url, BitbucketLister, DirectoryLister, ListingEntry, RepoRef};
pub use walk::collect_paths;
