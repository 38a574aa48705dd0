// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-tree",
    version = "0.1.0",
    about = "Generate an ASCII directory tree from a Bitbucket repository URL",
    long_about = "repo-tree fetches the file structure of a public Bitbucket repository \
                  through the Bitbucket API and prints it as an ASCII-art tree, ready to \
                  paste into a README."
)]
pub struct Cli {
    /// Bitbucket repository URL (e.g., https://bitbucket.org/workspace/repo)
    ///
    /// This is a positional argument (required, no flag needed)
    pub repo_url: String,

    /// Output the flat path list as JSON instead of an ASCII tree
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// Write the output to a file instead of stdout
    ///
    /// Handy for dropping the tree straight into a README.md
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 2. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 3. What is Option<PathBuf>?
//    - PathBuf is an owned filesystem path
//    - Option makes the flag optional: None means "print to stdout"
//    - clap turns Option fields into optional arguments automatically
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::parse_from(["repo-tree", "https://bitbucket.org/ws/repo"]);
        assert_eq!(cli.repo_url, "https://bitbucket.org/ws/repo");
        assert!(!cli.json);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_with_flags() {
        let cli = Cli::parse_from([
            "repo-tree",
            "https://bitbucket.org/ws/repo",
            "--json",
            "--output",
            "README.md",
        ]);
        assert!(cli.json);
        assert_eq!(cli.output, Some(PathBuf::from("README.md")));
    }
}
