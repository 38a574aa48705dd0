// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Parse the repository URL into workspace + slug
// 3. Walk the remote repository and render the tree
// 4. Print the result (or write it to a file) and exit with proper code
//    (0 = success, 1 = repository error, 2 = unexpected error)
//
// Rust concepts used:
// - async/await: Because we make a network request per directory
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle the different outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod bitbucket;     // src/bitbucket/ - URL parsing, API client, tree walking
mod cli;           // src/cli.rs - command-line parsing
mod error;         // src/error.rs - the typed error enum
mod tree;          // src/tree/ - ASCII tree rendering

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use error::TreeError;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = tree rendered
//   Ok(1) = repository-level failure (bad URL, missing, private, empty...)
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Fetching repository structure: {}", cli.repo_url);

    // Walk the remote repository; every TreeError is an expected,
    // user-facing failure rather than a bug, so it maps to exit code 1
    let paths = match generate_paths(&cli.repo_url).await {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Ok(1);
        }
    };

    println!("📄 Found {} entries\n", paths.len());

    // Either the flat path list as JSON or the rendered ASCII tree
    let output = if cli.json {
        let mut json = serde_json::to_string_pretty(&paths)?;
        json.push('\n');
        json
    } else {
        tree::render_tree(&paths)
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &output)?;
            println!("✅ Written to {}", path.display());
        }
        None => {
            // The tree lines are already newline-terminated
            print!("{}", output);
        }
    }

    Ok(0)
}

// Parses the URL, walks the repository, returns the flat path list
//
// Kept separate from run() so all five error kinds funnel through one
// Result and the presentation code above stays in one place.
async fn generate_paths(repo_url: &str) -> Result<Vec<String>, TreeError> {
    let repo = bitbucket::parse_repo_url(repo_url)?;
    let lister = bitbucket::BitbucketLister::new(repo)?;
    bitbucket::collect_paths(&lister).await
}
