// src/bitbucket/fetch.rs
// =============================================================================
// This module talks to the Bitbucket 2.0 API to list directory contents.
//
// Strategy:
// - Parse the Bitbucket URL to extract workspace and repository slug
// - Issue one GET per directory against the /src listing endpoint,
//   scoped to the default branch
// - Deserialize the `values` array of the JSON response
// - Map HTTP failures to distinguishable error kinds (404, 403, other)
//
// Why a trait for the listing API?
// - The walker only needs "give me the entries of this directory"
// - Putting that behind a trait lets tests substitute a synthetic remote
//   instead of making real network calls
//
// Rust concepts:
// - async functions: For network I/O
// - Traits: Abstract interfaces (here with async-trait for async methods)
// - serde: Deserializing JSON into typed structs
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::error::TreeError;

// Base URL of the Bitbucket 2.0 REST API
const API_BASE: &str = "https://api.bitbucket.org/2.0/repositories";

// The single branch we traverse; not configurable
const DEFAULT_BRANCH: &str = "master";

// Identifies one repository: workspace (account/team) + repository slug
//
// Parsed once from the URL and immutable afterwards.
// Both fields are guaranteed non-empty by parse_repo_url.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoRef {
    pub workspace: String,
    pub slug: String,
}

// One entry of a directory listing response
//
// Bitbucket responses vary a bit across endpoints, so every field is
// optional and we resolve the variance in one place:
// - the entry name may arrive as `path` or `name`
// - the `type` field may be absent entirely
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub path: Option<String>,
    pub name: Option<String>,
    // `type` is a Rust keyword, so serde renames it for us
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// The JSON body of a listing response
//
// A missing `values` array means "empty directory", not an error,
// so it is Option and we fall back to an empty Vec.
#[derive(Debug, Deserialize)]
struct DirectoryListing {
    values: Option<Vec<ListingEntry>>,
}

// What kind of repository object a listing entry describes
//
// All the scattered type-string comparisons live in classify_entry;
// the rest of the code only ever matches on this closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Unknown,
}

// Classifies a raw `type` field value into an EntryKind
//
// Recognized directory markers: "commit_directory", "directory"
// Recognized file markers: "commit_file", "file"
// A missing type field is treated as a file (tolerates schema variance);
// any other value is Unknown and gets skipped by the walker.
pub fn classify_entry(kind: Option<&str>) -> EntryKind {
    match kind {
        Some("commit_directory") | Some("directory") => EntryKind::Directory,
        Some("commit_file") | Some("file") | None => EntryKind::File,
        Some(_) => EntryKind::Unknown,
    }
}

// Maps an HTTP response status to the error it signals, if any
//
// 404 and 403 mean specific things to our caller (missing vs private);
// every other non-success status collapses into RequestFailed.
// A success status maps to None.
pub fn classify_status(status: StatusCode) -> Option<TreeError> {
    match status {
        StatusCode::NOT_FOUND => Some(TreeError::NotFound),
        StatusCode::FORBIDDEN => Some(TreeError::AccessDenied),
        status if !status.is_success() => {
            Some(TreeError::RequestFailed(format!("HTTP {}", status.as_u16())))
        }
        _ => None,
    }
}

// Parses a Bitbucket URL to extract workspace and repository slug
//
// Supported formats:
//   - https://bitbucket.org/workspace/repo
//   - https://bitbucket.org/workspace/repo.git
//   - https://bitbucket.org/workspace/repo/
//
// The 4th and 5th slash-separated segments are workspace and slug:
//   ["https:", "", "bitbucket.org", "workspace", "repo"]
//
// Returns: RepoRef or InvalidUrl if the URL has fewer than 5 segments
// or an empty workspace/slug segment
pub fn parse_repo_url(url: &str) -> Result<RepoRef, TreeError> {
    // A trailing slash would shift nothing but leave an empty last segment,
    // so strip it (just the one, if present) before splitting
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let parts: Vec<&str> = trimmed.split('/').collect();

    if parts.len() < 5 {
        return Err(TreeError::InvalidUrl(url.to_string()));
    }

    let workspace = parts[3].to_string();

    // Remove .git suffix if present
    let slug = parts[4].strip_suffix(".git").unwrap_or(parts[4]).to_string();

    if workspace.is_empty() || slug.is_empty() {
        return Err(TreeError::InvalidUrl(url.to_string()));
    }

    Ok(RepoRef { workspace, slug })
}

// The listing API as the walker sees it: one directory in, its entries out
//
// #[async_trait] is needed because traits can't have async methods natively
// (the macro rewrites them to return boxed futures)
#[async_trait]
pub trait DirectoryLister {
    // Lists one directory of the repository
    //
    // `path` is relative to the repository root; the empty string is the root.
    // Returns the entries of that directory (empty Vec for an empty
    // directory) or a TreeError describing why the request failed.
    async fn list_directory(&self, path: &str) -> Result<Vec<ListingEntry>, TreeError>;
}

// The live implementation backed by the Bitbucket REST API
pub struct BitbucketLister {
    client: Client,
    repo: RepoRef,
}

impl BitbucketLister {
    // Creates a lister for one repository
    //
    // The reqwest Client is built once and reused for every directory
    // request (connection pooling), with a timeout so a hung request
    // can't stall the whole traversal forever.
    pub fn new(repo: RepoRef) -> Result<Self, TreeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| TreeError::RequestFailed(e.to_string()))?;

        Ok(Self { client, repo })
    }
}

#[async_trait]
impl DirectoryLister for BitbucketLister {
    async fn list_directory(&self, path: &str) -> Result<Vec<ListingEntry>, TreeError> {
        let url = format!(
            "{}/{}/{}/src/{}/{}",
            API_BASE, self.repo.workspace, self.repo.slug, DEFAULT_BRANCH, path
        );

        // Transport failures (DNS, timeout, connection refused...) are all
        // RequestFailed - the walker doesn't need finer distinctions
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TreeError::RequestFailed(e.to_string()))?;

        if let Some(error) = classify_status(response.status()) {
            return Err(error);
        }

        let listing: DirectoryListing = response
            .json()
            .await
            .map_err(|e| TreeError::RequestFailed(e.to_string()))?;

        // No `values` array = empty directory, not an error.
        // Pagination beyond the first page is out of scope.
        Ok(listing.values.unwrap_or_default())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - Rust traits can't have `async fn` methods out of the box
//    - The async-trait macro rewrites them to return Box<dyn Future>
//    - Both the trait and every impl need the attribute
//
// 2. Why Option<String> on every ListingEntry field?
//    - Real-world API responses don't always match their documentation
//    - Option lets serde accept entries with missing fields instead of
//      failing the whole response
//    - We decide what missing fields mean in exactly one place each
//
// 3. What is strip_suffix?
//    - Returns Some(rest) if the string ends with the suffix, else None
//    - Safer than replace(".git", "") which would also hit ".git" in the
//      middle of a name
//
// 4. Why is classify_status a separate function?
//    - The status-to-error mapping is the interesting logic; the request
//      itself is plumbing
//    - As a pure function it can be tested without a network
//    - Match guards (`status if !status.is_success()`) keep it readable
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_url() {
        let repo = parse_repo_url("https://bitbucket.org/atlassian/python-bitbucket").unwrap();
        assert_eq!(repo.workspace, "atlassian");
        assert_eq!(repo.slug, "python-bitbucket");
    }

    #[test]
    fn test_parse_repo_url_with_git_suffix() {
        let repo = parse_repo_url("https://bitbucket.org/team/project.git").unwrap();
        assert_eq!(repo.workspace, "team");
        assert_eq!(repo.slug, "project");
    }

    #[test]
    fn test_parse_repo_url_with_trailing_slash() {
        let repo = parse_repo_url("https://bitbucket.org/team/project/").unwrap();
        assert_eq!(repo.workspace, "team");
        assert_eq!(repo.slug, "project");
    }

    #[test]
    fn test_parse_repo_url_too_few_segments() {
        let result = parse_repo_url("https://bitbucket.org/team");
        assert!(matches!(result, Err(TreeError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_repo_url_empty_segment() {
        let result = parse_repo_url("https://bitbucket.org//project");
        assert!(matches!(result, Err(TreeError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_repo_url_strips_single_trailing_slash() {
        // Only one trailing slash is removed; an extra one just leaves a
        // harmless empty segment past the slug
        let repo = parse_repo_url("https://bitbucket.org/team/project//").unwrap();
        assert_eq!(repo.workspace, "team");
        assert_eq!(repo.slug, "project");
    }

    #[test]
    fn test_classify_status_not_found() {
        assert_eq!(
            classify_status(StatusCode::NOT_FOUND),
            Some(TreeError::NotFound)
        );
    }

    #[test]
    fn test_classify_status_forbidden() {
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN),
            Some(TreeError::AccessDenied)
        );
    }

    #[test]
    fn test_classify_status_other_failures() {
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            Some(TreeError::RequestFailed("HTTP 500".to_string()))
        );
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            Some(TreeError::RequestFailed("HTTP 429".to_string()))
        );
    }

    #[test]
    fn test_classify_status_success() {
        assert_eq!(classify_status(StatusCode::OK), None);
    }

    #[test]
    fn test_classify_directory_markers() {
        assert_eq!(classify_entry(Some("commit_directory")), EntryKind::Directory);
        assert_eq!(classify_entry(Some("directory")), EntryKind::Directory);
    }

    #[test]
    fn test_classify_file_markers() {
        assert_eq!(classify_entry(Some("commit_file")), EntryKind::File);
        assert_eq!(classify_entry(Some("file")), EntryKind::File);
    }

    #[test]
    fn test_classify_missing_type_is_file() {
        assert_eq!(classify_entry(None), EntryKind::File);
    }

    #[test]
    fn test_classify_unrecognized_type() {
        // Bitbucket uses "commit" for submodule pointers, which we skip
        assert_eq!(classify_entry(Some("commit")), EntryKind::Unknown);
        assert_eq!(classify_entry(Some("symlink")), EntryKind::Unknown);
    }

    #[test]
    fn test_listing_entry_deserializes_without_type() {
        let entry: ListingEntry = serde_json::from_str(r#"{"path": "README.md"}"#).unwrap();
        assert_eq!(entry.path.as_deref(), Some("README.md"));
        assert!(entry.kind.is_none());
    }

    #[test]
    fn test_listing_without_values_is_empty() {
        let listing: DirectoryListing = serde_json::from_str(r#"{"pagelen": 10}"#).unwrap();
        assert!(listing.values.is_none());
    }
}
