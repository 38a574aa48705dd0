// src/bitbucket/walk.rs
// =============================================================================
// This module walks a repository's directory tree via the listing API.
//
// How it works:
// 1. Start with the root directory ("") on a stack
// 2. Pop a directory and request its listing
// 3. Record each file path; record each directory path (with a trailing /)
//    and push the directory for later listing
// 4. Repeat until the stack is empty (depth-first)
// 5. Deduplicate and sort the accumulated paths
//
// Failure policy:
// - A failure listing the ROOT aborts the whole walk (nothing useful exists)
// - A failure listing any other directory only abandons that subtree;
//   everything gathered from siblings is kept (warning printed to stderr)
//
// Rust concepts:
// - Vec as a stack: push/pop from the end gives depth-first order
// - BTreeSet: To deduplicate and sort paths in one pass
// - Generics with trait bounds: Works against any DirectoryLister
// =============================================================================

use std::collections::{BTreeSet, HashSet};

use crate::bitbucket::fetch::{classify_entry, DirectoryLister, EntryKind};
use crate::error::TreeError;

// Walks the whole repository and returns its flat path list
//
// Parameters:
//   lister: the listing API (live Bitbucket client, or a fake in tests)
//
// Returns: sorted, deduplicated Vec of paths relative to the repository
// root. Directories carry a trailing '/', files don't:
//   ["docs/", "docs/guide.md", "src/", "src/main.rs", "README.md"]
//
// Fails with whatever error the root listing produced, or EmptyRepository
// if the walk finished without finding a single entry.
pub async fn collect_paths<L: DirectoryLister>(lister: &L) -> Result<Vec<String>, TreeError> {
    let mut paths: Vec<String> = Vec::new();

    // Directories still waiting to be listed.
    // Popping from the end makes this depth-first; sibling order doesn't
    // matter because the final output is sorted anyway.
    let mut pending: Vec<String> = vec![String::new()];

    // Track listed directories so a remote that repeats itself (or points a
    // directory back at an ancestor) can't send the walk in circles
    let mut visited: HashSet<String> = HashSet::new();

    while let Some(dir) = pending.pop() {
        if !visited.insert(dir.clone()) {
            continue;
        }
        let entries = match lister.list_directory(&dir).await {
            Ok(entries) => entries,
            Err(e) => {
                // The root failing means the repository itself is missing,
                // private, or unreachable - that's fatal
                if dir.is_empty() {
                    return Err(e);
                }
                // A subdirectory failing only loses that subtree;
                // keep whatever the rest of the walk gathers
                eprintln!("  Warning: could not list directory '{}': {}", dir, e);
                continue;
            }
        };

        for entry in entries {
            // The entry name may arrive as `path` or `name`;
            // an entry with neither is useless and skipped
            let name = match entry.path.or(entry.name) {
                Some(name) if !name.is_empty() => name,
                _ => continue,
            };

            let full_path = join_path(&dir, &name);

            match classify_entry(entry.kind.as_deref()) {
                EntryKind::Directory => {
                    // Record the directory itself (trailing slash marks it),
                    // then queue it for its own listing
                    paths.push(format!("{}/", full_path));
                    pending.push(full_path);
                }
                EntryKind::File => {
                    paths.push(full_path);
                }
                // Submodule pointers and other exotica are silently skipped
                EntryKind::Unknown => {}
            }
        }
    }

    // The same item can surface twice (as a listing entry and again as a
    // recursion target), so dedup through a BTreeSet - which sorts too
    let unique: BTreeSet<String> = paths.into_iter().collect();

    if unique.is_empty() {
        return Err(TreeError::EmptyRepository);
    }

    Ok(unique.into_iter().collect())
}

// Joins an entry name onto its parent directory path
//
// The listing endpoint sometimes returns names already qualified from the
// repository root ("docs/guide.md" inside "docs"), so joining is skipped
// when the name already starts with the parent prefix.
fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() || name.starts_with(&format!("{}/", dir)) {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Vec instead of recursion?
//    - Async recursion in Rust requires boxing every nested future
//    - An explicit stack of pending directories is simpler and gives the
//      same depth-first visit order
//
// 2. What is BTreeSet?
//    - A sorted set: no duplicates, iterates in order
//    - Collecting a Vec into one deduplicates and sorts in a single step
//
// 3. Why `entry.path.or(entry.name)`?
//    - Option::or returns the first Option that is Some
//    - It reads as "take path, fall back to name"
//
// 4. What does `continue` do in the error arm?
//    - Skips the rest of this loop iteration and pops the next directory
//    - That's exactly "abandon this subtree, keep walking"
// -----------------------------------------------------------------------------
