// src/tree/render.rs
// =============================================================================
// This module turns a flat path list into an ASCII-art tree.
//
// Input:  ["docs/", "docs/guide.md", "src/", "src/main.rs", "README.md"]
// Output:
//   ├── docs
//   │   └── guide.md
//   ├── src
//   │   └── main.rs
//   └── README.md
//
// How it works:
// 1. Insert every path, segment by segment, into a nested map
// 2. Walk the map depth-first, directories before files at each level
// 3. Emit one line per entry with the right connector and indent prefix
//
// The function is pure: same input in any order gives byte-identical
// output, because all sorting happens inside.
//
// Rust concepts:
// - BTreeMap: Sorted map, used for the nested tree structure
// - Recursion: The tree is naturally recursive, so the writer is too
// - String building: Appending to a shared String instead of allocating
//   a new one per line
// =============================================================================

use std::collections::BTreeMap;

// Connectors and indent pieces for the tree drawing
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

// What render_tree returns when there is nothing to draw.
// The walker rejects empty repositories before rendering, so this is a
// defensive fallback, not a path callers should ever see.
const EMPTY_MESSAGE: &str = "Repository is empty.";

// One node of the intermediate tree
//
// A node with children is a directory; a node without is a file.
// The struct exists only during rendering and is never exposed.
#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn is_directory(&self) -> bool {
        !self.children.is_empty()
    }
}

// Renders a flat path list as an ASCII tree
//
// Paths use '/' separators; a trailing '/' marks a directory. Duplicate
// paths and shuffled input are handled (insertion is idempotent and
// ordering is internal), so callers don't need to pre-sort.
//
// Returns the tree as one String of newline-terminated lines, or a
// literal empty-repository message if there was nothing to draw.
pub fn render_tree<S: AsRef<str>>(paths: &[S]) -> String {
    let mut root = TreeNode::default();

    for path in paths {
        // Trailing slash only marks directory-ness; the segments are the same
        let clean = path.as_ref().trim_end_matches('/');

        let mut node = &mut root;
        // filter guards against accidental double separators ("a//b")
        for segment in clean.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    let mut output = String::new();
    write_level(&root, "", &mut output);

    if output.is_empty() {
        EMPTY_MESSAGE.to_string()
    } else {
        output
    }
}

// Writes one level of the tree (and recursively all levels below it)
//
// Parameters:
//   node: the directory node whose children we're drawing
//   prefix: the indent accumulated from all ancestor levels
//   output: the shared string all lines append to
fn write_level(node: &TreeNode, prefix: &str, output: &mut String) {
    // Directories first, then files; alphabetical within each group.
    // Ordering is plain byte-wise str comparison, not locale-aware
    // collation, so non-ASCII names sort the same on every machine.
    // A name that was listed both ways collapsed into one node on insert,
    // and that node counts as a directory as soon as it has any children.
    let mut names: Vec<&String> = node.children.keys().collect();
    names.sort_by(|a, b| {
        let a_dir = node.children[*a].is_directory();
        let b_dir = node.children[*b].is_directory();
        b_dir.cmp(&a_dir).then_with(|| a.cmp(b))
    });

    let last_index = names.len().saturating_sub(1);
    for (index, name) in names.iter().enumerate() {
        let is_last = index == last_index;

        output.push_str(prefix);
        output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        output.push_str(name);
        output.push('\n');

        let child = &node.children[*name];
        if child.is_directory() {
            // Below a last child the vertical pipe stops; otherwise it
            // continues down past this entry
            let extension = if is_last { BLANK_INDENT } else { PIPE_INDENT };
            write_level(child, &format!("{}{}", prefix, extension), output);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BTreeMap instead of HashMap?
//    - BTreeMap iterates in key order, which keeps output deterministic
//    - We still re-sort per level (directories first), but starting from
//      sorted keys makes that sort stable and predictable
//
// 2. What is or_default()?
//    - entry(key).or_default() returns the existing value, or inserts
//      Default::default() first if the key was missing
//    - That one line is the whole "walk or create" insertion step
//
// 3. What is AsRef<str>?
//    - A generic bound that accepts &[String], &[&str], or anything else
//      that can be viewed as a string slice
//    - Callers don't have to convert their collections first
//
// 4. How does the prefix work?
//    - Each level adds 4 characters: "│   " while its parent has more
//      siblings below, "    " after the parent was the last one
//    - The connectors themselves ("├── ", "└── ") are per-line, not part
//      of the accumulated prefix
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_directory_before_file() {
        // "a" sorts after "b.txt" lexically, but directories come first
        let paths = vec!["a/", "a/c.txt", "b.txt"];
        let tree = render_tree(&paths);
        assert_eq!(tree, "├── a\n│   └── c.txt\n└── b.txt\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let paths = vec!["src/", "src/main.rs", "README.md"];
        assert_eq!(render_tree(&paths), render_tree(&paths));
    }

    #[test]
    fn test_render_is_order_independent() {
        let ordered = vec!["a/", "a/c.txt", "b.txt", "z/", "z/d.txt"];
        let shuffled = vec!["z/d.txt", "b.txt", "a/c.txt", "z/", "a/"];
        assert_eq!(render_tree(&ordered), render_tree(&shuffled));
    }

    #[test]
    fn test_render_ignores_duplicates() {
        let once = vec!["x/", "x/y.txt"];
        let twice = vec!["x/", "x/", "x/y.txt", "x/y.txt"];
        assert_eq!(render_tree(&once), render_tree(&twice));
    }

    #[test]
    fn test_render_empty_input() {
        let paths: Vec<String> = Vec::new();
        assert_eq!(render_tree(&paths), "Repository is empty.");
    }

    #[test]
    fn test_render_empty_directory_is_leaf() {
        // An empty directory has no children, so it draws like a file
        let paths = vec!["empty/", "file.txt"];
        assert_eq!(render_tree(&paths), "├── empty\n└── file.txt\n");
    }

    #[test]
    fn test_render_file_and_directory_same_name() {
        // Malformed remote data can list "x" both as file and directory;
        // they collapse into one node and the directory shape wins
        let paths = vec!["x", "x/", "x/inner.txt"];
        assert_eq!(render_tree(&paths), "└── x\n    └── inner.txt\n");
    }

    #[test]
    fn test_render_double_separator_is_tolerated() {
        let paths = vec!["a//b.txt"];
        assert_eq!(render_tree(&paths), "└── a\n    └── b.txt\n");
    }

    #[test]
    fn test_render_deep_nesting_prefixes() {
        let paths = vec![
            "top/",
            "top/mid/",
            "top/mid/leaf.txt",
            "top/other.txt",
            "last.txt",
        ];
        let expected = "\
├── top
│   ├── mid
│   │   └── leaf.txt
│   └── other.txt
└── last.txt
";
        assert_eq!(render_tree(&paths), expected);
    }

    #[test]
    fn test_render_files_sorted_alphabetically() {
        let paths = vec!["b.txt", "a.txt", "c.txt"];
        assert_eq!(render_tree(&paths), "├── a.txt\n├── b.txt\n└── c.txt\n");
    }
}
