//! Fixture posts under `test-fixtures/posts`.
//!
//! Each post is a directory holding one file per top-level block, named so
//! that lexical order is block order (`01-paragraph.html`, ...).

use std::fs;
use std::path::PathBuf;

/// Root of the fixture posts.
pub fn posts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
        .join("posts")
}

/// The blocks of a fixture post, in order.
///
/// Panics if the post does not exist, which is a broken test setup.
pub fn post_blocks(post: &str) -> Vec<String> {
    let dir = posts_dir().join(post);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("fixture post {} not readable: {e}", dir.display()))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("fixture block {} not readable: {e}", path.display()))
        })
        .collect()
}
