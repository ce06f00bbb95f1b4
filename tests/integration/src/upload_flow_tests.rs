//! End-to-end upload completion over fixture posts
//!
//! Exercises the complete flow: upload event -> config -> pass over a post ->
//! rebuilt post body.

use post_blocks::{MarkupDocument, split_block};
use post_media::{MediaReference, RewriteConfig, UploadCompletionProcessor, logging};
use post_test_utils::fixtures::post_blocks;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const REMOTE_URL: &str = "https://example.files.wordpress.com/2024/05/img_0001.jpg";

/// Install the log subscriber once per test binary. Later calls find it
/// already set, which is fine.
fn setup() {
    let _ = logging::init();
}

/// The upload result as the media service reports it.
fn upload_event(local_id: &str, remote_url: &str) -> MediaReference {
    serde_json::from_value(serde_json::json!({
        "localId": local_id,
        "remoteId": 901,
        "remoteUrl": remote_url,
    }))
    .unwrap()
}

fn first_img_src(raw: &str) -> Option<String> {
    let block = split_block(raw)?;
    let mut document = MarkupDocument::parse(block.body?.markup)?;
    let img = document.select_first("img")?;
    img.attribute("src")
}

#[test]
fn test_upload_completion_rewrites_post() {
    setup();
    let blocks = post_blocks("mixed");
    let pass = UploadCompletionProcessor::new(upload_event("local-1", REMOTE_URL), &RewriteConfig::default());

    let processed = pass
        .process_blocks(blocks.iter().map(String::as_str))
        .unwrap();
    assert_eq!(processed.changed_count(), 1);

    let post = processed.join("");
    assert!(post.contains(r#"<!-- wp:image {"id":901,"sizeSlug":"large","linkDestination":"media"} -->"#));
    assert!(!post.contains("file:///"));
    assert_eq!(
        first_img_src(processed.blocks[1].as_str()).as_deref(),
        Some(REMOTE_URL)
    );

    // Untouched blocks are the very same text.
    assert_eq!(processed.blocks[0].as_str(), blocks[0]);
    assert_eq!(processed.blocks[2].as_str(), blocks[2]);
}

#[test]
fn test_second_pass_over_rewritten_post_is_a_no_op() {
    setup();
    for post in ["mixed", "media-text", "all-kinds"] {
        let blocks = post_blocks(post);
        let pass = UploadCompletionProcessor::new(upload_event("local-1", REMOTE_URL), &RewriteConfig::default());

        let first = pass
            .process_blocks(blocks.iter().map(String::as_str))
            .unwrap();
        let rewritten: Vec<String> = first.blocks.iter().map(|b| b.as_str().to_owned()).collect();

        let second = pass
            .process_blocks(rewritten.iter().map(String::as_str))
            .unwrap();
        assert!(!second.is_changed(), "second pass changed post {post}");
        assert_eq!(second.join(""), first.join(""));
    }
}

#[test]
fn test_pass_for_other_media_leaves_post_alone() {
    setup();
    for post in ["mixed", "media-text", "all-kinds"] {
        let blocks = post_blocks(post);
        let pass = UploadCompletionProcessor::new(
            upload_event("local-99", REMOTE_URL),
            &RewriteConfig::default(),
        );

        let processed = pass
            .process_blocks(blocks.iter().map(String::as_str))
            .unwrap();
        assert_eq!(processed.changed_count(), 0, "post {post}");
        assert_eq!(processed.join(""), blocks.concat());
    }
}

#[test]
fn test_config_file_drives_the_pass() {
    setup();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rewrite.toml");
    fs::write(
        &path,
        r#"
kinds = ["media-text"]
strip_url_query = true
"#,
    )
    .unwrap();
    let config = RewriteConfig::load(&path).unwrap();

    let mut blocks = post_blocks("mixed");
    blocks.extend(post_blocks("media-text"));
    let event = upload_event("local-1", &format!("{REMOTE_URL}?w=1024"));
    let pass = UploadCompletionProcessor::new(event, &config);

    let processed = pass
        .process_blocks(blocks.iter().map(String::as_str))
        .unwrap();

    // The image block in "mixed" is not an enabled kind, and the media-text
    // video belongs to media item 7.
    let changed: Vec<usize> = processed
        .blocks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.changed)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(changed, vec![4]);
    assert_eq!(
        first_img_src(processed.blocks[4].as_str()).as_deref(),
        Some(REMOTE_URL)
    );
    assert_eq!(processed.blocks[5].as_str(), blocks[5]);
}

#[test]
fn test_every_kind_in_one_post() {
    setup();
    let blocks = post_blocks("all-kinds");
    let media = MediaReference::new("local-5", 77, "https://cdn.example/upload").unwrap();
    let pass = UploadCompletionProcessor::new(media, &RewriteConfig::default());

    let processed = pass
        .process_blocks(blocks.iter().map(String::as_str))
        .unwrap();

    let headers: Vec<&str> = processed
        .blocks
        .iter()
        .map(|b| b.as_str().lines().next().unwrap_or_default())
        .collect();
    assert_eq!(
        headers,
        vec![
            r#"<!-- wp:video {"id":77} -->"#,
            r#"<!-- wp:audio {"id":77} -->"#,
            r#"<!-- wp:file {"id":77,"href":"https://cdn.example/upload"} -->"#,
            r#"<!-- wp:spacer {"height":"40px"} /-->"#,
        ]
    );
}
