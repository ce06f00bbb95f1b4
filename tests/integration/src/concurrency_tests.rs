//! Passes shared across threads
//!
//! A pass holds only immutable data, so one instance can serve several
//! posts at once.

use post_media::{MediaReference, RewriteConfig, UploadCompletionProcessor};
use post_test_utils::blocks::{image_block, media_text_image_block, paragraph_block};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_processor_types_are_send_and_sync() {
    assert_send_sync::<UploadCompletionProcessor>();
    assert_send_sync::<post_media::MediaBlockProcessor>();
    assert_send_sync::<MediaReference>();
}

#[test]
fn test_shared_pass_gives_same_result_on_every_thread() {
    let media = MediaReference::new("local-1", 42, "https://x/y.jpg").unwrap();
    let pass = Arc::new(UploadCompletionProcessor::new(media, &RewriteConfig::default()));

    let post = vec![
        paragraph_block("Intro"),
        image_block("local-1", "file:///a.jpg"),
        media_text_image_block("local-1", "file:///a.jpg"),
    ];
    let expected = pass
        .process_blocks(post.iter().map(String::as_str))
        .unwrap()
        .join("\n");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pass = Arc::clone(&pass);
            let post = post.clone();
            thread::spawn(move || {
                pass.process_blocks(post.iter().map(String::as_str))
                    .unwrap()
                    .join("\n")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
