//! Integration tests for the markup adapter.

use post_blocks::markup::MarkupDocument;
use pretty_assertions::assert_eq;

#[test]
fn test_serialize_unmodified_fragment() {
    let doc = MarkupDocument::parse(
        "<figure class=\"wp-block-video\"><video controls src=\"a.mp4\"></video></figure>",
    )
    .unwrap();
    assert_eq!(
        doc.serialize().unwrap(),
        "<figure class=\"wp-block-video\"><video controls=\"\" src=\"a.mp4\"></video></figure>"
    );
}

#[test]
fn test_select_first_returns_document_order() {
    let mut doc =
        MarkupDocument::parse("<div><img src=\"first.png\"><p><img src=\"second.png\"></p></div>")
            .unwrap();
    let img = doc.select_first("img").unwrap();
    assert_eq!(img.attribute("src").as_deref(), Some("first.png"));
}

#[test]
fn test_select_all_collects_every_match() {
    let mut doc = MarkupDocument::parse(
        "<div class=\"wp-block-file\"><a href=\"a\">a</a><a href=\"b\" class=\"wp-block-file__button\">b</a></div>",
    )
    .unwrap();
    let links = doc.select_all("a");
    assert_eq!(links.len(), 2);
    assert!(links[1].has_class("wp-block-file__button"));
}

#[test]
fn test_mutations_are_visible_in_serialized_output() {
    let mut doc =
        MarkupDocument::parse("<img src=\"file:///local.jpg\" class=\"size-large wp-image-local\">")
            .unwrap();
    {
        let mut img = doc.select_first("img").unwrap();
        assert!(img.set_attribute("src", "https://example.com/a.jpg"));
        assert!(img.remove_class("wp-image-local"));
        assert!(img.add_class("wp-image-42"));
    }

    let html = doc.serialize().unwrap();
    assert!(html.contains("src=\"https://example.com/a.jpg\""));
    assert!(html.contains("class=\"size-large wp-image-42\""));
    assert!(!html.contains("wp-image-local"));
}

#[test]
fn test_has_class_matches_whole_tokens_only() {
    let mut doc = MarkupDocument::parse("<img class=\"wp-image-12\">").unwrap();
    let img = doc.select_first("img").unwrap();
    assert!(img.has_class("wp-image-12"));
    assert!(!img.has_class("wp-image-1"));
}

#[test]
fn test_parent_element_of_linked_image() {
    let mut doc =
        MarkupDocument::parse("<figure><a href=\"x.jpg\"><img src=\"x.jpg\"></a></figure>").unwrap();
    let img = doc.select_first("img").unwrap();
    let parent = img.parent_element().unwrap();
    assert!(parent.is("a"));
    assert_eq!(parent.attribute("href").as_deref(), Some("x.jpg"));
}

#[test]
fn test_text_and_comments_survive() {
    let html = "<div><!-- wp:paragraph --><p>Caption &amp; text</p><!-- /wp:paragraph --></div>";
    let doc = MarkupDocument::parse(html).unwrap();
    assert_eq!(doc.serialize().unwrap(), html);
}
