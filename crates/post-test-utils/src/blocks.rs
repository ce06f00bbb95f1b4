//! Builders for serialized blocks.
//!
//! Output follows the editor's own serialization: header, newline, markup,
//! newline, closing marker.

/// Wrap markup in a block with the given name and attribute JSON.
pub fn block(name: &str, attributes: Option<&str>, markup: &str) -> String {
    let header = match attributes {
        Some(attributes) => format!("<!-- wp:{name} {attributes} -->"),
        None => format!("<!-- wp:{name} -->"),
    };
    format!("{header}\n{markup}\n<!-- /wp:{name} -->")
}

pub fn paragraph_block(text: &str) -> String {
    block("paragraph", None, &format!("<p>{text}</p>"))
}

/// An Image block whose `img` carries `wp-image-{id}`.
pub fn image_block(id: &str, src: &str) -> String {
    let attributes = if id.parse::<i64>().is_ok() {
        format!(r#"{{"id":{id},"sizeSlug":"large"}}"#)
    } else {
        format!(r#"{{"id":"{id}","sizeSlug":"large"}}"#)
    };
    block(
        "image",
        Some(&attributes),
        &format!(
            r#"<figure class="wp-block-image size-large"><img src="{src}" alt="" class="wp-image-{id}"/></figure>"#
        ),
    )
}

pub fn video_block(id: &str, src: &str) -> String {
    block(
        "video",
        Some(&format!(r#"{{"id":"{id}"}}"#)),
        &format!(r#"<figure class="wp-block-video"><video controls src="{src}"></video></figure>"#),
    )
}

/// A Media & Text block showing an image.
pub fn media_text_image_block(media_id: &str, src: &str) -> String {
    block(
        "media-text",
        Some(&format!(r#"{{"mediaId":"{media_id}","mediaType":"image"}}"#)),
        &format!(
            concat!(
                r#"<div class="wp-block-media-text alignwide is-stacked-on-mobile">"#,
                r#"<figure class="wp-block-media-text__media"><img src="{src}" alt="" class="wp-image-{media_id} size-full"/></figure>"#,
                r#"<div class="wp-block-media-text__content"><p>Caption</p></div></div>"#
            ),
            src = src,
            media_id = media_id
        ),
    )
}

/// A Media & Text block showing a video.
pub fn media_text_video_block(media_id: &str, src: &str) -> String {
    block(
        "media-text",
        Some(&format!(r#"{{"mediaId":"{media_id}","mediaType":"video"}}"#)),
        &format!(
            concat!(
                r#"<div class="wp-block-media-text alignwide">"#,
                r#"<figure class="wp-block-media-text__media"><video controls src="{src}"></video></figure>"#,
                r#"<div class="wp-block-media-text__content"><p>Caption</p></div></div>"#
            ),
            src = src
        ),
    )
}

pub fn audio_block(id: &str, src: &str) -> String {
    block(
        "audio",
        Some(&format!(r#"{{"id":"{id}"}}"#)),
        &format!(r#"<figure class="wp-block-audio"><audio controls src="{src}"></audio></figure>"#),
    )
}

pub fn file_block(id: &str, href: &str) -> String {
    block(
        "file",
        Some(&format!(r#"{{"id":"{id}","href":"{href}"}}"#)),
        &format!(
            concat!(
                r#"<div class="wp-block-file"><a href="{href}">document.pdf</a>"#,
                r#"<a href="{href}" class="wp-block-file__button" download>Download</a></div>"#
            ),
            href = href
        ),
    )
}

pub fn gallery_block(ids: &[i64]) -> String {
    let ids_json = ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let items: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<li class="blocks-gallery-item"><figure><img src="https://example.com/{id}.jpg" data-id="{id}" class="wp-image-{id}"/></figure></li>"#
            )
        })
        .collect();
    block(
        "gallery",
        Some(&format!(r#"{{"ids":[{ids_json}]}}"#)),
        &format!(r#"<ul class="wp-block-gallery columns-3">{items}</ul>"#),
    )
}
