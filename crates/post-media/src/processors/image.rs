//! Image blocks.

use post_blocks::{BlockAttributes, MarkupDocument};

use crate::media::MediaReference;
use crate::processor::{BlockProcessor, image_class, replace_media_id};

const ID: &str = "id";

/// Rewrites an Image block.
///
/// The `img` is found by its `wp-image-{localId}` class rather than by
/// position, so images of other media items are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProcessor {
    media: MediaReference,
}

impl ImageProcessor {
    pub fn new(media: MediaReference) -> Self {
        Self { media }
    }
}

impl BlockProcessor for ImageProcessor {
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool {
        replace_media_id(&self.media, attributes, ID)
    }

    fn process_content_document(&self, document: &mut MarkupDocument) -> bool {
        let local_class = image_class(self.media.local_id());
        let Some(mut img) = document
            .select_all("img")
            .into_iter()
            .find(|img| img.has_class(&local_class))
        else {
            return false;
        };

        let old_src = img.attribute("src");
        let mut changed = img.set_attribute("src", self.media.remote_url());
        changed |= img.remove_class(&local_class);
        changed |= img.add_class(&image_class(self.media.remote_id()));

        // "Link to media file" wraps the image in an anchor to its own source.
        if let Some(mut link) = img.parent_element().filter(|parent| parent.is("a")) {
            if old_src.is_some() && link.attribute("href") == old_src {
                changed |= link.set_attribute("href", self.media.remote_url());
            }
        }

        changed
    }
}
