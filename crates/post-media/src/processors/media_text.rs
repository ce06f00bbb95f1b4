//! Media & Text blocks.
//!
//! ```text
//! <!-- wp:media-text {"mediaId":"local-1","mediaType":"image"} -->
//! <div class="wp-block-media-text">
//!   <figure class="wp-block-media-text__media">
//!     <img src="file:///local.jpg" class="wp-image-local-1 size-full"/>
//!   </figure>
//!   <div class="wp-block-media-text__content">...</div>
//! </div>
//! <!-- /wp:media-text -->
//! ```
//!
//! The media column holds either an image or a video. Only images carry the
//! `wp-image-{id}` class.

use post_blocks::{BlockAttributes, MarkupDocument};

use crate::media::MediaReference;
use crate::processor::{BlockProcessor, image_class, replace_media_id};

const MEDIA_ID: &str = "mediaId";

/// Rewrites a Media & Text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTextProcessor {
    media: MediaReference,
}

impl MediaTextProcessor {
    pub fn new(media: MediaReference) -> Self {
        Self { media }
    }
}

impl BlockProcessor for MediaTextProcessor {
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool {
        replace_media_id(&self.media, attributes, MEDIA_ID)
    }

    /// Rewrites the first `img`, or failing that the first `video`.
    ///
    /// The block holds a single media item, so later elements of the same
    /// kind are left alone.
    fn process_content_document(&self, document: &mut MarkupDocument) -> bool {
        if let Some(mut img) = document.select_first("img") {
            let mut changed = img.set_attribute("src", self.media.remote_url());
            changed |= img.remove_class(&image_class(self.media.local_id()));
            changed |= img.add_class(&image_class(self.media.remote_id()));
            return changed;
        }

        if let Some(mut video) = document.select_first("video") {
            return video.set_attribute("src", self.media.remote_url());
        }

        false
    }
}
