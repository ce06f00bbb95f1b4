//! File blocks: a link to the file plus an optional download button.

use post_blocks::{BlockAttributes, MarkupDocument};

use crate::media::MediaReference;
use crate::processor::{BlockProcessor, replace_media_id};

const ID: &str = "id";
const HREF: &str = "href";
const DOWNLOAD_BUTTON: &str = "a.wp-block-file__button";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProcessor {
    media: MediaReference,
}

impl FileProcessor {
    pub fn new(media: MediaReference) -> Self {
        Self { media }
    }
}

impl BlockProcessor for FileProcessor {
    /// The header also stores the file URL, which follows the id.
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool {
        if !replace_media_id(&self.media, attributes, ID) {
            return false;
        }
        attributes.set_string(HREF, self.media.remote_url());
        true
    }

    fn process_content_document(&self, document: &mut MarkupDocument) -> bool {
        let url = self.media.remote_url();
        let mut changed = document
            .select_first("a")
            .is_some_and(|mut link| link.set_attribute("href", url));
        changed |= document
            .select_first(DOWNLOAD_BUTTON)
            .is_some_and(|mut button| button.set_attribute("href", url));
        changed
    }
}
