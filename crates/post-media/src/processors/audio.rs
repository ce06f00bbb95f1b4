//! Audio blocks.

use post_blocks::{BlockAttributes, MarkupDocument};

use crate::media::MediaReference;
use crate::processor::{BlockProcessor, replace_media_id};

const ID: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioProcessor {
    media: MediaReference,
}

impl AudioProcessor {
    pub fn new(media: MediaReference) -> Self {
        Self { media }
    }
}

impl BlockProcessor for AudioProcessor {
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool {
        replace_media_id(&self.media, attributes, ID)
    }

    fn process_content_document(&self, document: &mut MarkupDocument) -> bool {
        document
            .select_first("audio")
            .is_some_and(|mut audio| audio.set_attribute("src", self.media.remote_url()))
    }
}
