//! Video blocks.

use post_blocks::{BlockAttributes, MarkupDocument};

use crate::media::MediaReference;
use crate::processor::{BlockProcessor, replace_media_id};

const ID: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoProcessor {
    media: MediaReference,
}

impl VideoProcessor {
    pub fn new(media: MediaReference) -> Self {
        Self { media }
    }
}

impl BlockProcessor for VideoProcessor {
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool {
        replace_media_id(&self.media, attributes, ID)
    }

    fn process_content_document(&self, document: &mut MarkupDocument) -> bool {
        document
            .select_first("video")
            .is_some_and(|mut video| video.set_attribute("src", self.media.remote_url()))
    }
}
