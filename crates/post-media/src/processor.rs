//! The per-block processing contract and its closed set of implementations.
//!
//! Every block kind supplies two independent hooks: one for the JSON
//! attributes in the block header and one for the markup body. Either hook,
//! both, or neither may change a block; [`crate::rewriter`] decides from
//! their answers whether the block is reserialized.

use post_blocks::{BlockAttributes, MarkupDocument};

use crate::kind::BlockKind;
use crate::media::MediaReference;
use crate::processors::{
    AudioProcessor, FileProcessor, ImageProcessor, MediaTextProcessor, VideoProcessor,
};

/// Kind-specific rewriting of one block for one media reference.
///
/// Implementations hold nothing but the reference they were built with, so a
/// processor can be reused across any number of blocks.
pub trait BlockProcessor {
    /// Replace the local media id in the header attributes.
    ///
    /// Returns `true` only if the attributes were changed.
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool;

    /// Point the media element(s) in the body at the uploaded file.
    ///
    /// Returns `true` only if the document was changed.
    fn process_content_document(&self, document: &mut MarkupDocument) -> bool;
}

/// A processor for one of the media-bearing [`BlockKind`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaBlockProcessor {
    Image(ImageProcessor),
    Video(VideoProcessor),
    MediaText(MediaTextProcessor),
    Audio(AudioProcessor),
    File(FileProcessor),
}

impl MediaBlockProcessor {
    pub fn new(kind: BlockKind, media: MediaReference) -> Self {
        match kind {
            BlockKind::Image => Self::Image(ImageProcessor::new(media)),
            BlockKind::Video => Self::Video(VideoProcessor::new(media)),
            BlockKind::MediaText => Self::MediaText(MediaTextProcessor::new(media)),
            BlockKind::Audio => Self::Audio(AudioProcessor::new(media)),
            BlockKind::File => Self::File(FileProcessor::new(media)),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Image(_) => BlockKind::Image,
            Self::Video(_) => BlockKind::Video,
            Self::MediaText(_) => BlockKind::MediaText,
            Self::Audio(_) => BlockKind::Audio,
            Self::File(_) => BlockKind::File,
        }
    }

    fn as_processor(&self) -> &dyn BlockProcessor {
        match self {
            Self::Image(p) => p,
            Self::Video(p) => p,
            Self::MediaText(p) => p,
            Self::Audio(p) => p,
            Self::File(p) => p,
        }
    }
}

impl BlockProcessor for MediaBlockProcessor {
    fn process_json_attributes(&self, attributes: &mut BlockAttributes) -> bool {
        self.as_processor().process_json_attributes(attributes)
    }

    fn process_content_document(&self, document: &mut MarkupDocument) -> bool {
        self.as_processor().process_content_document(document)
    }
}

/// Replace `key` with the remote id when it holds exactly the local id.
pub(crate) fn replace_media_id(
    media: &MediaReference,
    attributes: &mut BlockAttributes,
    key: &str,
) -> bool {
    if !attributes.lookup(key).matches(media.local_id()) {
        return false;
    }
    attributes.set_int(key, media.remote_id())
}

/// Class token that ties an `img` to its media library item.
pub(crate) fn image_class(id: impl std::fmt::Display) -> String {
    format!("wp-image-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaReference {
        MediaReference::new("local-1", 42, "https://x/y.jpg").unwrap()
    }

    #[test]
    fn test_replace_media_id_only_on_exact_match() {
        let mut attrs = BlockAttributes::parse(r#"{"id":"local-10"}"#).unwrap();
        assert!(!replace_media_id(&media(), &mut attrs, "id"));

        let mut attrs = BlockAttributes::parse(r#"{"id":"local-1"}"#).unwrap();
        assert!(replace_media_id(&media(), &mut attrs, "id"));
        assert_eq!(attrs.serialize().unwrap(), r#"{"id":42}"#);
    }

    #[test]
    fn test_kind_matches_constructor() {
        for kind in BlockKind::ALL {
            assert_eq!(MediaBlockProcessor::new(kind, media()).kind(), kind);
        }
    }
}
