//! One upload-completion pass over the blocks of a post.

use post_blocks::split_block;

use crate::config::RewriteConfig;
use crate::error::Result;
use crate::kind::BlockKind;
use crate::media::MediaReference;
use crate::processor::MediaBlockProcessor;
use crate::rewriter::{MatchPolicy, Rewrite, process_block_with};

/// Rewrites blocks that reference a freshly uploaded media item.
///
/// Holds one processor per enabled block kind, built once for the pass and
/// reused for every block. Unless configured otherwise, a block's markup is
/// only touched once its header attributes matched the local id.
///
/// # Example
/// ```
/// use post_media::{MediaReference, RewriteConfig, UploadCompletionProcessor};
///
/// let media = MediaReference::new("local-1", 42, "https://x/y.jpg").unwrap();
/// let pass = UploadCompletionProcessor::new(media, &RewriteConfig::default());
///
/// let raw = "<!-- wp:media-text {\"mediaId\":\"local-1\"} -->\n<div><figure><img src=\"file:///y.jpg\" class=\"wp-image-local-1\"/></figure></div>\n<!-- /wp:media-text -->";
/// let rewrite = pass.process_block(raw).unwrap();
///
/// assert!(rewrite.changed);
/// assert!(rewrite.as_str().contains("src=\"https://x/y.jpg\""));
/// ```
#[derive(Debug, Clone)]
pub struct UploadCompletionProcessor {
    media: MediaReference,
    processors: Vec<MediaBlockProcessor>,
    policy: MatchPolicy,
}

impl UploadCompletionProcessor {
    pub fn new(media: MediaReference, config: &RewriteConfig) -> Self {
        let media = if config.strip_url_query {
            media.without_url_query()
        } else {
            media
        };

        let mut processors = Vec::new();
        for kind in BlockKind::ALL {
            if config.is_enabled(kind) {
                processors.push(MediaBlockProcessor::new(kind, media.clone()));
            }
        }

        Self {
            media,
            processors,
            policy: config.match_policy,
        }
    }

    /// The reference as it is written into blocks.
    pub fn media(&self) -> &MediaReference {
        &self.media
    }

    /// The processor for a block, if its kind is enabled.
    pub fn processor_for(&self, raw: &str) -> Option<&MediaBlockProcessor> {
        let kind = BlockKind::from_block_name(split_block(raw)?.name)?;
        self.processors.iter().find(|p| p.kind() == kind)
    }

    /// Process one block. Blocks of other kinds come back unchanged.
    pub fn process_block<'a>(&self, raw: &'a str) -> Result<Rewrite<'a>> {
        match self.processor_for(raw) {
            Some(processor) => process_block_with(raw, processor, self.policy),
            None => {
                tracing::trace!("No processor for block, passing through");
                Ok(Rewrite::unchanged(raw))
            }
        }
    }

    /// Process a sequence of blocks in order.
    ///
    /// Stops at the first structural error; no-match blocks are not errors.
    pub fn process_blocks<'a, I>(&self, blocks: I) -> Result<ProcessedBlocks<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let blocks = blocks
            .into_iter()
            .map(|raw| self.process_block(raw))
            .collect::<Result<Vec<_>>>()?;

        let processed = ProcessedBlocks { blocks };
        tracing::debug!(
            local_id = self.media.local_id(),
            remote_id = self.media.remote_id(),
            changed = processed.changed_count(),
            total = processed.blocks.len(),
            "Processed upload completion"
        );
        Ok(processed)
    }
}

/// Results of [`UploadCompletionProcessor::process_blocks`], in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedBlocks<'a> {
    pub blocks: Vec<Rewrite<'a>>,
}

impl ProcessedBlocks<'_> {
    pub fn changed_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.changed).count()
    }

    pub fn is_changed(&self) -> bool {
        self.blocks.iter().any(|b| b.changed)
    }

    /// Concatenate the block texts, e.g. to rebuild a post body.
    pub fn join(&self, separator: &str) -> String {
        self.blocks
            .iter()
            .map(Rewrite::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
