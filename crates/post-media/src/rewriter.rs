//! Applies a [`BlockProcessor`] to one serialized block.
//!
//! The block is split into its header attributes and its markup body, both
//! halves are handed to the processor, and the block is only rendered again
//! if one of them changed. Anything that cannot be read as a block comes back
//! exactly as it went in.

use std::borrow::Cow;

use post_blocks::{BlockAttributes, MarkupDocument, split_block};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::processor::BlockProcessor;

/// The outcome of processing one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    /// The block text: borrowed from the input when nothing changed.
    pub text: Cow<'a, str>,
    /// Whether the text differs from the input.
    pub changed: bool,
}

impl<'a> Rewrite<'a> {
    pub(crate) fn unchanged(raw: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(raw),
            changed: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_owned(self) -> Rewrite<'static> {
        Rewrite {
            text: Cow::Owned(self.text.into_owned()),
            changed: self.changed,
        }
    }
}

/// How the two hooks relate to each other.
///
/// Passes over whole posts use [`MatchPolicy::AttributesFirst`]; only a
/// caller that already knows a block belongs to the media item should ask
/// for [`MatchPolicy::Independent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Both hooks always run and either may change the block.
    Independent,
    /// The markup hook only runs once the attribute hook matched the local
    /// id, so blocks holding other media are left alone.
    #[default]
    AttributesFirst,
}

/// Process one block with both hooks run independently.
///
/// # Errors
///
/// Only structural failures while serializing a changed block are errors.
/// Text that is not a block, or whose header attributes are not a JSON
/// object, is returned unchanged.
///
/// # Example
/// ```
/// use post_media::{MediaReference, processors::VideoProcessor, rewriter::process_block};
///
/// let media = MediaReference::new("local-1", 42, "https://x/v.mp4").unwrap();
/// let raw = "<!-- wp:video {\"id\":\"local-1\"} -->\n<figure><video src=\"file:///v.mp4\"></video></figure>\n<!-- /wp:video -->";
///
/// let rewrite = process_block(raw, &VideoProcessor::new(media)).unwrap();
/// assert!(rewrite.changed);
/// assert!(rewrite.as_str().starts_with("<!-- wp:video {\"id\":42} -->"));
/// ```
pub fn process_block<'a, P>(raw: &'a str, processor: &P) -> Result<Rewrite<'a>>
where
    P: BlockProcessor + ?Sized,
{
    process_block_with(raw, processor, MatchPolicy::Independent)
}

/// Process one block under the given [`MatchPolicy`].
pub fn process_block_with<'a, P>(
    raw: &'a str,
    processor: &P,
    policy: MatchPolicy,
) -> Result<Rewrite<'a>>
where
    P: BlockProcessor + ?Sized,
{
    let Some(block) = split_block(raw) else {
        tracing::debug!("Not a serialized block, passing through");
        return Ok(Rewrite::unchanged(raw));
    };

    let mut attributes = match block.attributes {
        Some(text) => match BlockAttributes::parse(text) {
            Some(attributes) => attributes,
            None => {
                tracing::debug!(block = block.name, "Unreadable block attributes, passing through");
                return Ok(Rewrite::unchanged(raw));
            }
        },
        None => BlockAttributes::new(),
    };

    let mut document = match block.body {
        Some(body) => match MarkupDocument::parse(body.markup) {
            Some(document) => Some(document),
            None => {
                tracing::debug!(block = block.name, "Unreadable block markup, passing through");
                return Ok(Rewrite::unchanged(raw));
            }
        },
        None => None,
    };

    let attributes_changed = processor.process_json_attributes(&mut attributes);
    let run_content = match policy {
        MatchPolicy::Independent => true,
        MatchPolicy::AttributesFirst => attributes_changed,
    };
    let content_changed = run_content
        && document
            .as_mut()
            .is_some_and(|document| processor.process_content_document(document));

    tracing::trace!(
        block = block.name,
        attributes_changed,
        content_changed,
        "Processed block"
    );

    if !attributes_changed && !content_changed {
        return Ok(Rewrite::unchanged(raw));
    }

    // An unchanged half is written back exactly as it was read.
    let attribute_text = if attributes_changed {
        Some(attributes.serialize()?)
    } else {
        block.attributes.map(str::to_owned)
    };
    let markup = match (&document, content_changed) {
        (Some(document), true) => Some(document.serialize()?),
        _ => None,
    };

    tracing::debug!(block = block.name, "Rewrote block");
    Ok(Rewrite {
        text: Cow::Owned(block.render(attribute_text.as_deref(), markup.as_deref())),
        changed: true,
    })
}
