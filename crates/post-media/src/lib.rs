//! Rewrites local media references in post blocks once an upload completes.
//!
//! While a media item uploads, the blocks that show it point at a local id
//! and a local file. When the upload finishes, every block that references
//! the local id is rewritten to the remote id and URL; every other block is
//! returned byte-for-byte as it was.
//!
//! - [`MediaReference`] is the completed upload.
//! - [`BlockProcessor`] is the per-kind contract, with one implementation per
//!   [`BlockKind`] in [`processors`].
//! - [`rewriter::process_block`] applies a processor to one block.
//! - [`UploadCompletionProcessor`] picks the processor for each block of a
//!   post and applies it.

pub mod completion;
pub mod config;
pub mod error;
pub mod kind;
pub mod logging;
pub mod media;
pub mod processor;
pub mod processors;
pub mod rewriter;

pub use completion::{ProcessedBlocks, UploadCompletionProcessor};
pub use config::RewriteConfig;
pub use error::{Error, Result};
pub use kind::BlockKind;
pub use media::MediaReference;
pub use processor::{BlockProcessor, MediaBlockProcessor};
pub use rewriter::{MatchPolicy, Rewrite, process_block, process_block_with};
