//! Block kinds that carry media.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of block kinds a media upload can be rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Image,
    Video,
    /// Image or video beside a column of text.
    MediaText,
    Audio,
    File,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::MediaText,
        BlockKind::Audio,
        BlockKind::File,
    ];

    /// Block name as it appears in a block header, without the `core/`
    /// namespace.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::MediaText => "media-text",
            BlockKind::Audio => "audio",
            BlockKind::File => "file",
        }
    }

    /// Look up a kind by block name. Other blocks, including namespaced
    /// third-party ones, have no kind.
    pub fn from_block_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("core/").unwrap_or(name);
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl FromStr for BlockKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_block_name(s).ok_or_else(|| Error::UnknownBlockKind(s.to_string()))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
