//! Configuration for an upload-completion pass.
//!
//! ```toml
//! kinds = ["image", "video", "media-text", "audio", "file"]
//! strip_url_query = false
//! match_policy = "attributes-first"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kind::BlockKind;
use crate::rewriter::MatchPolicy;

/// Which blocks a pass rewrites and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewriteConfig {
    /// Block kinds to rewrite. Blocks of other kinds pass through.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<BlockKind>,
    /// Drop the query string and fragment from the remote URL before use.
    /// Off by default.
    #[serde(default)]
    pub strip_url_query: bool,
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

fn default_kinds() -> Vec<BlockKind> {
    BlockKind::ALL.to_vec()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            kinds: default_kinds(),
            strip_url_query: false,
            match_policy: MatchPolicy::default(),
        }
    }
}

impl RewriteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::parse(source, "<inline>")
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading rewrite config");
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&source, &path.display().to_string())
    }

    fn parse(source: &str, origin: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::ConfigParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn is_enabled(&self, kind: BlockKind) -> bool {
        self.kinds.contains(&kind)
    }
}
