//! The media item a rewrite pass is about.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A media item whose upload has completed.
///
/// There is no way to build one without both remote fields, so a reference
/// always carries the id and the URL together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MediaReferenceFields")]
pub struct MediaReference {
    local_id: String,
    remote_id: i64,
    remote_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaReferenceFields {
    local_id: String,
    remote_id: i64,
    remote_url: String,
}

impl TryFrom<MediaReferenceFields> for MediaReference {
    type Error = Error;

    fn try_from(fields: MediaReferenceFields) -> Result<Self> {
        Self::new(fields.local_id, fields.remote_id, fields.remote_url)
    }
}

impl MediaReference {
    /// Create a reference from an upload result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMediaReference` if `local_id` or `remote_url` is empty.
    ///
    /// # Example
    /// ```
    /// use post_media::MediaReference;
    ///
    /// let media = MediaReference::new("local-7", 42, "https://example.com/a.jpg").unwrap();
    /// assert_eq!(media.remote_id(), 42);
    /// assert!(MediaReference::new("", 42, "https://example.com/a.jpg").is_err());
    /// ```
    pub fn new(
        local_id: impl Into<String>,
        remote_id: i64,
        remote_url: impl Into<String>,
    ) -> Result<Self> {
        let local_id = local_id.into();
        let remote_url = remote_url.into();

        if local_id.trim().is_empty() {
            return Err(Error::invalid_media("localId", "must not be empty"));
        }
        if remote_url.trim().is_empty() {
            return Err(Error::invalid_media("remoteUrl", "must not be empty"));
        }

        Ok(Self {
            local_id,
            remote_id,
            remote_url,
        })
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    pub fn remote_id(&self) -> i64 {
        self.remote_id
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    /// A copy whose remote URL has its query string and fragment removed.
    ///
    /// Upload services hand back URLs with resize and cache-busting
    /// parameters that should not end up in the post.
    pub fn without_url_query(&self) -> Self {
        let end = self
            .remote_url
            .find(['?', '#'])
            .unwrap_or(self.remote_url.len());
        Self {
            remote_url: self.remote_url[..end].to_owned(),
            ..self.clone()
        }
    }
}
