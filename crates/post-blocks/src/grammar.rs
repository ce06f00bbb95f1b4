//! Block grammar for serialized post blocks.
//!
//! A block is an HTML comment header carrying the block name and an optional
//! JSON attribute object, followed by a markup body and a closing comment:
//! ```text
//! <!-- wp:media-text {"mediaId":12} -->
//! <div class="wp-block-media-text">...</div>
//! <!-- /wp:media-text -->
//! ```
//!
//! Blocks without a body close their header instead:
//! ```text
//! <!-- wp:spacer {"height":"40px"} /-->
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a complete opening marker, applied to the header slice only.
/// Captures the block name, the attribute object and the self-closing slash.
static OPEN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\A<!--\s+wp:((?:[a-z][a-z0-9_-]*/)?[a-z][a-z0-9_-]*)\s+(?:(\{.*\})\s+)?(/)?-->\z",
    )
    .expect("Invalid open marker regex")
});

const CORE_NAMESPACE: &str = "core/";

/// The markup body of a block, with the surrounding whitespace kept apart
/// so it survives a rewrite verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBody<'a> {
    /// Whitespace between the opening marker and the markup.
    pub leading: &'a str,
    /// The markup itself, trimmed.
    pub markup: &'a str,
    /// Whitespace between the markup and the closing marker.
    pub trailing: &'a str,
}

/// A raw block split into its parts. All fields borrow from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// Block name as written, e.g. `media-text` or `jetpack/slideshow`.
    pub name: &'a str,
    /// The attribute object text, if the header carries one.
    pub attributes: Option<&'a str>,
    /// The body, or `None` for a self-closing block.
    pub body: Option<BlockBody<'a>>,
    /// Whitespace following the closing marker.
    pub suffix: &'a str,
}

impl<'a> RawBlock<'a> {
    /// Block name with the implicit `core/` namespace removed.
    ///
    /// ```
    /// use post_blocks::grammar::split_block;
    ///
    /// let block = split_block("<!-- wp:core/image -->\n<figure></figure>\n<!-- /wp:core/image -->").unwrap();
    /// assert_eq!(block.kind_name(), "image");
    /// ```
    pub fn kind_name(&self) -> &'a str {
        self.name.strip_prefix(CORE_NAMESPACE).unwrap_or(self.name)
    }

    /// Whether the block closes its own header (`/-->`).
    pub fn is_self_closing(&self) -> bool {
        self.body.is_none()
    }

    /// Render the block with replacement attribute text and markup.
    ///
    /// `None` for `markup` keeps the original body markup. The body's
    /// surrounding whitespace and the suffix are always kept.
    pub fn render(&self, attributes: Option<&str>, markup: Option<&str>) -> String {
        let mut out = String::new();
        out.push_str("<!-- wp:");
        out.push_str(self.name);
        out.push(' ');
        if let Some(attributes) = attributes {
            out.push_str(attributes);
            out.push(' ');
        }

        match &self.body {
            None => out.push_str("/-->"),
            Some(body) => {
                out.push_str("-->");
                out.push_str(body.leading);
                out.push_str(markup.unwrap_or(body.markup));
                out.push_str(body.trailing);
                out.push_str(&close_marker(self.name));
            }
        }

        out.push_str(self.suffix);
        out
    }
}

fn close_marker(name: &str) -> String {
    format!("<!-- /wp:{name} -->")
}

/// Splits one raw block into its parts.
///
/// Returns `None` when the text is not exactly one block: it does not start
/// with an opening marker, the header is malformed, the closing marker is
/// missing, or anything other than whitespace follows the closing marker.
///
/// # Example
/// ```
/// use post_blocks::grammar::split_block;
///
/// let raw = "<!-- wp:video {\"id\":\"local-1\"} -->\n<figure><video src=\"a.mp4\"></video></figure>\n<!-- /wp:video -->";
/// let block = split_block(raw).unwrap();
/// assert_eq!(block.name, "video");
/// assert_eq!(block.attributes, Some("{\"id\":\"local-1\"}"));
/// assert_eq!(block.body.unwrap().markup, "<figure><video src=\"a.mp4\"></video></figure>");
/// ```
pub fn split_block(raw: &str) -> Option<RawBlock<'_>> {
    if !raw.starts_with("<!--") {
        return None;
    }

    let header_end = raw.find("-->")? + "-->".len();
    let Some(caps) = OPEN_MARKER_REGEX.captures(&raw[..header_end]) else {
        tracing::trace!(header = &raw[..header_end], "Malformed block header");
        return None;
    };

    let name = caps.get(1)?.as_str();
    let attributes = caps.get(2).map(|m| m.as_str());
    let rest = &raw[header_end..];

    if caps.get(3).is_some() {
        return rest.trim().is_empty().then_some(RawBlock {
            name,
            attributes,
            body: None,
            suffix: rest,
        });
    }

    // The last closing marker belongs to this block; earlier ones close
    // nested blocks of the same name.
    let close = close_marker(name);
    let close_start = rest.rfind(&close)?;
    let suffix = &rest[close_start + close.len()..];
    if !suffix.trim().is_empty() {
        return None;
    }

    let inner = &rest[..close_start];
    let markup_start = inner.len() - inner.trim_start().len();
    let markup_end = markup_start + inner.trim().len();

    Some(RawBlock {
        name,
        attributes,
        body: Some(BlockBody {
            leading: &inner[..markup_start],
            markup: &inner[markup_start..markup_end],
            trailing: &inner[markup_end..],
        }),
        suffix,
    })
}
