//! Attribute adapter: the JSON object carried in a block header.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::Result;

/// Result of looking up one attribute.
///
/// Keeps "absent", "explicit null" and "present but not a scalar" apart so
/// callers can tell them from a mismatched value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeLookup<'a> {
    /// The key is not present.
    Absent,
    /// The key is present with a JSON `null`.
    Null,
    /// A string, number or boolean, in string form.
    Scalar(Cow<'a, str>),
    /// An array or object.
    Composite(&'a Value),
}

impl AttributeLookup<'_> {
    /// Exact string equality against a scalar value.
    ///
    /// Numbers compare by their JSON text, so `12` matches `"12"`.
    pub fn matches(&self, expected: &str) -> bool {
        matches!(self, Self::Scalar(value) if &**value == expected)
    }
}

/// A block's attribute object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockAttributes {
    map: Map<String, Value>,
}

impl BlockAttributes {
    /// An empty attribute object, for blocks whose header carries none.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse header text. Returns `None` unless it is a JSON object.
    ///
    /// ```
    /// use post_blocks::attributes::BlockAttributes;
    ///
    /// assert!(BlockAttributes::parse(r#"{"mediaId":"local-1"}"#).is_some());
    /// assert!(BlockAttributes::parse("[1, 2]").is_none());
    /// assert!(BlockAttributes::parse("{not json").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Some(Self { map }),
            Ok(_) => None,
            Err(e) => {
                tracing::trace!(error = %e, "Unparseable block attributes");
                None
            }
        }
    }

    pub fn lookup(&self, key: &str) -> AttributeLookup<'_> {
        match self.map.get(key) {
            None => AttributeLookup::Absent,
            Some(Value::Null) => AttributeLookup::Null,
            Some(Value::String(s)) => AttributeLookup::Scalar(Cow::Borrowed(s)),
            Some(Value::Number(n)) => AttributeLookup::Scalar(Cow::Owned(n.to_string())),
            Some(Value::Bool(b)) => AttributeLookup::Scalar(Cow::Owned(b.to_string())),
            Some(composite) => AttributeLookup::Composite(composite),
        }
    }

    /// Set an integer property. Returns `true` if the stored value changed.
    pub fn set_int(&mut self, key: &str, value: i64) -> bool {
        self.set(key, Value::from(value))
    }

    /// Set a string property. Returns `true` if the stored value changed.
    pub fn set_string(&mut self, key: &str, value: &str) -> bool {
        self.set(key, Value::from(value))
    }

    fn set(&mut self, key: &str, value: Value) -> bool {
        if self.map.get(key) == Some(&value) {
            return false;
        }
        // Replacing an existing key keeps its position.
        self.map.insert(key.to_owned(), value);
        true
    }

    /// Serialize to compact header JSON.
    ///
    /// Comment delimiters and markup characters are written as unicode
    /// escapes so the text can never close the surrounding HTML comment.
    pub fn serialize(&self) -> Result<String> {
        let json = serde_json::to_string(&self.map)?;
        Ok(escape_for_comment(&json))
    }
}

/// These characters only occur inside JSON strings, where a unicode escape
/// decodes to the same value.
fn escape_for_comment(json: &str) -> String {
    json.replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
