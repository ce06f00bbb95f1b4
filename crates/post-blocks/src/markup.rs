//! Markup adapter: a mutable HTML tree for one block body.
//!
//! The tree is owned by a single [`MarkupDocument`] and only reachable through
//! it. Elements are handed out under a mutable borrow of the document, so a
//! tree is never shared between two processing calls.

use std::marker::PhantomData;

use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::error::Result;

/// Prefix that puts the HTML5 parser straight into the "in body" insertion
/// mode, so leading comments and text stay part of the fragment.
const BODY_CONTEXT: &str = "<html><head></head><body>";

/// A parsed block body.
pub struct MarkupDocument {
    body: NodeRef,
}

impl MarkupDocument {
    /// Parse a markup fragment.
    ///
    /// The HTML5 parser recovers from any input, so this only returns `None`
    /// if the parsed tree has no body to hold the fragment.
    pub fn parse(markup: &str) -> Option<Self> {
        let document = kuchiki::parse_html().one(format!("{BODY_CONTEXT}{markup}"));
        let body = document.select_first("body").ok()?;
        Some(Self {
            body: body.as_node().clone(),
        })
    }

    /// First element matching a CSS selector, in document order.
    ///
    /// An invalid selector matches nothing.
    pub fn select_first(&mut self, selector: &str) -> Option<MarkupElement<'_>> {
        self.body
            .select_first(selector)
            .ok()
            .map(MarkupElement::new)
    }

    /// All elements matching a CSS selector, in document order.
    pub fn select_all(&mut self, selector: &str) -> Vec<MarkupElement<'_>> {
        match self.body.select(selector) {
            Ok(matches) => matches.map(MarkupElement::new).collect(),
            Err(()) => Vec::new(),
        }
    }

    /// Serialize the fragment back to markup.
    pub fn serialize(&self) -> Result<String> {
        let mut bytes = Vec::new();
        for child in self.body.children() {
            child.serialize(&mut bytes)?;
        }
        Ok(String::from_utf8(bytes)?)
    }
}

/// An element inside a [`MarkupDocument`].
///
/// Every mutator returns `true` only if the tree actually changed.
pub struct MarkupElement<'doc> {
    node: NodeDataRef<ElementData>,
    _document: PhantomData<&'doc mut MarkupDocument>,
}

impl<'doc> MarkupElement<'doc> {
    fn new(node: NodeDataRef<ElementData>) -> Self {
        Self {
            node,
            _document: PhantomData,
        }
    }

    /// Local tag name, e.g. `img`.
    pub fn tag(&self) -> &str {
        &self.node.name.local
    }

    /// Check the tag name.
    pub fn is(&self, tag: &str) -> bool {
        self.tag().eq_ignore_ascii_case(tag)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node.attributes.borrow().get(name).map(str::to_owned)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let mut attributes = self.node.attributes.borrow_mut();
        if attributes.get(name) == Some(value) {
            return false;
        }
        attributes.insert(name, value.to_owned());
        true
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.node.attributes.borrow_mut().remove(name).is_some()
    }

    /// Whether the `class` attribute contains `token` as a whole word.
    pub fn has_class(&self, token: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == token))
    }

    /// Append a class token unless it is already present.
    pub fn add_class(&mut self, token: &str) -> bool {
        if self.has_class(token) {
            return false;
        }
        let classes = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {token}", existing.trim_end())
            }
            _ => token.to_owned(),
        };
        self.set_attribute("class", &classes)
    }

    /// Remove a class token. The `class` attribute is dropped once empty.
    pub fn remove_class(&mut self, token: &str) -> bool {
        if !self.has_class(token) {
            return false;
        }
        let classes = self.attribute("class").unwrap_or_default();
        let remaining: Vec<&str> = classes
            .split_ascii_whitespace()
            .filter(|c| *c != token)
            .collect();

        if remaining.is_empty() {
            self.remove_attribute("class")
        } else {
            self.set_attribute("class", &remaining.join(" "))
        }
    }

    /// The enclosing element, if any.
    pub fn parent_element(&self) -> Option<MarkupElement<'doc>> {
        self.node
            .as_node()
            .parent()
            .and_then(NodeRef::into_element_ref)
            .map(MarkupElement::new)
    }
}
