//! Owned element tree for rule documents.
//!
//! The XML is parsed with `roxmltree` and copied into [`Element`] values so
//! the compilers can be exercised with hand-built trees as well.

use crate::schema::ElementKind;

use super::error::{Result, RuleError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements only; text, comments and processing instructions are dropped.
    pub children: Vec<Element>,
    /// All descendant text concatenated in document order (DOM `innerText`).
    pub text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.text.push_str(&child.text);
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push_str(&text.into());
        self
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::of(&self.tag)
    }

    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// This element and all descendants with `kind`, in document order.
    pub fn find_all(&self, kind: ElementKind) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(kind, &mut found);
        found
    }

    fn collect<'a>(&'a self, kind: ElementKind, found: &mut Vec<&'a Element>) {
        if self.kind() == kind {
            found.push(self);
        }
        for child in &self.children {
            child.collect(kind, found);
        }
    }
}

/// Parse XML text into an element tree rooted at the document element.
///
/// Malformed input fails as a whole; nothing is returned for the part that
/// did parse. A `<!DOCTYPE>` declaration is accepted.
pub fn parse_document(xml: &str) -> Result<Element> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options).map_err(RuleError::Parse)?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let attributes = node
        .attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect();
    let children = node
        .children()
        .filter(|n| n.is_element())
        .map(convert)
        .collect();
    let text = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    Element {
        tag: node.tag_name().name().to_string(),
        attributes,
        children,
        text,
    }
}
