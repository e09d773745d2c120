//! Minimal element tree for POM documents.
//!
//! Only what dependency extraction needs is kept: local tag names, child
//! order, and text. Attributes and namespaces are dropped while loading.

use std::slice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Local name, without any namespace prefix.
    pub name: String,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Every element named `tag` anywhere below this one, in document order.
    ///
    /// The search is depth-first and never yields `self`, so a
    /// `<dependency>` nested at any depth is found the same way as a direct
    /// child.
    pub fn descendants<'a>(&'a self, tag: &'a str) -> Descendants<'a> {
        Descendants {
            stack: vec![self.children.iter()],
            tag,
        }
    }

    /// Concatenated direct text and CDATA content, untrimmed.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Trimmed text of the first descendant named `tag`.
    pub fn find_text(&self, tag: &str) -> Option<String> {
        self.descendants(tag)
            .next()
            .map(|element| element.text().trim().to_string())
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// Pre-order iterator over descendant elements with a given tag name.
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
    tag: &'a str,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    if element.name == self.tag {
                        return Some(element);
                    }
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
