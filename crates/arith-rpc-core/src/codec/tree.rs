//! Minimal owned XML element tree.
//!
//! Envelopes are small and short-lived, so they are parsed fully into memory
//! and navigated by child name. Attributes, comments, processing instructions
//! and the XML declaration carry no meaning in the protocol and are dropped.

use crate::error::{Result, RpcError};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Deepest element nesting accepted. Envelopes need six levels; the tree is
/// dropped recursively, so unbounded depth would exhaust the stack.
const MAX_DEPTH: usize = 32;

/// An element with its child elements and its own (unescaped) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct XmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(name: &str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(name)
        }
    }

    /// Append a child, builder style.
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn first_child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// The single child called `name`; zero or several is a parse error.
    pub fn only_child(&self, name: &str) -> Result<&XmlElement> {
        let mut matches = self.children.iter().filter(|c| c.name == name);
        match (matches.next(), matches.next()) {
            (Some(child), None) => Ok(child),
            (None, _) => Err(RpcError::parse(format!(
                "<{}> has no <{}> element",
                self.name, name
            ))),
            (Some(_), Some(_)) => Err(RpcError::parse(format!(
                "<{}> has more than one <{}> element",
                self.name, name
            ))),
        }
    }

    /// Render as a complete document with an XML declaration.
    pub fn to_document(&self) -> String {
        let mut out = String::from(XML_DECLARATION);
        self.render(&mut out);
        out
    }

    fn render(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        if self.text.is_empty() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        // A literal CR would be normalized away by the reader.
        out.push_str(&escape(self.text.as_str()).replace('\r', "&#13;"));
        for child in &self.children {
            child.render(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Parse a document into its root element.
pub(crate) fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(RpcError::parse("content after the root element"));
                }
                if open.len() >= MAX_DEPTH {
                    return Err(RpcError::parse("document nested too deeply"));
                }
                open.push(XmlElement::new(&element_name(start.name().as_ref())?));
            }
            Event::Empty(start) => {
                let element = XmlElement::new(&element_name(start.name().as_ref())?);
                close_element(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches.
                let element = open
                    .pop()
                    .ok_or_else(|| RpcError::parse("unbalanced end tag"))?;
                close_element(&mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| RpcError::parse(e.to_string()))?;
                append_text(&mut open, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)
                    .map_err(|e| RpcError::parse(e.to_string()))?
                    .to_string();
                append_text(&mut open, &text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(RpcError::parse(format!("unclosed <{}> element", unclosed.name)));
    }
    root.ok_or_else(|| RpcError::parse("document has no root element"))
}

fn element_name(raw: &[u8]) -> Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| RpcError::parse(e.to_string()))
}

fn close_element(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(RpcError::parse("more than one root element")),
    }
    Ok(())
}

fn append_text(open: &mut [XmlElement], text: &str) -> Result<()> {
    match open.last_mut() {
        Some(element) => element.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(RpcError::parse("text outside the root element")),
    }
    Ok(())
}
