//! A small XML element tree and its writer.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::LiftResult;

/// One element: a name, attributes in emission order, children in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Emission order is call order.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add an attribute only when a value is present.
    #[must_use]
    pub fn with_opt_attr(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.attributes.push((name.into(), value.to_string()));
        }
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        for child in children {
            self.children.push(XmlNode::Element(child));
        }
        self
    }

    /// Add a text node. The text is stored raw; escaping happens in the
    /// writer and nowhere else.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Render an element tree to a compact XML fragment.
///
/// No XML declaration is written and childless elements collapse to
/// self-closing form. Text nodes and attribute values are escaped by the
/// writer as they go out.
pub fn write_fragment(root: &XmlElement) -> LiftResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, root)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> LiftResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(inner) => write_element(writer, inner)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
