//! Small SVG document builder on top of the quick-xml writer.
//!
//! Element and attribute names are fixed at compile time; attribute values
//! and text content are escaped by the writer.

use std::fmt::Display;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Failed to write SVG: {0}")]
    Write(String),
    #[error("SVG output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.attributes.push((key, value.to_string()));
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    fn start(&self) -> BytesStart<'_> {
        BytesStart::new(self.name).with_attributes(
            self.attributes
                .iter()
                .map(|(key, value)| (*key, value.as_str())),
        )
    }

    fn write<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), SvgError> {
        match &self.text {
            None => write(writer, Event::Empty(self.start())),
            Some(text) => {
                write(writer, Event::Start(self.start()))?;
                write(writer, Event::Text(BytesText::new(text)))?;
                write(writer, Event::End(BytesEnd::new(self.name)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    children: Vec<Element>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            children: Vec::new(),
        }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn push(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }

    pub fn render(&self) -> Result<String, SvgError> {
        let mut writer = Writer::new(Vec::new());
        let root = Element::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("viewBox", format!("0 0 {} {}", self.width, self.height))
            .attr("width", self.width)
            .attr("height", self.height);

        write(&mut writer, Event::Start(root.start()))?;
        for child in &self.children {
            child.write(&mut writer)?;
        }
        write(&mut writer, Event::End(BytesEnd::new("svg")))?;

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), SvgError> {
    writer
        .write_event(event)
        .map_err(|e| SvgError::Write(e.to_string()))
}
