use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use xml::{
    name::OwnedName,
    reader::{ParserConfig, XmlEvent},
};

use crate::{
    fl, http, println_with_prefix, println_with_prefix_and_fl,
    version::{plantuml_version::PlantUmlVersion, Version},
};

const VERSION_TAG: &str = "version";

/// A node in the metadata document
#[derive(Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, PartialEq)]
pub struct Element {
    /// Qualified name, `prefix:local` when the tag carries a prefix
    pub name: String,
    pub children: Vec<Node>,
}

impl Element {
    fn new(name: &OwnedName) -> Self {
        let name = match &name.prefix {
            Some(prefix) => format!("{}:{}", prefix, name.local_name),
            None => name.local_name.to_owned(),
        };

        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Content of the first text node directly below this element
    pub fn first_text(&self) -> Option<&str> {
        self.children.iter().find_map(|n| match n {
            Node::Text(t) => Some(t.as_str()),
            Node::Element(_) => None,
        })
    }

    /// All descendant elements named `name`, in document order
    pub fn elements_by_tag_name<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_tag_name(name, &mut found);

        found
    }

    fn collect_by_tag_name<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(e) = child {
                if e.name == name {
                    found.push(e);
                }
                e.collect_by_tag_name(name, found);
            }
        }
    }
}

/// A parsed metadata document
#[derive(Debug)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Parse a well-formed XML document into a tree
    pub fn parse(input: &str) -> Result<Self> {
        // comments split the text around them into separate nodes
        let reader = ParserConfig::new()
            .ignore_comments(false)
            .create_reader(input.as_bytes());
        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;

        for event in reader {
            match event.context(fl!("err_xml"))? {
                XmlEvent::StartElement { name, .. } => {
                    if root.is_some() {
                        bail!("{}: <{}> after the root element", fl!("err_xml"), name);
                    }
                    stack.push(Element::new(&name));
                }
                XmlEvent::EndElement { .. } => {
                    let element = stack.pop().ok_or_else(|| anyhow!(fl!("err_xml")))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(element)),
                        None => root = Some(element),
                    }
                }
                XmlEvent::Characters(t) | XmlEvent::CData(t) | XmlEvent::Whitespace(t) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::Text(t));
                    }
                }
                XmlEvent::EndDocument => break,
                // comments and processing instructions are not part of the tree
                _ => {}
            }
        }

        Ok(Self {
            root: root.ok_or_else(|| anyhow!(fl!("err_xml_no_root")))?,
        })
    }

    /// Every version listed in the document that follows `<major>.<year>.<minor>`,
    /// in the order they appear
    pub fn versions(&self) -> Vec<PlantUmlVersion> {
        // the root itself counts, as with any other element
        let root = (self.root.name == VERSION_TAG).then(|| &self.root);
        let texts = root
            .into_iter()
            .chain(self.root.elements_by_tag_name(VERSION_TAG))
            .filter_map(Element::first_text);

        let (versions, skipped) = parse_versions(texts);
        if skipped > 0 {
            println_with_prefix_and_fl!("skip_versions", count = skipped);
        }

        versions
    }
}

/// Parse every string that follows the version scheme, counting the rest
fn parse_versions<'a, I>(texts: I) -> (Vec<PlantUmlVersion>, usize)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut versions = Vec::new();
    let mut skipped = 0;

    for text in texts {
        match PlantUmlVersion::parse(text) {
            Ok(v) => versions.push(v),
            Err(_) => skipped += 1,
        }
    }

    (versions, skipped)
}

/// Download the release metadata and parse it
pub fn fetch(client: &Client, url: &str) -> Result<Document> {
    println_with_prefix_and_fl!("fetch_metadata", url = url);
    let text = http::get_text(client, url)?;

    Document::parse(&text)
}
