//! Arena-held XML element tree
//!
//! Nodes live in one `Vec` owned by the tree; `NodeId` is a copyable index
//! into it, so builder cursors are plain handles instead of shared
//! references. Serialization renders the whole tree with an XML declaration
//! and two-space indentation.

/// Handle to an element in an [`XmlTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

/// XML element tree with exclusive ownership of all nodes
#[derive(Debug)]
pub struct XmlTree {
    elements: Vec<Element>,
}

impl XmlTree {
    /// Create a tree containing only the root element
    pub fn with_root(name: &str) -> Self {
        Self {
            elements: vec![Element {
                name: name.to_string(),
                attributes: Vec::new(),
                text: None,
                children: Vec::new(),
            }],
        }
    }

    /// Handle to the root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new child element under `parent` and return its handle
    pub fn append(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(Element {
            name: name.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        });
        self.elements[parent.0].children.push(id);
        id
    }

    /// Set an attribute, replacing any previous value for the same name
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attributes = &mut self.elements[node.0].attributes;
        if let Some(existing) = attributes.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Set (or overwrite) the text content of an element
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.elements[node.0].text = Some(text.to_string());
    }

    /// Element name
    pub fn name(&self, node: NodeId) -> &str {
        &self.elements[node.0].name
    }

    /// Text content, if any
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.elements[node.0].text.as_deref()
    }

    /// Child handles in document order
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.elements[node.0].children
    }

    /// Render the tree as a UTF-8 XML document with declaration and
    /// two-space pretty indentation
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_element(&mut out, self.root(), 0);
        out.into_bytes()
    }

    fn write_element(&self, out: &mut String, id: NodeId, depth: usize) {
        let element = &self.elements[id.0];
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(&element.name);
        for (name, value) in &element.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&xml_escape(value));
            out.push('"');
        }

        if element.children.is_empty() {
            match &element.text {
                Some(text) => {
                    out.push('>');
                    out.push_str(&xml_escape(text));
                    out.push_str("</");
                    out.push_str(&element.name);
                    out.push('>');
                }
                None => out.push_str("/>"),
            }
        } else {
            out.push('>');
            // Mixed content does not occur in MusicXML output, but keep any
            // text ahead of the children rather than dropping it
            if let Some(text) = &element.text {
                out.push_str(&xml_escape(text));
            }
            out.push('\n');
            for &child in &element.children {
                self.write_element(out, child, depth + 1);
            }
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
        out.push('\n');
    }
}

/// Escape special XML characters
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
