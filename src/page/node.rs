//! Structured fragment description rendered to HTML in one pass.

use crate::html::escape_html;

/// One node of a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on render
    Text(String),
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Shorthand for a single text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_html(content)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect(),
        }
    }

    /// Every element in document order whose attribute `name` equals `value`.
    pub fn find_all<'a>(&'a self, name: &str, value: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(name, value, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, value: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.attr_value(name) == Some(value) {
                found.push(element);
            }
            for child in &element.children {
                child.collect(name, value, found);
            }
        }
    }
}

/// `<ul>` with one `<li>` per item.
pub fn list(items: &[String]) -> Element {
    el("ul").children(items.iter().map(|item| el("li").text(item)))
}

/// `<ol>` with one `<li>` per item.
pub fn ordered_list(items: &[String]) -> Element {
    el("ol").children(items.iter().map(|item| el("li").text(item)))
}

/// Header row in `<thead>`, one `<tr>` per row in `<tbody>`.
pub fn table(headers: &[String], rows: &[Vec<String>]) -> Element {
    el("table")
        .child(el("thead").child(el("tr").children(headers.iter().map(|h| el("th").text(h)))))
        .child(el("tbody").children(rows.iter().map(|row| {
            el("tr").children(row.iter().map(|cell| el("td").text(cell)))
        })))
}

/// Render a sequence of sibling nodes.
pub fn render_all(nodes: &[Node]) -> String {
    nodes.iter().map(Node::render).collect()
}
