use std::borrow::Cow;
use std::fmt;

pub type Attributes = Vec<(&'static str, String)>;

/// An owned element: tag, visible text, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: &'static str,
    text: String,
    attributes: Attributes,
    children: Vec<Node>,
}

/// Creates a `tag` element holding `content` as text, with `attributes`
/// applied in order.
pub fn create_node<S, I, V>(tag: &'static str, content: S, attributes: I) -> Node
where
    S: Into<String>,
    I: IntoIterator<Item = (&'static str, V)>,
    V: Into<String>,
{
    let mut node = Node {
        tag,
        text: content.into(),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for (name, value) in attributes {
        node.set_attribute(name, value);
    }

    node
}

impl Node {
    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `name` to `value`, overwriting an existing value in place.
    pub fn set_attribute<V: Into<String>>(&mut self, name: &'static str, value: V) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn replace_children<I: IntoIterator<Item = Node>>(&mut self, children: I) {
        self.children = children.into_iter().collect();
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value, true))?;
        }
        f.write_str(">")?;

        f.write_str(&escape(&self.text, false))?;
        for child in &self.children {
            write!(f, "{child}")?;
        }

        write!(f, "</{}>", self.tag)
    }
}

pub(crate) fn escape(s: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quotes => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}
