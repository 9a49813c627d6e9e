/// A single node of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Overwrites an existing attribute in place, otherwise appends it.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .attrs
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Visible text of this node and all of its descendants. Comments are skipped.
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
            Self::Comment(_) => String::new(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(element) => collect_text(&element.children, out),
            Node::Text(text) => out.push_str(text),
            Node::Comment(_) => {}
        }
    }
}

/// The mutable body of an article: an ordered forest of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTree {
    pub children: Vec<Node>,
}

impl DocumentTree {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Pre-order walk over every element in the tree.
    pub fn for_each_element(&self, mut visit: impl FnMut(&Element)) {
        fn walk(nodes: &[Node], visit: &mut impl FnMut(&Element)) {
            for node in nodes {
                if let Node::Element(element) = node {
                    visit(element);
                    walk(&element.children, visit);
                }
            }
        }
        walk(&self.children, &mut visit);
    }

    /// Pre-order walk with mutable access to every element.
    pub fn for_each_element_mut(&mut self, mut visit: impl FnMut(&mut Element)) {
        fn walk(nodes: &mut [Node], visit: &mut impl FnMut(&mut Element)) {
            for node in nodes {
                if let Node::Element(element) = node {
                    visit(element);
                    walk(&mut element.children, visit);
                }
            }
        }
        walk(&mut self.children, &mut visit);
    }

    pub fn count_elements(&self, name: &str) -> usize {
        let mut count = 0;
        self.for_each_element(|element| {
            if element.is(name) {
                count += 1;
            }
        });
        count
    }
}
