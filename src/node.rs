//! Minimal node tree produced by the parser.
//!
//! A node keeps only what the content heuristic needs: the lowercase tag
//! name, the text lines attributed to it, and its child elements. Attributes
//! are never recorded.
//!
//! ## Text lines
//!
//! Text is stored as an ordered list of lines. A new line starts at every
//! `<br>`, at every line break of the input, and around any child element
//! whose own text spans several lines. Inline children that produce a single
//! line are merged into the surrounding line:
//!
//! ```text
//! <p>one <b>two</b> three<br>four</p>   =>   p: ["one two three", "four"]
//! ```

/// One parsed tag occurrence.
///
/// Closing tags (`</p>`) are returned by the parser as nodes with
/// `is_element == false`; they only ever signal the end of a container and
/// are never stored as children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Lowercase tag name (`!doctype` and `!--` for declarations and comments).
    pub tag_name: String,

    /// `false` for a closing-tag sentinel.
    pub is_element: bool,

    /// Text lines attributed to this node, in document order.
    pub text: Vec<String>,

    /// Child elements, in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an element with no text and no children.
    #[must_use]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            is_element: true,
            text: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a closing-tag sentinel.
    #[must_use]
    pub fn closing(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            is_element: false,
            text: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    /// Total character count of this node's own text lines.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.iter().map(|line| line.chars().count()).sum()
    }

    /// Last direct child with the given tag name.
    #[must_use]
    pub fn find_child(&self, tag_name: &str) -> Option<&Node> {
        self.children.iter().rev().find(|child| child.is(tag_name))
    }

    /// Iterates over this node and all descendants in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Renders the tag structure as `name(child,child(...))`.
    ///
    /// ```
    /// use page_simplifier::node::Node;
    ///
    /// let mut body = Node::element("body");
    /// body.children.push(Node::element("p"));
    /// body.children.push(Node::element("hr"));
    /// assert_eq!(body.outline(), "body(p,hr)");
    /// ```
    #[must_use]
    pub fn outline(&self) -> String {
        enum Step<'a> {
            Open(&'a Node, bool),
            Close,
        }

        let mut out = String::new();
        let mut steps = vec![Step::Open(self, true)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Close => out.push(')'),
                Step::Open(node, first) => {
                    if !first {
                        out.push(',');
                    }
                    out.push_str(&node.tag_name);
                    if node.children.is_empty() {
                        continue;
                    }
                    out.push('(');
                    steps.push(Step::Close);
                    for (i, child) in node.children.iter().enumerate().rev() {
                        steps.push(Step::Open(child, i == 0));
                    }
                }
            }
        }
        out
    }
}

// A derived drop would recurse once per nesting level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
