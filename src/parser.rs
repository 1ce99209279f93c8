//! Line-driven tolerant HTML parser.
//!
//! The parser pulls decoded lines from a [`LineSource`] only when it runs out
//! of input on the current one, and tokenizes, builds the tree and repairs
//! bad markup in the same pass:
//!
//! - tags and comments may span several lines,
//! - `<br>`, `<img>` and the other void elements never take children,
//!   with or without a trailing `/`,
//! - `<script>` and `<style>` bodies are skipped unparsed,
//! - a closing tag that does not match the innermost open element is dropped,
//! - running out of input closes every open element with what it gathered.
//!
//! Open containers are kept on an explicit frame stack, so nesting depth is
//! only bounded by memory.

use crate::diagnostic::Diagnostic;
use crate::entities;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::options::Options;
use crate::source::LineSource;
use crate::tags::{is_declaration, is_raw_text_tag, is_void_tag, LINE_BREAK_TAG, TITLE_TAG};

/// Where consumption stopped: the last line touched and the byte offset in it.
///
/// Lines are trimmed before scanning, so `pos` indexes the trimmed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: String,
    pub pos: usize,
}

impl Cursor {
    /// Unconsumed remainder of the current line.
    #[must_use]
    pub fn rest(&self) -> &str {
        self.line.get(self.pos..).unwrap_or_default()
    }
}

/// A parsed node together with the state the parse left behind.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// The parsed element, or a closing-tag sentinel if that came first.
    pub root: Node,

    /// Entity-decoded text of the last complete `<title>` element.
    pub title: String,

    /// Where the parse stopped.
    pub cursor: Cursor,

    /// The input ran out before every element was closed.
    pub truncated: bool,

    /// Repairs made along the way (empty unless `Options::collect_diagnostics`).
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Parses one node starting at the beginning of `first_line`.
///
/// Further lines are pulled from `source` as needed. Returns `None` only if
/// no `<` could be found before the source was exhausted.
///
/// ```
/// use page_simplifier::{parser, source::StrLines, Options};
///
/// let mut rest = StrLines::new("b</p>");
/// let out = parser::parse("<p>a<br>", &mut rest, &Options::default());
/// let text = out.map(|o| o.root.text.clone()).unwrap_or_default();
/// // Both the break and the end of the first line start a new text line.
/// assert_eq!(text, ["a", "", "b"]);
/// ```
pub fn parse<S: LineSource>(first_line: &str, source: S, options: &Options) -> Option<ParseOutput> {
    let mut parser = Parser::new(source, first_line.trim().to_string(), options);
    let root = parser.parse_node()?;
    Some(parser.finish(root))
}

/// Parses top-level nodes until an `<html>` element is formed.
///
/// Doctype declarations, comments and anything else preceding `<html>` are
/// parsed and discarded.
///
/// # Errors
///
/// Returns [`Error::NoHtml`] if the source runs out first.
pub fn parse_document<S: LineSource>(source: S, options: &Options) -> Result<ParseOutput> {
    let mut parser = Parser::new(source, String::new(), options);
    loop {
        let node = parser.parse_node().ok_or(Error::NoHtml)?;
        if node.is_element && node.is("html") {
            return Ok(parser.finish(node));
        }
        log::debug!("skipping top-level <{}> before <html>", node.tag_name);
    }
}

/// Result of reading one tag.
enum Token {
    /// `</name>`
    Close(String),
    /// An element with nothing left to parse: declaration, void, self-closed,
    /// skipped raw text, or a tag cut off by the end of input.
    Complete(Node),
    /// Start tag of a container.
    Open(String),
}

/// An element whose content is still being read.
struct Frame {
    tag: String,
    text: Vec<String>,
    pending: String,
    children: Vec<Node>,
}

impl Frame {
    fn new(tag: String) -> Self {
        Self {
            tag,
            text: Vec::new(),
            pending: String::new(),
            children: Vec::new(),
        }
    }

    fn flush(&mut self) {
        self.text.push(std::mem::take(&mut self.pending));
    }

    /// Merges a finished child's text into the running line and keeps the child.
    fn adopt(&mut self, child: Node) {
        if child.is(LINE_BREAK_TAG) {
            self.flush();
            return;
        }
        if let Some((first, rest)) = child.text.split_first() {
            self.pending.push_str(first);
            if let Some((last, middle)) = rest.split_last() {
                self.flush();
                self.text.extend(middle.iter().cloned());
                self.pending.clone_from(last);
            }
        }
        self.children.push(child);
    }

    fn finish(mut self) -> Node {
        self.flush();
        Node {
            tag_name: self.tag,
            is_element: true,
            text: self.text,
            children: self.children,
        }
    }
}

struct Parser<S> {
    source: S,
    line: String,
    pos: usize,
    exhausted: bool,
    title: String,
    truncated: bool,
    collect_diagnostics: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<S: LineSource> Parser<S> {
    fn new(source: S, line: String, options: &Options) -> Self {
        Self {
            source,
            line,
            pos: 0,
            exhausted: false,
            title: String::new(),
            truncated: false,
            collect_diagnostics: options.collect_diagnostics,
            diagnostics: Vec::new(),
        }
    }

    fn finish(self, root: Node) -> ParseOutput {
        ParseOutput {
            root,
            title: self.title,
            cursor: Cursor {
                line: self.line,
                pos: self.pos,
            },
            truncated: self.truncated,
            diagnostics: self.diagnostics,
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::debug!("{diagnostic}");
        if self.collect_diagnostics {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Moves to the next line. On exhaustion the current line becomes empty.
    fn advance(&mut self) -> bool {
        self.pos = 0;
        let next = if self.exhausted {
            None
        } else {
            self.source.next_line()
        };
        match next {
            Some(line) => {
                self.line = line.trim().to_string();
                true
            }
            None => {
                self.exhausted = true;
                self.line.clear();
                false
            }
        }
    }

    /// Offset of the next `<` on the current line that can open a tag.
    ///
    /// A `<` followed by a space, a digit or the end of the line is text.
    fn next_tag_start(&self) -> Option<usize> {
        let bytes = self.line.as_bytes();
        let mut from = self.pos;
        while let Some(offset) = self.line.get(from..)?.find('<') {
            let at = from + offset;
            match bytes.get(at + 1) {
                Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?') => {
                    return Some(at);
                }
                _ => from = at + 1,
            }
        }
        None
    }

    /// Skips forward, pulling lines, to the next tag start.
    fn locate(&mut self) -> bool {
        loop {
            if let Some(at) = self.next_tag_start() {
                self.pos = at;
                return true;
            }
            if !self.advance() {
                return false;
            }
        }
    }

    /// Parses the node whose tag starts at or after the cursor.
    fn parse_node(&mut self) -> Option<Node> {
        if !self.locate() {
            return None;
        }
        Some(match self.read_tag() {
            Token::Open(tag) => self.parse_container(tag),
            Token::Complete(node) => node,
            Token::Close(tag) => Node::closing(tag),
        })
    }

    /// Reads the tag at the cursor, which must sit on a tag start.
    fn read_tag(&mut self) -> Token {
        let mut name_start = self.pos + 1;
        let closing = self.line.as_bytes().get(name_start) == Some(&b'/');
        if closing {
            name_start += 1;
        }

        let rest = self.line.get(name_start..).unwrap_or_default();
        let (tag, delimiter, name_end) = if !closing && rest.starts_with("!--") {
            ("!--".to_string(), "-->", name_start + 3)
        } else {
            let len = rest
                .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
                .unwrap_or(rest.len());
            (rest[..len].to_lowercase(), ">", name_start + len)
        };

        let mut from = name_end;
        let end = loop {
            if let Some(at) = self.line.get(from..).and_then(|s| s.find(delimiter)) {
                break from + at + delimiter.len();
            }
            if !self.advance() {
                self.truncated = true;
                self.report(Diagnostic::UnterminatedTag { tag: tag.clone() });
                return if closing {
                    Token::Close(tag)
                } else {
                    Token::Complete(Node::element(tag))
                };
            }
            from = 0;
        };
        self.pos = end;

        if closing {
            return Token::Close(tag);
        }
        let self_closed = end >= 2 && self.line.as_bytes()[end - 2] == b'/';
        if is_declaration(&tag) || is_void_tag(&tag) || self_closed {
            return Token::Complete(Node::element(tag));
        }
        if is_raw_text_tag(&tag) {
            self.skip_raw_text(&tag);
            return Token::Complete(Node::element(tag));
        }
        Token::Open(tag)
    }

    /// Moves the cursor past `</tag>`, discarding everything before it.
    fn skip_raw_text(&mut self, tag: &str) {
        let end_tag = format!("</{tag}>");
        loop {
            let rest = self.line.get(self.pos..).unwrap_or_default();
            // ASCII lowercasing keeps byte offsets intact.
            if let Some(at) = rest.to_ascii_lowercase().find(&end_tag) {
                self.pos += at + end_tag.len();
                return;
            }
            if !self.advance() {
                self.truncated = true;
                self.report(Diagnostic::UnterminatedRawText {
                    tag: tag.to_string(),
                });
                return;
            }
        }
    }

    /// Appends text up to the next tag start to `frame`, pulling lines as
    /// needed. Each line end closes the running line of text.
    fn scan_text(&mut self, frame: &mut Frame) -> bool {
        loop {
            if let Some(at) = self.next_tag_start() {
                frame.pending.push_str(&self.line[self.pos..at]);
                self.pos = at;
                return true;
            }
            frame
                .pending
                .push_str(self.line.get(self.pos..).unwrap_or_default());
            if !self.advance() {
                return false;
            }
            frame.flush();
        }
    }

    fn parse_container(&mut self, tag: String) -> Node {
        let mut current = Frame::new(tag);
        let mut parents: Vec<Frame> = Vec::new();

        loop {
            if !self.scan_text(&mut current) {
                return self.unwind(current, parents);
            }
            match self.read_tag() {
                Token::Open(tag) => parents.push(std::mem::replace(&mut current, Frame::new(tag))),
                Token::Complete(node) => current.adopt(node),
                Token::Close(tag) if tag == current.tag => {
                    let node = self.close(current);
                    match parents.pop() {
                        Some(mut parent) => {
                            parent.adopt(node);
                            current = parent;
                        }
                        None => return node,
                    }
                }
                Token::Close(tag) if tag == LINE_BREAK_TAG => current.flush(),
                Token::Close(found) => self.report(Diagnostic::MismatchedClosingTag {
                    open: current.tag.clone(),
                    found,
                }),
            }
        }
    }

    fn close(&mut self, frame: Frame) -> Node {
        let node = frame.finish();
        if node.is(TITLE_TAG) {
            self.title = entities::decode(&node.text.concat()).into_owned();
        }
        node
    }

    /// Closes every open frame after the input ran out.
    fn unwind(&mut self, mut current: Frame, mut parents: Vec<Frame>) -> Node {
        log::warn!(
            "input ended inside <{}> with {} enclosing element(s) open",
            current.tag,
            parents.len()
        );
        self.truncated = true;
        loop {
            self.report(Diagnostic::Truncated {
                open: current.tag.clone(),
            });
            let node = current.finish();
            match parents.pop() {
                Some(mut parent) => {
                    parent.adopt(node);
                    current = parent;
                }
                None => return node,
            }
        }
    }
}
