// The generic syntax tree handed to the reader.

use core::fmt;
use core::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// A node of a parsed program.
///
/// `tag` says what kind of node this is. Tags are `|`-separated and matched
/// by substring, so `"expr|number"` is a number. Leaves carry their literal
/// `text`; groups carry their `children` in source order, brackets included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub tag: String,
    pub text: Option<String>,
    pub children: Vec<SyntaxNode>,
    pub span: Span,
}

impl SyntaxNode {
    /// A leaf node with literal text.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>, span: Span) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            children: Vec::new(),
            span,
        }
    }

    /// An inner node.
    pub fn branch(tag: impl Into<String>, children: Vec<SyntaxNode>, span: Span) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            children,
            span,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.contains(tag)
    }
}

/// Indented dump, one node per line.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn go(node: &SyntaxNode, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:indent$}{}", "", node.tag, indent = level * 2)?;
            if let Some(text) = &node.text {
                write!(f, " '{}'", text)?;
            }
            writeln!(f)?;
            for child in &node.children {
                go(child, level + 1, f)?;
            }
            Ok(())
        }
        go(self, 0, f)
    }
}
