use crate::api::{Diagnostic, RelatedInfo};
use crate::parser::{Rule, Span};

/// Parser error with the source it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Input ended inside a group
    UnclosedDelimiter { delimiter: char },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: String, span: Span) -> Self {
        Self { kind, source, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut related = vec![];
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                "P001",
                vec![],
            ),
            ParseErrorKind::UnclosedDelimiter { delimiter } => {
                if let Some(pos) = unclosed_opener(&self.source) {
                    related.push(RelatedInfo {
                        span: Span::new(pos, pos + 1),
                        message: "Unclosed delimiter opened here".to_string(),
                    });
                }
                (
                    format!("Unclosed delimiter, expected '{}'", delimiter),
                    "P002",
                    vec!["Add the missing closing delimiter".to_string()],
                )
            }
            ParseErrorKind::MaxDepthExceeded { max_depth, .. } => (
                format!(
                    "Expression nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                "P004",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", vec![]),
        };

        Diagnostic {
            message,
            span: self.span.clone(),
            related,
            help,
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "error: {}", diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &diagnostic.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => {
            let at_end = span.0.start >= source.trim_end().len();
            match closing_delimiter(&positives) {
                Some(delimiter) if at_end => ParseErrorKind::UnclosedDelimiter { delimiter },
                _ => ParseErrorKind::UnexpectedToken {
                    expected: format_expected_rules(&positives),
                    found: format_found(source, span.0.start, &negatives),
                },
            }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

fn closing_delimiter(rules: &[Rule]) -> Option<char> {
    rules.iter().find_map(|rule| match rule {
        Rule::rparen => Some(')'),
        Rule::rbrace => Some('}'),
        _ => None,
    })
}

/// Byte offset of the innermost bracket still open at the end of `source`.
fn unclosed_opener(source: &str) -> Option<usize> {
    let mut open = Vec::new();
    let mut in_comment = false;

    for (pos, c) in source.char_indices() {
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        match c {
            ';' => in_comment = true,
            '(' | '{' => open.push(pos),
            ')' | '}' => {
                open.pop();
            }
            _ => {}
        }
    }

    open.last().copied()
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number | Rule::symbol | Rule::sexpr | Rule::qexpr => "expression",
            Rule::rparen => "')'",
            Rule::rbrace => "'}'",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe what sits at `pos` in the source.
fn format_found(source: &str, pos: usize, negatives: &[Rule]) -> String {
    if let Some(rule) = negatives.first() {
        return format!("{:?}", rule);
    }
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
