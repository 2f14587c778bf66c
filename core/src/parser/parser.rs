use crate::parser::{ParseError, ParseErrorKind, Span, SyntaxNode, error::convert_pest_error};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/tlisp.pest"]
pub struct TLispParser;

/// Bracket nesting allowed by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a whole program into a syntax tree rooted at a `">"` node.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom nesting limit.
///
/// Inputs nested deeper than `max_depth` brackets are rejected before pest
/// sees them, so pathological input cannot overflow the stack.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<SyntaxNode, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs =
        TLispParser::parse(Rule::program, source).map_err(|e| convert_pest_error(e, source))?;
    let program = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing program".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    Ok(to_node(program))
}

fn to_node(pair: Pair<Rule>) -> SyntaxNode {
    let span = Span::from(pair.as_span());
    match pair.as_rule() {
        Rule::program => SyntaxNode::branch(">", children(pair), span),
        Rule::number => SyntaxNode::leaf("expr|number", pair.as_str(), span),
        Rule::symbol => SyntaxNode::leaf("expr|symbol", pair.as_str(), span),
        Rule::sexpr => SyntaxNode::branch("expr|sexpr", children(pair), span),
        Rule::qexpr => SyntaxNode::branch("expr|qexpr", children(pair), span),
        Rule::lparen | Rule::rparen | Rule::lbrace | Rule::rbrace => {
            SyntaxNode::leaf("char", pair.as_str(), span)
        }
        _ => SyntaxNode::leaf("regex", pair.as_str(), span),
    }
}

fn children(pair: Pair<Rule>) -> Vec<SyntaxNode> {
    pair.into_inner()
        .filter(|p| p.as_rule() != Rule::EOI)
        .map(to_node)
        .collect()
}

/// Reject bracket nesting deeper than `max_depth`.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let mut in_comment = false;

    for (pos, c) in source.char_indices() {
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        match c {
            ';' => in_comment = true,
            '(' | '{' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source.to_string(),
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}
