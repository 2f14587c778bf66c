use crate::lexer::Token;
use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;
use tlisp_core::builtins::Builtin;

/// Foreground color for each token kind.
fn token_color(token: Token) -> Color {
    match token {
        Token::LParen | Token::RParen => Color::White,
        Token::LBrace | Token::RBrace => Color::Yellow,
        Token::Comment => Color::DarkGray,
        Token::Number => Color::Cyan,
        Token::Symbol => Color::Blue,
    }
}

const BUILTIN: Color = Color::Magenta;
const PLAIN: Color = Color::White;
const INVALID: Color = Color::Red;

pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        let mut lexer = Token::lexer(line);
        while let Some(token) = lexer.next() {
            let span = lexer.span();

            // Skipped whitespace between tokens
            if span.start > curr_end {
                output.push((Style::new().fg(PLAIN), line[curr_end..span.start].to_string()));
            }

            let fg = match token {
                Ok(Token::Symbol) if Builtin::from_name(lexer.slice()).is_some() => BUILTIN,
                Ok(token) => token_color(token),
                Err(_) => INVALID,
            };
            output.push((Style::new().fg(fg), line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(PLAIN), line[curr_end..].to_string()));
        }

        output
    }
}
