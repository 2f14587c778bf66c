use logos::Logos;
use reedline::{ValidationResult, Validator};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r";[^\n]*")]
    Comment,

    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[A-Za-z0-9_+\-*/\\=<>!&]+", priority = 1)]
    Symbol,
}

/// Count brackets left open at the end of `buffer`.
///
/// Returns `None` when the buffer contains something the lexer does not
/// know, so the parser gets to report it.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) | Ok(Token::LBrace) => depth += 1,
            Ok(Token::RParen) | Ok(Token::RBrace) => depth -= 1,

            // Valid tokens that don't affect depth
            Ok(_) => {}

            Err(_) => {
                return None;
            }
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}

/// Joins piped lines until their brackets balance.
#[derive(Debug, Default)]
pub struct ProgramBuffer {
    pending: String,
}

impl ProgramBuffer {
    /// Add one line. Returns the buffered program once no bracket is left
    /// open, or when the lexer cannot tell and the parser should decide.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(line);

        match calculate_depth(&self.pending) {
            Some(depth) if depth > 0 => None,
            _ => Some(std::mem::take(&mut self.pending)),
        }
    }

    /// Text still waiting for a closing bracket when the input ends.
    pub fn finish(self) -> Option<String> {
        (!self.pending.is_empty()).then_some(self.pending)
    }
}

/// Keeps the line editor open while brackets are unbalanced.
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Token::lexer(input).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_tokens() {
        assert_eq!(
            tokens("(+ 1 {x -2}) ; done"),
            vec![
                Token::LParen,
                Token::Symbol,
                Token::Number,
                Token::LBrace,
                Token::Symbol,
                Token::Number,
                Token::RBrace,
                Token::RParen,
                Token::Comment,
            ]
        );
    }

    #[test]
    fn test_digits_followed_by_letters_is_symbol() {
        assert_eq!(tokens("12abc"), vec![Token::Symbol]);
        assert_eq!(tokens("-"), vec![Token::Symbol]);
    }

    #[test]
    fn test_depth() {
        assert_eq!(calculate_depth("(+ 1 2)"), Some(0));
        assert_eq!(calculate_depth("(def {x"), Some(2));
        assert_eq!(calculate_depth("1 2)"), Some(0));
        assert_eq!(calculate_depth("; ((("), Some(0));
        assert_eq!(calculate_depth("(\"str"), None);
    }

    #[test]
    fn test_program_buffer_joins_open_groups() {
        let mut buffer = ProgramBuffer::default();
        assert_eq!(buffer.push_line("def {add} (\\ {x y}"), None);
        assert_eq!(buffer.push_line("  ; (unbalanced in a comment"), None);
        assert_eq!(
            buffer.push_line("  {+ x y})"),
            Some("def {add} (\\ {x y}\n  ; (unbalanced in a comment\n  {+ x y})".to_string())
        );
        assert_eq!(buffer.push_line("add 1 2"), Some("add 1 2".to_string()));
        assert_eq!(buffer.finish(), None);
    }

    #[test]
    fn test_program_buffer_flushes_leftovers_at_end() {
        let mut buffer = ProgramBuffer::default();
        assert_eq!(buffer.push_line("(+ 1"), None);
        assert_eq!(buffer.push_line("2"), None);
        assert_eq!(buffer.finish(), Some("(+ 1\n2".to_string()));
    }

    #[test]
    fn test_program_buffer_hands_unknown_input_to_parser() {
        let mut buffer = ProgramBuffer::default();
        assert_eq!(buffer.push_line("(\"str"), Some("(\"str".to_string()));
    }

    #[test]
    fn test_validator() {
        assert!(matches!(
            BracketValidator.validate("(+ 1"),
            ValidationResult::Incomplete
        ));
        assert!(matches!(
            BracketValidator.validate("(+ 1 2)"),
            ValidationResult::Complete
        ));
    }
}
