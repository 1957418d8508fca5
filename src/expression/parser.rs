use std::fmt;

use log::{debug, warn};
use thiserror::Error;

use crate::expression::ast::TreeNode;

/// Errors produced while turning infix text into a tree
///
/// Positions are byte offsets into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expression cannot be empty")]
    EmptyInput,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexemeKind {
    Number(i64),
    Operator(char),
    LeftParen,
    RightParen,
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexemeKind::Number(n) => write!(f, "{}", n),
            LexemeKind::Operator(symbol) => write!(f, "{}", symbol),
            LexemeKind::LeftParen => write!(f, "("),
            LexemeKind::RightParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Lexeme {
    kind: LexemeKind,
    position: usize,
}

fn tokenize(input: &str) -> Result<Vec<Lexeme>, ParseError> {
    let mut lexemes = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        let kind = match ch {
            c if c.is_whitespace() => continue,
            '0'..='9' => {
                let mut text = String::from(ch);
                while let Some(&(_, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    text.push(next);
                    chars.next();
                }
                let value = text.parse::<i64>().map_err(|_| {
                    warn!("Number literal does not fit in i64: {}", text);
                    ParseError::NumberOutOfRange(text.clone())
                })?;
                LexemeKind::Number(value)
            }
            '+' | '-' | '*' | '/' => LexemeKind::Operator(ch),
            '(' => LexemeKind::LeftParen,
            ')' => LexemeKind::RightParen,
            other => {
                warn!("Unexpected character '{}' at position {}", other, position);
                return Err(ParseError::UnexpectedCharacter {
                    ch: other,
                    position,
                });
            }
        };
        lexemes.push(Lexeme { kind, position });
    }

    Ok(lexemes)
}

struct Parser {
    lexemes: Vec<Lexeme>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<Lexeme> {
        self.lexemes.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.peek()?;
        self.cursor += 1;
        Some(lexeme)
    }

    /// Consume the next lexeme if it is one of `symbols`
    fn next_operator(&mut self, symbols: &[char]) -> Option<char> {
        match self.peek() {
            Some(Lexeme {
                kind: LexemeKind::Operator(symbol),
                ..
            }) if symbols.contains(&symbol) => {
                self.cursor += 1;
                Some(symbol)
            }
            _ => None,
        }
    }

    // expr := term (('+' | '-') term)*
    fn parse_expr(&mut self) -> Result<TreeNode, ParseError> {
        let mut node = self.parse_term()?;
        while let Some(symbol) = self.next_operator(&['+', '-']) {
            let rhs = self.parse_term()?;
            node = TreeNode::operator(symbol, node, rhs);
        }
        Ok(node)
    }

    // term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<TreeNode, ParseError> {
        let mut node = self.parse_factor()?;
        while let Some(symbol) = self.next_operator(&['*', '/']) {
            let rhs = self.parse_factor()?;
            node = TreeNode::operator(symbol, node, rhs);
        }
        Ok(node)
    }

    // factor := number | '(' expr ')'
    fn parse_factor(&mut self) -> Result<TreeNode, ParseError> {
        let lexeme = self.advance().ok_or(ParseError::UnexpectedEnd)?;
        match lexeme.kind {
            LexemeKind::Number(value) => Ok(TreeNode::number(value)),
            LexemeKind::LeftParen => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some(Lexeme {
                        kind: LexemeKind::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ParseError::UnexpectedToken {
                        found: other.kind.to_string(),
                        position: other.position,
                    }),
                    None => Err(ParseError::UnbalancedParenthesis {
                        position: lexeme.position,
                    }),
                }
            }
            other => Err(ParseError::UnexpectedToken {
                found: other.to_string(),
                position: lexeme.position,
            }),
        }
    }
}

/// Parse an infix integer expression such as `5*10+20` into a tree
///
/// `*` and `/` bind tighter than `+` and `-`; all four are
/// left-associative. Parentheses group. Whitespace is ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse(input: &str) -> Result<TreeNode, ParseError> {
    debug!("Parsing expression: '{}'", input);

    let lexemes = tokenize(input)?;
    if lexemes.is_empty() {
        warn!("Expression is empty");
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser { lexemes, cursor: 0 };
    let tree = parser.parse_expr()?;

    if let Some(extra) = parser.peek() {
        return Err(match extra.kind {
            LexemeKind::RightParen => ParseError::UnbalancedParenthesis {
                position: extra.position,
            },
            kind => ParseError::UnexpectedToken {
                found: kind.to_string(),
                position: extra.position,
            },
        });
    }

    debug!("Parsed tree of height {}", tree.height());
    Ok(tree)
}

#[cfg(test)]
mod tests_inner_lexer {
    use super::{LexemeKind, tokenize};

    #[test]
    fn test_tokenize_skips_whitespace() {
        let result = tokenize(" 12 +\t3 ");
        assert!(result.is_ok());
        if let Ok(lexemes) = result {
            let kinds: Vec<_> = lexemes.iter().map(|l| l.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    LexemeKind::Number(12),
                    LexemeKind::Operator('+'),
                    LexemeKind::Number(3)
                ]
            );
            let positions: Vec<_> = lexemes.iter().map(|l| l.position).collect();
            assert_eq!(positions, vec![1, 4, 6]);
        }
    }

    #[test]
    fn test_tokenize_parens() {
        let result = tokenize("(1)");
        assert!(result.is_ok());
        if let Ok(lexemes) = result {
            assert_eq!(lexemes.len(), 3);
            assert!(matches!(lexemes.first().map(|l| l.kind), Some(LexemeKind::LeftParen)));
            assert!(matches!(lexemes.last().map(|l| l.kind), Some(LexemeKind::RightParen)));
        }
    }
}
