//! Exclude queries over feature attributes
//!
//! A small boolean language for picking features out of a layer:
//!
//! ```text
//! expr    := and (("or" | "||") and)*
//! and     := not (("and" | "&&") not)*
//! not     := ("not" | "!") not | primary
//! primary := "(" expr ")" | field op literal
//! op      := "==" | "=" | "!=" | "<" | "<=" | ">" | ">="
//! literal := number | 'text' | "text"
//! ```
//!
//! Keywords are case-insensitive. A comparison is false when the feature
//! lacks the field or when the field and literal are of different kinds.

use crate::feature::Feature;
use geoclass_core::{AttributeValue, Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Identifier(String),
    Number(f64),
    Text(String),
    And,
    Or,
    Not,
    OpenParen,
    CloseParen,
    Compare(CompareOp),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{name}"),
            Token::Number(n) => write!(f, "{n}"),
            Token::Text(s) => write!(f, "'{s}'"),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Compare(op) => write!(f, "{op}"),
        }
    }
}

/// Comparison operator of a query term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    fn test(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::NotEq => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::LtEq => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::GtEq => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// Tracks the position of the tokenizer in the query text
struct Tokenizer<'a> {
    current_index: usize,
    remaining_text: &'a str,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Tokenizer {
            current_index: 0,
            remaining_text: src,
        }
    }

    fn next_token(&mut self) -> Result<Option<(Token, usize)>> {
        let skipped = self.remaining_text.len() - self.remaining_text.trim_start().len();
        self.chomp(skipped);

        let start = self.current_index;
        let Some(next) = self.remaining_text.chars().next() else {
            return Ok(None);
        };

        let (token, length) = match next {
            '(' => (Token::OpenParen, 1),
            ')' => (Token::CloseParen, 1),
            '=' if self.remaining_text.starts_with("==") => (Token::Compare(CompareOp::Eq), 2),
            '=' => (Token::Compare(CompareOp::Eq), 1),
            '!' if self.remaining_text.starts_with("!=") => (Token::Compare(CompareOp::NotEq), 2),
            '!' => (Token::Not, 1),
            '<' if self.remaining_text.starts_with("<=") => (Token::Compare(CompareOp::LtEq), 2),
            '<' => (Token::Compare(CompareOp::Lt), 1),
            '>' if self.remaining_text.starts_with(">=") => (Token::Compare(CompareOp::GtEq), 2),
            '>' => (Token::Compare(CompareOp::Gt), 1),
            '&' if self.remaining_text.starts_with("&&") => (Token::And, 2),
            '|' if self.remaining_text.starts_with("||") => (Token::Or, 2),
            '\'' | '"' => tokenize_text(self.remaining_text, next, start)?,
            c if c.is_ascii_digit() || c == '-' || c == '.' => tokenize_number(self.remaining_text, start)?,
            c if c.is_alphabetic() || c == '_' => tokenize_word(self.remaining_text),
            other => return Err(Error::query(format!("unexpected character '{other}'"), start)),
        };

        self.chomp(length);
        Ok(Some((token, start)))
    }

    fn chomp(&mut self, num_bytes: usize) {
        self.remaining_text = &self.remaining_text[num_bytes..];
        self.current_index += num_bytes;
    }
}

fn tokenize(src: &str) -> Result<Vec<(Token, usize)>> {
    let mut tokenizer = Tokenizer::new(src);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

fn tokenize_text(data: &str, quote: char, start: usize) -> Result<(Token, usize)> {
    let mut value = String::new();
    let mut escaped = false;
    for (offset, ch) in data.char_indices().skip(1) {
        if escaped {
            value.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Ok((Token::Text(value), offset + ch.len_utf8()));
        } else {
            value.push(ch);
        }
    }
    Err(Error::query("unterminated text literal", start))
}

fn tokenize_number(data: &str, start: usize) -> Result<(Token, usize)> {
    let mut length = 0;
    let mut previous = None;
    for ch in data.chars() {
        let accepted = ch.is_ascii_digit()
            || ch == '.'
            || ch == 'e'
            || ch == 'E'
            || (ch == '-' && (length == 0 || matches!(previous, Some('e' | 'E'))))
            || (ch == '+' && matches!(previous, Some('e' | 'E')));
        if !accepted {
            break;
        }
        length += ch.len_utf8();
        previous = Some(ch);
    }

    let raw = &data[..length];
    raw.parse::<f64>()
        .map(|value| (Token::Number(value), length))
        .map_err(|_| Error::query(format!("invalid number '{raw}'"), start))
}

fn tokenize_word(data: &str) -> (Token, usize) {
    let length = data
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(data.len(), |(i, _)| i);
    let word = &data[..length];
    let token = match word.to_lowercase().as_str() {
        "and" => Token::And,
        "or" => Token::Or,
        "not" => Token::Not,
        _ => Token::Identifier(word.to_string()),
    };
    (token, length)
}

/// A parsed exclude query
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Or(Box<Query>, Box<Query>),
    And(Box<Query>, Box<Query>),
    Not(Box<Query>),
    Compare {
        field: String,
        op: CompareOp,
        value: AttributeValue,
    },
}

impl Query {
    pub fn parse(src: &str) -> Result<Query> {
        let tokens = tokenize(src)?;
        let mut parser = Parser {
            tokens,
            position: 0,
            end: src.len(),
        };
        let query = parser.parse_or()?;
        match parser.peek() {
            Some((token, at)) => Err(Error::query(format!("unexpected '{token}' after query"), at)),
            None => Ok(query),
        }
    }

    /// Whether the feature satisfies this query
    pub fn matches<F: Feature + ?Sized>(&self, feature: &F) -> bool {
        match self {
            Query::Or(lhs, rhs) => lhs.matches(feature) || rhs.matches(feature),
            Query::And(lhs, rhs) => lhs.matches(feature) && rhs.matches(feature),
            Query::Not(inner) => !inner.matches(feature),
            Query::Compare { field, op, value } => feature
                .attribute(field)
                .filter(|actual| actual.kind() == value.kind())
                .is_some_and(|actual| op.test(actual.cmp(value))),
        }
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Query::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Or(lhs, rhs) => write!(f, "({lhs} or {rhs})"),
            Query::And(lhs, rhs) => write!(f, "({lhs} and {rhs})"),
            Query::Not(inner) => write!(f, "not {inner}"),
            Query::Compare { field, op, value } => match value {
                AttributeValue::Text(text) => write!(
                    f,
                    "{field} {op} '{}'",
                    text.replace('\\', "\\\\").replace('\'', "\\'")
                ),
                AttributeValue::Number(_) => write!(f, "{field} {op} {value}"),
            },
        }
    }
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    position: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<(&Token, usize)> {
        self.tokens.get(self.position).map(|(t, at)| (t, *at))
    }

    fn advance(&mut self) -> Result<(Token, usize)> {
        let next = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or_else(|| Error::query("unexpected end of query", self.end))?;
        self.position += 1;
        Ok(next)
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().is_some_and(|(t, _)| t == expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<Query> {
        let mut lhs = self.parse_and()?;
        while self.eat(&Token::Or) {
            let rhs = self.parse_and()?;
            lhs = Query::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Query> {
        let mut lhs = self.parse_not()?;
        while self.eat(&Token::And) {
            let rhs = self.parse_not()?;
            lhs = Query::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> Result<Query> {
        if self.eat(&Token::Not) {
            return Ok(Query::Not(Box::new(self.parse_not()?)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Query> {
        match self.advance()? {
            (Token::OpenParen, _) => {
                let inner = self.parse_or()?;
                match self.advance()? {
                    (Token::CloseParen, _) => Ok(inner),
                    (token, at) => Err(Error::query(format!("expected ')', found '{token}'"), at)),
                }
            }
            (Token::Identifier(field), _) => {
                let op = match self.advance()? {
                    (Token::Compare(op), _) => op,
                    (token, at) => {
                        return Err(Error::query(
                            format!("expected comparison after '{field}', found '{token}'"),
                            at,
                        ))
                    }
                };
                let value = match self.advance()? {
                    (Token::Number(n), _) => AttributeValue::number(n),
                    (Token::Text(s), _) => AttributeValue::Text(s),
                    (token, at) => return Err(Error::query(format!("expected a literal, found '{token}'"), at)),
                };
                Ok(Query::Compare { field, op, value })
            }
            (token, at) => Err(Error::query(format!("expected a field or '(', found '{token}'"), at)),
        }
    }
}
