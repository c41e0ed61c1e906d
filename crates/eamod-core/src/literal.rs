//! Restricted literal parser for list-valued configuration fields.
//!
//! Configuration stores lists and matrices as their textual form, e.g.
//! `"[2, 3, 5]"` or `"[[0, 1], [1, 0]]"`.  This module accepts exactly that
//! and nothing more:
//!
//! ```text
//! value   := number | list
//! list    := '[' ( value ( ',' value )* ','? )? ']'      -- or ( ... )
//! number  := '-'? digits ( '.' digits )? ( ('e'|'E') ('+'|'-')? digits )?
//! ```
//!
//! Whitespace between tokens is ignored.  Nesting is capped at
//! [`MAX_DEPTH`] so hostile input cannot exhaust the stack.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Deepest list nesting accepted by [`parse_literal`].
pub const MAX_DEPTH: usize = 32;

/// A parsed literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    List(Vec<Literal>),
}

impl Literal {
    /// The value as an integer, if it is one.  Floats are never coerced.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Literal::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a number; integers are widened to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Literal::Int(v) => Some(v as f64),
            Literal::Float(v) => Some(v),
            Literal::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            Literal::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<Literal>> {
        match self {
            Literal::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Float(v) => write!(f, "{v:?}"),
            Literal::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a single literal.  Trailing non-whitespace is an error.
pub fn parse_literal(text: &str) -> CoreResult<Literal> {
    let mut p = Parser { src: text.as_bytes(), pos: 0 };
    let value = p.value(0)?;
    p.skip_ws();
    if p.pos != p.src.len() {
        return Err(p.error("trailing characters after literal"));
    }
    Ok(value)
}

/// Parse `"[1, 2, 3]"` into integers.
pub fn parse_int_list(text: &str) -> CoreResult<Vec<i64>> {
    expect_list(parse_literal(text)?, "list of integers")?
        .iter()
        .map(|item| int_of(item, "list of integers"))
        .collect()
}

/// Parse `"[1, 2.5]"` into floats; integers are widened.
pub fn parse_number_list(text: &str) -> CoreResult<Vec<f64>> {
    expect_list(parse_literal(text)?, "list of numbers")?
        .iter()
        .map(|item| number_of(item, "list of numbers"))
        .collect()
}

/// Parse `"[[1, 2], [3, 4]]"` into integer rows.  Rows may differ in length;
/// shape checks belong to the caller.
pub fn parse_int_matrix(text: &str) -> CoreResult<Vec<Vec<i64>>> {
    expect_list(parse_literal(text)?, "nested list of integers")?
        .into_iter()
        .map(|row| {
            expect_list(row, "nested list of integers")?
                .iter()
                .map(|item| int_of(item, "nested list of integers"))
                .collect()
        })
        .collect()
}

/// Parse `"[[1.5, 2], [3, 4]]"` into float rows.
pub fn parse_number_matrix(text: &str) -> CoreResult<Vec<Vec<f64>>> {
    expect_list(parse_literal(text)?, "nested list of numbers")?
        .into_iter()
        .map(|row| {
            expect_list(row, "nested list of numbers")?
                .iter()
                .map(|item| number_of(item, "nested list of numbers"))
                .collect()
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn expect_list(lit: Literal, expected: &'static str) -> CoreResult<Vec<Literal>> {
    match lit {
        Literal::List(items) => Ok(items),
        other => Err(CoreError::Unexpected { expected, found: other.to_string() }),
    }
}

fn int_of(lit: &Literal, expected: &'static str) -> CoreResult<i64> {
    lit.as_int()
        .ok_or_else(|| CoreError::Unexpected { expected, found: lit.to_string() })
}

fn number_of(lit: &Literal, expected: &'static str) -> CoreResult<f64> {
    lit.as_number()
        .ok_or_else(|| CoreError::Unexpected { expected, found: lit.to_string() })
}

// ── Recursive-descent parser ──────────────────────────────────────────────────

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, reason: impl Into<String>) -> CoreError {
        CoreError::Parse { offset: self.pos, reason: reason.into() }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn value(&mut self, depth: usize) -> CoreResult<Literal> {
        self.skip_ws();
        match self.peek() {
            Some(b'[') => self.list(b']', depth),
            Some(b'(') => self.list(b')', depth),
            Some(b'-' | b'0'..=b'9') => self.number(),
            Some(b) => Err(self.error(format!("unexpected character {:?}", b as char))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn list(&mut self, close: u8, depth: usize) -> CoreResult<Literal> {
        if depth >= MAX_DEPTH {
            return Err(self.error(format!("nesting deeper than {MAX_DEPTH}")));
        }
        self.pos += 1; // opening bracket
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(Literal::List(items));
            }
            items.push(self.value(depth + 1)?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b) if b == close => {}
                Some(b) => {
                    return Err(self.error(format!(
                        "expected ',' or {:?}, found {:?}",
                        close as char, b as char
                    )));
                }
                None => return Err(self.error("unterminated list")),
            }
        }
    }

    fn number(&mut self) -> CoreResult<Literal> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        if !self.digits() {
            return Err(self.error("expected digits"));
        }
        let mut is_float = false;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            is_float = true;
            if !self.digits() {
                return Err(self.error("expected digits after '.'"));
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            is_float = true;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !self.digits() {
                return Err(self.error("expected exponent digits"));
            }
        }

        // The scanned range is ASCII by construction.
        let text = std::str::from_utf8(&self.src[start..self.pos])
            .map_err(|e| self.error(e.to_string()))?;
        if is_float {
            text.parse::<f64>()
                .map(Literal::Float)
                .map_err(|e| CoreError::Parse { offset: start, reason: e.to_string() })
        } else {
            text.parse::<i64>()
                .map(Literal::Int)
                .map_err(|e| CoreError::Parse { offset: start, reason: e.to_string() })
        }
    }

    /// Consume a run of ASCII digits; `false` if there were none.
    fn digits(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos > start
    }
}
