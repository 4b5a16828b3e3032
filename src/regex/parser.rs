//! Recursive-descent parser over spec.md §4.6's grammar, turning a regex
//! source string into an [`Ast`] ahead of Thompson-fragment lowering.

use crate::error::{MatchError, Result};
use crate::regex::ast::Ast;
use crate::regex::charclass::CharClass;

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    source: &'a str,
}

/// Parse `source` into an [`Ast`], or a [`MatchError::InvalidPattern`] at
/// the first unrecoverable syntactic problem. Parsing does not attempt
/// error recovery (spec.md §7): the first fatal inconsistency wins.
pub fn parse(source: &str) -> Result<Ast> {
    let mut parser = Parser {
        bytes: source.as_bytes(),
        pos: 0,
        source,
    };
    let ast = parser.parse_alternation()?;
    if parser.pos != parser.bytes.len() {
        // Only a stray, unmatched ')' can leave input unconsumed here:
        // every other construct either consumes to EOF or already errored.
        return Err(parser.err("unmatched )"));
    }
    Ok(ast)
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn err(&self, reason: &str) -> MatchError {
        MatchError::InvalidPattern {
            source: self.source.to_string(),
            reason: reason.to_string(),
        }
    }

    /// `alternation := concatenation ('|' concatenation)*`
    fn parse_alternation(&mut self) -> Result<Ast> {
        let mut branches = vec![self.parse_concatenation()?];
        while self.peek() == Some(b'|') {
            self.bump();
            branches.push(self.parse_concatenation()?);
        }
        if branches.len() == 1 {
            Ok(branches.pop().unwrap())
        } else {
            Ok(Ast::Alternation(branches))
        }
    }

    /// `concatenation := quantified*`
    fn parse_concatenation(&mut self) -> Result<Ast> {
        let mut parts = Vec::new();
        while let Some(b) = self.peek() {
            if b == b'|' || b == b')' {
                break;
            }
            parts.push(self.parse_quantified()?);
        }
        match parts.len() {
            0 => Ok(Ast::Empty),
            1 => Ok(parts.pop().unwrap()),
            _ => Ok(Ast::Concat(parts)),
        }
    }

    /// `quantified := atom ('*' | '+' | '?')?`
    fn parse_quantified(&mut self) -> Result<Ast> {
        let atom = self.parse_atom()?;
        match self.peek() {
            Some(b'*') => {
                self.bump();
                Ok(Ast::Star(Box::new(atom)))
            }
            Some(b'+') => {
                self.bump();
                Ok(Ast::Plus(Box::new(atom)))
            }
            Some(b'?') => {
                self.bump();
                Ok(Ast::Optional(Box::new(atom)))
            }
            _ => Ok(atom),
        }
    }

    /// `atom := '(' regex ')' | char_class | '.' | '\' esc | '^' | '$' | literal`
    fn parse_atom(&mut self) -> Result<Ast> {
        let b = self
            .bump()
            .ok_or_else(|| self.err("unexpected end of input inside an atom"))?;
        match b {
            b'(' => {
                let inner = self.parse_alternation()?;
                match self.bump() {
                    Some(b')') => Ok(inner),
                    _ => Err(self.err("unmatched (")),
                }
            }
            b')' => Err(self.err("unmatched )")),
            b'[' => self.parse_char_class(),
            b'.' => Ok(Ast::Class(CharClass::any_non_newline())),
            b'\\' => self.parse_escape(),
            b'^' | b'$' => Ok(Ast::Anchor),
            other => Ok(Ast::Byte(other)),
        }
    }

    /// `esc := 'd'|'D'|'w'|'W'|'s'|'S' | any literal char`
    fn parse_escape(&mut self) -> Result<Ast> {
        let e = self
            .bump()
            .ok_or_else(|| self.err("dangling escape at end of source"))?;
        Ok(match e {
            b'd' => Ast::Class(CharClass::digit()),
            b'D' => Ast::Class(CharClass::digit().complement()),
            b'w' => Ast::Class(CharClass::word()),
            b'W' => Ast::Class(CharClass::word().complement()),
            b's' => Ast::Class(CharClass::space()),
            b'S' => Ast::Class(CharClass::space().complement()),
            other => Ast::Byte(other),
        })
    }

    /// `char_class := '[' '^'? class_item+ ']'`
    fn parse_char_class(&mut self) -> Result<Ast> {
        let negate = if self.peek() == Some(b'^') {
            self.bump();
            true
        } else {
            false
        };

        let mut set = CharClass::empty();
        let mut item_count = 0usize;
        loop {
            match self.peek() {
                None => return Err(self.err("unmatched [")),
                Some(b']') => {
                    if item_count == 0 {
                        return Err(self.err("empty character class"));
                    }
                    self.bump();
                    break;
                }
                _ => {
                    set = set.union(self.parse_class_item()?);
                    item_count += 1;
                }
            }
        }

        if negate {
            set = set.complement();
        }
        Ok(Ast::Class(set))
    }

    /// `class_item := char ('-' char)? | '\' esc`
    ///
    /// Shorthand escapes (`\d` etc.) are allowed as a class item but never
    /// as a range endpoint; a literal escaped char can be either.
    fn parse_class_item(&mut self) -> Result<CharClass> {
        let b = self.bump().ok_or_else(|| self.err("unmatched ["))?;

        let lo = if b == b'\\' {
            let e = self
                .bump()
                .ok_or_else(|| self.err("dangling escape at end of source"))?;
            match e {
                b'd' => return Ok(CharClass::digit()),
                b'D' => return Ok(CharClass::digit().complement()),
                b'w' => return Ok(CharClass::word()),
                b'W' => return Ok(CharClass::word().complement()),
                b's' => return Ok(CharClass::space()),
                b'S' => return Ok(CharClass::space().complement()),
                other => other,
            }
        } else {
            b
        };

        if self.peek() != Some(b'-') {
            return Ok(CharClass::single(lo));
        }

        // Lookahead past '-': a trailing '-' right before ']' is literal,
        // not the start of a range.
        let save = self.pos;
        self.bump();
        match self.peek() {
            None => Err(self.err("unmatched [")),
            Some(b']') => {
                self.pos = save;
                Ok(CharClass::single(lo))
            }
            Some(hi_raw) => {
                let hi = if hi_raw == b'\\' {
                    self.bump();
                    self.bump()
                        .ok_or_else(|| self.err("dangling escape at end of source"))?
                } else {
                    self.bump();
                    hi_raw
                };
                if hi < lo {
                    return Err(self.err("character class range is reversed"));
                }
                Ok(CharClass::range(lo, hi))
            }
        }
    }
}
