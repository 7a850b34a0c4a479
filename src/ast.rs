use std::fmt;

use crate::error::PatternError;

pub const ANY_CHAR: char = '.';
pub const START_ANCHOR: char = '^';
pub const END_ANCHOR: char = '$';
pub const ESCAPE_CHAR: char = '\\';

/// The smallest matchable unit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// `.` matches any single character.
    Any,
    Literal(char),
}

impl Atom {
    #[inline]
    pub fn matches(self, ch: char) -> bool {
        match self {
            Atom::Any => true,
            Atom::Literal(c) => c == ch,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Atom::Any => write!(f, "{}", ANY_CHAR),
            Atom::Literal(c) if is_special(c) => write!(f, "{}{}", ESCAPE_CHAR, c),
            Atom::Literal(c) => write!(f, "{}", c),
        }
    }
}

/// Postfix repetition operator attached to the preceding atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '?' => Some(Quantifier::ZeroOrOne),
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Quantifier::ZeroOrOne => '?',
            Quantifier::ZeroOrMore => '*',
            Quantifier::OneOrMore => '+',
        }
    }

    /// Smallest repetition count the resolver starts trying from.
    pub fn min(self) -> usize {
        match self {
            Quantifier::OneOrMore => 1,
            Quantifier::ZeroOrOne | Quantifier::ZeroOrMore => 0,
        }
    }

    /// Largest repetition count the resolver may try, if bounded.
    pub fn max(self) -> Option<usize> {
        match self {
            Quantifier::ZeroOrOne => Some(1),
            Quantifier::ZeroOrMore | Quantifier::OneOrMore => None,
        }
    }
}

/// An atom with an optional quantifier.
///
/// `offset` is the position of the token's first character inside the
/// pattern's literal form, so that the text of any tail of the token
/// sequence can be recovered without re-rendering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub atom: Atom,
    pub quantifier: Option<Quantifier>,
    pub offset: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.atom)?;
        if let Some(q) = self.quantifier {
            write!(f, "{}", q.symbol())?;
        }
        Ok(())
    }
}

/// Result of compiling a raw pattern string.
///
/// Compilation never fails. A malformed pattern keeps the first problem found
/// in `defect` and never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledPattern {
    pub start_anchored: bool,
    pub end_anchored: bool,
    pub tokens: Vec<Token>,
    /// Pattern text without the anchors that were stripped from it.
    pub literal: Vec<char>,
    pub defect: Option<PatternError>,
}

impl CompiledPattern {
    /// No tokens and not pinned at both ends: matches every subject.
    pub fn is_vacuous(&self) -> bool {
        self.tokens.is_empty() && !(self.start_anchored && self.end_anchored)
    }

    pub fn is_defective(&self) -> bool {
        self.defect.is_some()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_anchored {
            write!(f, "{}", START_ANCHOR)?;
        }
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        if self.end_anchored {
            write!(f, "{}", END_ANCHOR)?;
        }
        Ok(())
    }
}

fn is_special(ch: char) -> bool {
    matches!(ch, ANY_CHAR | START_ANCHOR | END_ANCHOR | ESCAPE_CHAR) || Quantifier::from_char(ch).is_some()
}
