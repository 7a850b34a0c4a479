use crate::ast::{Atom, CompiledPattern, Quantifier, Token, ANY_CHAR, END_ANCHOR, ESCAPE_CHAR, START_ANCHOR};
use crate::error::PatternError;

/// Compiler for restricted patterns.
///
/// The `Parser` walks the raw pattern once, left to right, and never fails:
/// problems are recorded as the pattern's defect and the rest of the pattern
/// is still tokenized.
pub struct Parser {
    chars: Vec<char>,
    pos: usize,
    /// Whether the previous element was an atom a quantifier may attach to.
    after_atom: bool,
    out: CompiledPattern,
}

impl Parser {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos: 0,
            after_atom: false,
            out: CompiledPattern::default(),
        }
    }

    /// Peek at the next character in the pattern without advancing.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn is_last(&self, pos: usize) -> bool {
        pos + 1 == self.chars.len()
    }

    fn fail(&mut self, defect: PatternError) {
        self.out.defect.get_or_insert(defect);
    }

    /// Entry point for compiling a pattern.
    ///
    /// Examples:
    /// - Pattern: `^ab$` → anchored at both ends, tokens `a`, `b`
    /// - Pattern: `a*b`  → tokens `a*`, `b`
    /// - Pattern: `a\?`  → tokens `a`, literal `?`
    /// - Pattern: `a^b`  → defective, never matches
    pub fn parse(mut self) -> CompiledPattern {
        while let Some(ch) = self.peek() {
            let pos = self.pos;
            match ch {
                START_ANCHOR if pos == 0 => {
                    self.advance();
                    self.out.start_anchored = true;
                    self.after_atom = false;
                }
                END_ANCHOR if self.is_last(pos) => {
                    self.advance();
                    self.out.end_anchored = true;
                    self.after_atom = false;
                }
                START_ANCHOR | END_ANCHOR => {
                    self.advance();
                    self.fail(PatternError::MisplacedAnchor { anchor: ch, position: pos });
                    self.push_literal(ch, &[ch]);
                }
                _ => match Quantifier::from_char(ch) {
                    Some(quantifier) => {
                        self.advance();
                        self.parse_quantifier(quantifier, pos);
                    }
                    None => self.parse_atom(),
                },
            }
        }
        self.out
    }

    /// Attach a quantifier to the atom just before it.
    ///
    /// Example:
    /// - Pattern: `a*` → Token { atom: Literal('a'), quantifier: Some(ZeroOrMore) }
    /// - Pattern: `*a` → dangling quantifier, the pattern is defective
    fn parse_quantifier(&mut self, quantifier: Quantifier, pos: usize) {
        if self.after_atom {
            if let Some(token) = self.out.tokens.last_mut() {
                token.quantifier = Some(quantifier);
                self.out.literal.push(quantifier.symbol());
                self.after_atom = false;
                return;
            }
        }
        self.fail(PatternError::DanglingQuantifier {
            quantifier: quantifier.symbol(),
            position: pos,
        });
        self.push_literal(quantifier.symbol(), &[quantifier.symbol()]);
        self.after_atom = false;
    }

    /// Parse a single atom: escape, wildcard or literal.
    ///
    /// Examples:
    /// - Pattern: `.`   → Any
    /// - Pattern: `\.`  → Literal('.')
    /// - Pattern: `\`   → Literal('\\') (lone backslash at end)
    /// - Pattern: `a`   → Literal('a')
    fn parse_atom(&mut self) {
        match self.advance() {
            Some(ESCAPE_CHAR) => match self.advance() {
                Some(c) => self.push_literal(c, &[ESCAPE_CHAR, c]),
                None => self.push_literal(ESCAPE_CHAR, &[ESCAPE_CHAR]),
            },
            Some(ANY_CHAR) => self.push_atom(Atom::Any, &[ANY_CHAR]),
            Some(c) => self.push_literal(c, &[c]),
            None => {}
        }
    }

    fn push_literal(&mut self, ch: char, text: &[char]) {
        self.push_atom(Atom::Literal(ch), text);
    }

    fn push_atom(&mut self, atom: Atom, text: &[char]) {
        self.out.tokens.push(Token {
            atom,
            quantifier: None,
            offset: self.out.literal.len(),
        });
        self.out.literal.extend_from_slice(text);
        self.after_atom = true;
    }
}

/// Compile `pattern` into its token sequence.
pub fn compile(pattern: &str) -> CompiledPattern {
    let compiled = Parser::new(pattern).parse();
    if let Some(defect) = &compiled.defect {
        log::debug!("pattern {:?} never matches: {}", pattern, defect);
    }
    compiled
}
