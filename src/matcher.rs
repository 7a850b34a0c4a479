use std::fmt;

use crate::ast::{Atom, CompiledPattern, Token};
use crate::config::{Budget, Limits};
use crate::error::{MatchError, PatternError};
use crate::parser;
use crate::resolver;

/// A compiled restricted pattern.
///
/// The pattern is compiled once in [`Regex::new`] and never changes; every
/// call to [`Regex::is_match`] runs a fresh scan, so a `Regex` can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct Regex {
    compiled: CompiledPattern,
    limits: Limits,
}

impl Regex {
    /// Compile `pattern`. Never fails: malformed patterns simply never match.
    pub fn new(pattern: &str) -> Self {
        Self::with_limits(pattern, Limits::default())
    }

    pub fn with_limits(pattern: &str, limits: Limits) -> Self {
        Self {
            compiled: parser::compile(pattern),
            limits,
        }
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// Reports why the pattern can never match, if it can't.
    ///
    /// Matching does not depend on this; it only tells "malformed" apart from
    /// "well-formed but not matching".
    pub fn validate(&self) -> Result<(), PatternError> {
        if let Some(defect) = &self.compiled.defect {
            return Err(defect.clone());
        }
        let quantified_end = self.compiled.end_anchored
            && self.compiled.tokens.last().is_some_and(|token| token.quantifier.is_some());
        if quantified_end {
            return Err(PatternError::QuantifiedEndAnchor);
        }
        Ok(())
    }

    /// Tests whether the pattern matches `subject`.
    ///
    /// A match abandoned because it ran out of [`Limits`] counts as no match.
    pub fn is_match(&self, subject: &str) -> bool {
        self.try_match(subject).unwrap_or_else(|err| {
            log::warn!("giving up matching {} against {:?}: {}", self.compiled, subject, err);
            false
        })
    }

    /// Like [`Regex::is_match`] but reports exhausted limits as an error.
    pub fn try_match(&self, subject: &str) -> Result<bool, MatchError> {
        if self.compiled.is_defective() {
            return Ok(false);
        }
        let subject: Vec<char> = subject.chars().collect();
        let mut budget = Budget::new(self.limits);
        let result = scan(View::new(&self.compiled), &subject, &mut budget);
        log::trace!(
            "{} scanned {} time(s) in {} step(s): {:?}",
            self.compiled,
            budget.scans(),
            budget.steps(),
            result
        );
        result
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.compiled, f)
    }
}

/// A borrowed, possibly partial, view of a compiled pattern.
#[derive(Debug, Clone, Copy)]
pub(crate) struct View<'a> {
    pub tokens: &'a [Token],
    pub literal: &'a [char],
    pub start_anchored: bool,
    pub end_anchored: bool,
}

impl<'a> View<'a> {
    pub fn new(compiled: &'a CompiledPattern) -> Self {
        Self {
            tokens: &compiled.tokens,
            literal: &compiled.literal,
            start_anchored: compiled.start_anchored,
            end_anchored: compiled.end_anchored,
        }
    }

    /// The tokens after `index`, pinned to the start of whatever they are
    /// matched against and keeping this view's end anchor.
    pub fn tail(&self, index: usize) -> Self {
        let rest = &self.tokens[index + 1..];
        let base = self.tokens.first().map_or(0, |token| token.offset);
        let from = rest.first().map_or(self.literal.len(), |token| token.offset - base);
        Self {
            tokens: rest,
            literal: &self.literal[from..],
            start_anchored: true,
            end_anchored: self.end_anchored,
        }
    }

    fn is_vacuous(&self) -> bool {
        self.tokens.is_empty() && !(self.start_anchored && self.end_anchored)
    }
}

/// Cursor and verdict of one forward sweep.
#[derive(Debug, Default)]
struct ScanState {
    cursor: usize,
    verdict: Option<bool>,
}

/// Match `view` against the whole of `subject`.
pub(crate) fn scan(view: View<'_>, subject: &[char], budget: &mut Budget) -> Result<bool, MatchError> {
    budget.charge()?;

    if view.literal == subject || view.is_vacuous() {
        return Ok(true);
    }

    let mut state = ScanState::default();
    for pos in 0..subject.len() {
        state.step(view, subject, pos, budget)?;
        if let Some(verdict) = state.verdict {
            return Ok(verdict);
        }
    }

    Ok(false)
}

impl ScanState {
    fn step(&mut self, view: View<'_>, subject: &[char], pos: usize, budget: &mut Budget) -> Result<(), MatchError> {
        budget.step()?;
        let Some(token) = view.tokens.get(self.cursor) else {
            return Ok(());
        };
        match token.quantifier {
            Some(quantifier) => {
                let tail = view.tail(self.cursor);
                let matched = resolver::resolve(token.atom, quantifier, tail, subject, pos, budget)?;
                self.verdict = Some(matched);
            }
            None => self.consume(view, token.atom, subject[pos], pos + 1 == subject.len()),
        }
        Ok(())
    }

    fn consume(&mut self, view: View<'_>, atom: Atom, ch: char, subject_done: bool) {
        let matched = atom.matches(ch);
        let at_last_token = self.cursor + 1 == view.tokens.len();

        if view.start_anchored && !matched {
            self.verdict = Some(false);
        } else if at_last_token && !view.end_anchored {
            if subject_done || matched {
                self.verdict = Some(matched);
            }
        } else if view.end_anchored && subject_done {
            self.verdict = Some(matched && at_last_token);
        }

        // The character that broke a partial match is not retried against
        // the first token.
        if matched && !(view.end_anchored && at_last_token) {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
    }
}
