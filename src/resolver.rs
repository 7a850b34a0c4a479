use crate::ast::{Atom, Quantifier};
use crate::config::Budget;
use crate::error::MatchError;
use crate::matcher::{self, View};

/// Outcome of one repetition count tried by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trial {
    Ongoing,
    Matched,
    Failed,
}

/// Repetition count being tried for one quantified token.
#[derive(Debug)]
struct RepetitionTrial {
    quantifier: Quantifier,
    iteration: usize,
}

impl RepetitionTrial {
    fn new(quantifier: Quantifier) -> Self {
        Self { quantifier, iteration: 0 }
    }

    fn exhausted(&self, subject_len: usize, start: usize) -> bool {
        let over_max = self.quantifier.max().is_some_and(|max| self.iteration > max);
        over_max || start + self.iteration >= subject_len
    }

    fn check(
        &mut self,
        atom: Atom,
        tail: View<'_>,
        subject: &[char],
        start: usize,
        budget: &mut Budget,
    ) -> Result<Trial, MatchError> {
        // Counts below the minimum only have to see the atom.
        if self.iteration < self.quantifier.min() {
            let present = subject.get(start + self.iteration).is_some_and(|&ch| atom.matches(ch));
            self.iteration += 1;
            return Ok(if present { Trial::Ongoing } else { Trial::Failed });
        }
        if self.exhausted(subject.len(), start) {
            return Ok(Trial::Failed);
        }

        let count = self.iteration;
        let offset = start + count;
        let tail_matched = budget.nested(|budget| matcher::scan(tail, &subject[offset..], budget))?;
        self.iteration += 1;

        if count == 0 {
            return Ok(if tail_matched { Trial::Matched } else { Trial::Ongoing });
        }
        let atom_matched = atom.matches(subject[offset - 1]);
        Ok(match (atom_matched, tail_matched) {
            (true, true) => Trial::Matched,
            (true, false) => Trial::Ongoing,
            (false, _) => Trial::Failed,
        })
    }
}

/// Decide whether `atom` repeated as allowed by `quantifier` from `start`,
/// followed by `tail` matching right after the repetitions, matches `subject`.
///
/// The smallest repetition count for which the tail matches wins. A quantified
/// atom that ends an end-anchored pattern is never resolved.
pub(crate) fn resolve(
    atom: Atom,
    quantifier: Quantifier,
    tail: View<'_>,
    subject: &[char],
    start: usize,
    budget: &mut Budget,
) -> Result<bool, MatchError> {
    if tail.end_anchored && tail.tokens.is_empty() {
        log::debug!("refusing to resolve {:?}{} at the end of an end-anchored pattern", atom, quantifier.symbol());
        return Ok(false);
    }

    let mut trial = RepetitionTrial::new(quantifier);
    loop {
        match trial.check(atom, tail, subject, start, budget)? {
            Trial::Ongoing => continue,
            Trial::Matched => return Ok(true),
            Trial::Failed => return Ok(false),
        }
    }
}

#[cfg(test)]
mod tests;
