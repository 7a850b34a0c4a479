use thiserror::Error;

/// PatternError describes why a pattern can never match.
///
/// Compilation itself never fails; this is only reported by
/// [`Regex::validate`](crate::Regex::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("unescaped anchor {anchor:?} at position {position} is neither the first nor the last character")]
    MisplacedAnchor { anchor: char, position: usize },
    #[error("quantifier {quantifier:?} at position {position} has no preceding atom")]
    DanglingQuantifier { quantifier: char, position: usize },
    #[error("quantified atom cannot be the last token of an end-anchored pattern")]
    QuantifiedEndAnchor,
}

/// MatchError is returned when a match is abandoned because it ran out of budget.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("scan budget of {limit} exhausted")]
    ScanBudgetExhausted { limit: usize },
    #[error("step budget of {limit} exhausted")]
    StepBudgetExhausted { limit: usize },
    #[error("tail nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },
}

/// ConfigError is an error which may occur when loading limits from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {source}")]
    InvalidLimit {
        name: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("{name} must be greater than zero")]
    ZeroLimit { name: &'static str },
}

/// InputError is an error which may occur while reading `pattern|subject` lines.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input")]
    Read(#[source] std::io::Error),
    #[error("failed to write output")]
    Write(#[source] std::io::Error),
    #[error("line {line} is not valid utf-8")]
    NotUtf8 { line: usize },
    #[error("line {line}: expected 'pattern|subject', got {text:?}")]
    MissingSeparator { line: usize, text: String },
}
