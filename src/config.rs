use std::env;

use crate::error::{ConfigError, MatchError};

pub const MAX_SCANS_VAR: &str = "REGEX_ENGINE_MAX_SCANS";
pub const MAX_DEPTH_VAR: &str = "REGEX_ENGINE_MAX_DEPTH";
pub const MAX_STEPS_VAR: &str = "REGEX_ENGINE_MAX_STEPS";

/// Resource limits applied to a single match call.
///
/// Every scan (the top-level one and each nested tail scan started by a
/// quantifier) counts against `max_scans`, and every subject character a
/// scan looks at counts against `max_steps`. `max_depth` bounds how many tail
/// scans may be nested inside each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_scans: usize,
    pub max_depth: usize,
    pub max_steps: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_scans: 1_000_000,
            max_depth: 256,
            max_steps: 10_000_000,
        }
    }
}

impl Limits {
    pub fn with_max_scans(self, max_scans: usize) -> Self {
        Self { max_scans, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Loads limits from `REGEX_ENGINE_MAX_SCANS`, `REGEX_ENGINE_MAX_DEPTH` and
    /// `REGEX_ENGINE_MAX_STEPS`, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            max_scans: parse_limit(MAX_SCANS_VAR, lookup(MAX_SCANS_VAR))?.unwrap_or(defaults.max_scans),
            max_depth: parse_limit(MAX_DEPTH_VAR, lookup(MAX_DEPTH_VAR))?.unwrap_or(defaults.max_depth),
            max_steps: parse_limit(MAX_STEPS_VAR, lookup(MAX_STEPS_VAR))?.unwrap_or(defaults.max_steps),
        })
    }
}

fn parse_limit(name: &'static str, value: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let limit = value
        .trim()
        .parse::<usize>()
        .map_err(|source| ConfigError::InvalidLimit { name, value: value.clone(), source })?;
    if limit == 0 {
        return Err(ConfigError::ZeroLimit { name });
    }
    Ok(Some(limit))
}

/// Per-call accounting of [`Limits`].
#[derive(Debug)]
pub(crate) struct Budget {
    limits: Limits,
    scans: usize,
    steps: usize,
    depth: usize,
}

impl Budget {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            scans: 0,
            steps: 0,
            depth: 0,
        }
    }

    /// Charges one scan.
    pub fn charge(&mut self) -> Result<(), MatchError> {
        if self.scans >= self.limits.max_scans {
            return Err(MatchError::ScanBudgetExhausted {
                limit: self.limits.max_scans,
            });
        }
        self.scans += 1;
        Ok(())
    }

    /// Charges one subject character looked at by a scan.
    pub fn step(&mut self) -> Result<(), MatchError> {
        if self.steps >= self.limits.max_steps {
            return Err(MatchError::StepBudgetExhausted {
                limit: self.limits.max_steps,
            });
        }
        self.steps += 1;
        Ok(())
    }

    /// Runs `f` one nesting level deeper.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, MatchError>) -> Result<T, MatchError> {
        if self.depth >= self.limits.max_depth {
            return Err(MatchError::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn scans(&self) -> usize {
        self.scans
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}
