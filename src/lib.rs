pub mod ast;
pub mod config;
pub mod error;
pub mod input;
pub mod matcher;
pub mod parser;
mod resolver;

pub use config::Limits;
pub use error::{ConfigError, InputError, MatchError, PatternError};
pub use matcher::Regex;

pub fn is_match(input: &str, pattern: &str) -> bool {
    Regex::new(pattern).is_match(input)
}
