//! Error type for shorthand parsing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyntaxError>;

/// The input could not be read as one shorthand expression.
///
/// `position` is the byte offset of the furthest point any alternative of
/// the grammar reached before giving up, which is where the input stops
/// making sense. `found` is the character at that offset, or `None` when
/// the input ended too early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected {} at position {position} in '{input}'", describe(.found))]
pub struct SyntaxError {
    pub position: usize,
    pub found: Option<char>,
    pub input: String,
}

impl SyntaxError {
    pub fn at(input: &str, position: usize) -> Self {
        let position = position.min(input.len());
        Self {
            position,
            found: input.get(position..).and_then(|rest| rest.chars().next()),
            input: input.to_string(),
        }
    }

    /// The part of the input that could not be consumed.
    pub fn remaining(&self) -> &str {
        self.input.get(self.position..).unwrap_or("")
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}
