//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading shorthand into an [`Ast`] and for
//! rendering an [`Ast`] into some output notation.

use crate::error::FormatError;
use quichem_core::{Ast, SyntaxError};
use std::collections::HashMap;

/// Trait for output (and input) notations
///
/// Most formats only serialize: they render an already parsed [`Ast`]. The shorthand itself is
/// also a format, the only one that parses.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
///         Ok(format!("{} items", ast.items().count()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "mhchem")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Ast)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Ast → output)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into an Ast
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Ast, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Render an Ast
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _ast: &Ast) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Render an Ast, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        ast: &Ast,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(ast)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }

    /// Output to emit in place of a rendering when the shorthand failed to parse.
    ///
    /// Returns `None` for formats that report failures as errors. Formats consumed by a
    /// document processor (the LaTeX package reads whatever the tool prints) return markup
    /// that reports the error in the processor's own terms.
    fn format_error(&self, _source: &str, _error: &SyntaxError) -> Option<String> {
        None
    }
}

/// Reads a boolean option value. A bare flag (empty value) is `true`.
///
/// Returns `None` for anything that is not a boolean spelling.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" | "" => Some(true),
        "false" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Reads a boolean extra parameter through [`parse_bool`].
pub(crate) fn bool_option(
    format: &str,
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<bool>, FormatError> {
    match options.get(key) {
        None => Ok(None),
        Some(value) => parse_bool(value).map(Some).ok_or_else(|| {
            FormatError::NotSupported(format!(
                "Format '{format}' expects a boolean for '{key}', got '{value}'"
            ))
        }),
    }
}

/// Rejects every option key not in `known`.
pub(crate) fn check_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<_> = options
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .cloned()
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support extra parameters: {}",
        unknown.join(", ")
    )))
}
