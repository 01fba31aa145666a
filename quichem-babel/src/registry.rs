//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{BackendFormat, QuichemFormat, ReprFormat, TreevizFormat};
use quichem_core::Ast;
use std::collections::HashMap;

/// Registry of output notations
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let ast = registry.parse("so4.2-", "quichem")?;
/// assert_eq!(registry.serialize(&ast, "mhchem")?, "\\ce{SO4^2-}");
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("water.html"), Some("html".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("water.tex"), Some("latex".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("water.docx"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        // Sorted, so that the answer does not depend on hash order
        self.list_formats()
            .into_iter()
            .find(|name| {
                self.formats[name]
                    .file_extensions()
                    .contains(&extension)
            })
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Ast, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        tracing::debug!(format, source, "parsing");
        fmt.parse(source)
    }

    /// Serialize an AST using the specified format
    pub fn serialize(&self, ast: &Ast, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(ast, format, &HashMap::new())
    }

    /// Serialize an AST using the specified format and options
    pub fn serialize_with_options(
        &self,
        ast: &Ast,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        tracing::debug!(format, items = ast.items().count(), "serializing");
        fmt.serialize_with_options(ast, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for backend in BackendFormat::all() {
            registry.register(backend);
        }

        // The shorthand and the tree views
        registry.register(QuichemFormat);
        registry.register(ReprFormat);
        registry.register(TreevizFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use quichem_core::{Counter, Segment};

    /// Lists the element symbols of each item, items separated by `|`.
    struct SymbolsFormat;

    fn symbols(counters: &[Counter], out: &mut Vec<String>) {
        for counter in counters {
            match &counter.segment {
                Segment::Element(element) => out.push(element.symbol.clone()),
                Segment::Group(group) => symbols(&group.counters, out),
            }
        }
    }

    impl Format for SymbolsFormat {
        fn name(&self) -> &str {
            "symbols"
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, source: &str) -> Result<Ast, FormatError> {
            Ok(quichem_core::parse(source)?)
        }
        fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
            let items: Vec<String> = ast
                .items()
                .map(|item| {
                    let mut out = Vec::new();
                    symbols(&item.compound.counters, &mut out);
                    out.join(" ")
                })
                .collect();
            Ok(items.join(" | "))
        }
    }

    fn symbols_registry() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(SymbolsFormat);
        registry
    }

    #[test]
    fn test_registry_starts_empty() {
        assert!(FormatRegistry::new().list_formats().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let registry = symbols_registry();
        assert!(registry.has("symbols"));
        assert_eq!(registry.get("symbols").unwrap().name(), "symbols");
        assert_eq!(registry.list_formats(), vec!["symbols"]);
    }

    #[test]
    fn test_registry_get_unknown_format() {
        match symbols_registry().get("docx") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "docx"),
            _ => panic!("expected FormatNotFound"),
        }
    }

    #[test]
    fn test_registry_parse_and_serialize() {
        let registry = symbols_registry();
        let ast = registry.parse("cocl2/6h2o", "symbols").unwrap();
        assert_eq!(ast.items().count(), 2);
        assert_eq!(registry.serialize(&ast, "symbols").unwrap(), "co cl | h o");

        let ast = registry.parse("ca'oh'2", "symbols").unwrap();
        assert_eq!(registry.serialize(&ast, "symbols").unwrap(), "ca o h");
    }

    #[test]
    fn test_registry_parse_reports_syntax_errors() {
        let result = symbols_registry().parse("h2ox", "symbols");
        assert!(matches!(result, Err(FormatError::ParseError(_))));
    }

    #[test]
    fn test_registry_parse_unsupported() {
        let result = FormatRegistry::with_defaults().parse("h2o", "html");
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_registry_rejects_options_a_format_does_not_take() {
        let registry = symbols_registry();
        let ast = registry.parse("h2o", "symbols").unwrap();

        let mut options = HashMap::new();
        options.insert("enclose".to_string(), "false".to_string());
        let result = registry.serialize_with_options(&ast, "symbols", &options);
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = symbols_registry();
        registry.register(SymbolsFormat);
        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["html", "latex", "mhchem", "plain", "quichem", "repr", "rst", "treeviz"]
        );

        let ast = registry.parse("h2o", "quichem").unwrap();
        assert_eq!(registry.serialize(&ast, "html").unwrap(), "H<sub>2</sub>O");
    }

    #[test]
    fn test_detect_format_from_filename() {
        let registry = FormatRegistry::with_defaults();

        for (filename, format) in [
            ("water.html", "html"),
            ("/path/to/water.htm", "html"),
            ("water.tex", "latex"),
            ("water.rst", "rst"),
            ("water.txt", "plain"),
            ("water.tree", "treeviz"),
        ] {
            assert_eq!(
                registry.detect_format_from_filename(filename),
                Some(format.to_string()),
                "{filename}"
            );
        }

        assert_eq!(registry.detect_format_from_filename("water.docx"), None);
        assert_eq!(registry.detect_format_from_filename("water"), None);
    }
}
