//! Format implementations
//!
//! The five display backends (`html`, `plain`, `latex`, `mhchem`, `rst`) are pure tables and
//! share one [`Format`] implementation, [`BackendFormat`]. The remaining formats are code:
//! `quichem` reads and writes the shorthand itself, `repr` and `treeviz` show the tree.

pub mod html;
pub mod latex;
pub mod mhchem;
pub mod plain;
pub mod quichem;
pub mod repr;
pub mod rst;
pub mod treeviz;

pub use quichem::QuichemFormat;
pub use repr::ReprFormat;
pub use treeviz::{TreevizFormat, TreevizOptions};

use crate::compiler::Renderer;
use crate::error::FormatError;
use crate::format::{bool_option, check_options, Format};
use quichem_core::{Ast, SyntaxError};
use std::collections::HashMap;

/// A display backend exposed as a [`Format`].
///
/// # Parameters
///
/// - `"enclose"`: `"false"` leaves out the backend's enclosure (`\(`…`\)`, `\ce{`…`}`), for
///   output pasted into an existing math environment. Defaults to `"true"`.
#[derive(Debug, Clone, Copy)]
pub struct BackendFormat {
    renderer: &'static Renderer,
}

impl BackendFormat {
    pub fn new(renderer: &'static Renderer) -> Self {
        Self { renderer }
    }

    pub fn html() -> Self {
        Self::new(&html::RENDERER)
    }

    pub fn plain() -> Self {
        Self::new(&plain::RENDERER)
    }

    pub fn latex() -> Self {
        Self::new(&latex::RENDERER)
    }

    pub fn mhchem() -> Self {
        Self::new(&mhchem::RENDERER)
    }

    pub fn rst() -> Self {
        Self::new(&rst::RENDERER)
    }

    /// Every display backend.
    pub fn all() -> [Self; 5] {
        [
            Self::html(),
            Self::plain(),
            Self::latex(),
            Self::mhchem(),
            Self::rst(),
        ]
    }

    pub fn renderer(&self) -> &'static Renderer {
        self.renderer
    }
}

impl Format for BackendFormat {
    fn name(&self) -> &str {
        self.renderer.backend().name
    }

    fn description(&self) -> &str {
        self.renderer.backend().description
    }

    fn file_extensions(&self) -> &[&str] {
        self.renderer.backend().extensions
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        Ok(self.renderer.render(ast))
    }

    fn serialize_with_options(
        &self,
        ast: &Ast,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        check_options(self.name(), options, &["enclose"])?;
        if bool_option(self.name(), options, "enclose")?.unwrap_or(true) {
            Ok(self.renderer.render(ast))
        } else {
            Ok(self.renderer.render_bare(ast))
        }
    }

    fn format_error(&self, source: &str, error: &SyntaxError) -> Option<String> {
        self.renderer
            .backend()
            .error
            .map(|template| template.fill(&[error.to_string(), source.to_string()]))
    }
}
