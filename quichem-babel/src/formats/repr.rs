//! Bracketed debug notation of the tree, one line per expression.
//!
//!     h2o   →   [Item[Coefficient[1, 1], Compound[[Counter[Element[h], 2], Counter[Element[o], 1]]], Charge[0, ], State[]]]

use crate::error::FormatError;
use crate::format::Format;
use quichem_core::Ast;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReprFormat;

impl Format for ReprFormat {
    fn name(&self) -> &str {
        "repr"
    }

    fn description(&self) -> &str {
        "Bracketed representation of the parse tree"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        Ok(ast.to_string())
    }
}
