//! Byte-exact output of the display backends.

mod html;
mod latex;
mod mhchem;
mod plain;
mod rst;

use quichem_babel::FormatRegistry;

/// Parses `input` and renders it with `format`, enclosure included.
pub fn render(format: &str, input: &str) -> String {
    let ast = quichem_core::parse(input).unwrap();
    FormatRegistry::default().serialize(&ast, format).unwrap()
}
