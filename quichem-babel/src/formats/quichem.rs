//! The shorthand as a format
//!
//!     Parsing delegates to quichem-core. Serializing writes the canonical spelling of a tree,
//!     which spells out every choice the parser would otherwise have to guess:
//!
//!         - counters are separated by `.`, so element segmentation is explicit
//!         - a charge is preceded by `.`, so its magnitude never runs into a count
//!         - a state is preceded by `;`
//!         - a separator is preceded by `;`, so it is never read as a charge
//!         - groups always carry their count, since the grammar requires one
//!
//!     `parse(write(ast)) == ast` for every tree the parser produces.
//!
//!         2cl-aq=2ag=aq-2agcl;s   →   2cl.-;aq;=2ag.=;aq;-2ag.cl;s

use crate::error::FormatError;
use crate::format::Format;
use quichem_core::symbols::{DOT, QUOTE, SEMICOLON, SLASH};
use quichem_core::{Ast, Coefficient, Counter, Item, Node, Segment};

#[derive(Debug, Default, Clone, Copy)]
pub struct QuichemFormat;

impl Format for QuichemFormat {
    fn name(&self) -> &str {
        "quichem"
    }

    fn description(&self) -> &str {
        "quichem chemical shorthand"
    }

    fn file_extensions(&self) -> &[&str] {
        &["qc", "quichem"]
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
        Ok(write(ast))
    }
}

/// Writes the canonical shorthand for `ast`.
pub fn write(ast: &Ast) -> String {
    let mut out = String::new();
    for node in ast {
        match node {
            Node::Item(item) => write_item(item, &mut out),
            Node::Separator(separator) => {
                out.push(SEMICOLON);
                out.push_str(separator.kind.symbol());
            }
        }
    }
    out
}

fn write_item(item: &Item, out: &mut String) {
    write_coefficient(&item.coefficient, out);
    write_counters(&item.compound.counters, out);
    if let Some(sign) = item.charge.sign {
        out.push(DOT);
        if item.charge.magnitude != "1" {
            out.push_str(&item.charge.magnitude);
        }
        out.push_str(sign.symbol());
    }
    if !item.state.is_none() {
        out.push(SEMICOLON);
        out.push_str(&item.state.abbreviation);
    }
}

fn write_coefficient(coefficient: &Coefficient, out: &mut String) {
    if coefficient.is_implicit() {
        return;
    }
    out.push_str(&coefficient.numerator);
    if coefficient.is_fraction() {
        out.push(SLASH);
        out.push_str(&coefficient.denominator);
    }
}

fn write_counters(counters: &[Counter], out: &mut String) {
    for (i, counter) in counters.iter().enumerate() {
        if i > 0 {
            out.push(DOT);
        }
        match &counter.segment {
            Segment::Element(element) => {
                out.push_str(&element.symbol);
                if counter.count != "1" {
                    out.push_str(&counter.count);
                }
            }
            Segment::Group(group) => {
                out.push(QUOTE);
                write_counters(&group.counters, out);
                out.push(QUOTE);
                out.push_str(&counter.count);
            }
        }
    }
}
