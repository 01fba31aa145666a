//! Compiler framework
//!
//!     One traversal serves every backend. Each node is broken into *parts* in a backend
//!     independent way, and the backend's [`Fragment`] for that node kind decides how the parts
//!     are spelled and wrapped:
//!
//!         Separator     its literal                                   (1 part)
//!         Coefficient   nothing for 1/1, the numerator for n/1,       (0, 1 or 2 parts)
//!                       numerator and denominator otherwise
//!         Element       symbol with an upper-case first letter        (1 part)
//!         Counter       nothing for a count of 1, else the digits     (0 or 1 part)
//!         Group         open literal, inner counters, close literal
//!         Charge        nothing when uncharged, else digits + sign    (0 or 1 part)
//!                       (digits left out for a magnitude of 1)
//!         State         nothing when absent, else the abbreviation    (0 or 1 part)
//!
//!     An item renders as coefficient, counters, charge, state. Nothing is inserted between
//!     renderings: all spacing comes from the tables.
//!
//!     [`compile`] is the bare traversal. [`Renderer`] adds the post-processing a backend asks
//!     for (merge pass, tidy step, enclosure) and is what formats use.

use crate::common::merge::{self, SpanMerger};
use crate::fragment::{Backend, Fragment};
use quichem_core::{Ast, Charge, Coefficient, Counter, Item, Node, Segment, Separator, State};

/// Renders `ast` with `backend`'s fragments, without any post-processing.
pub fn compile(ast: &Ast, backend: &Backend) -> String {
    let mut out = String::new();
    for node in ast {
        match node {
            Node::Item(item) => compile_item(item, backend, &mut out),
            Node::Separator(separator) => {
                out.push_str(&backend.separator.render(&separator_parts(separator, backend)))
            }
        }
    }
    out
}

fn compile_item(item: &Item, backend: &Backend, out: &mut String) {
    out.push_str(
        &backend
            .coefficient
            .render(&coefficient_parts(&item.coefficient)),
    );
    for counter in &item.compound.counters {
        compile_counter(counter, backend, out);
    }
    out.push_str(&backend.charge.render(&charge_parts(&item.charge, &backend.charge)));
    out.push_str(&backend.state.render(&state_parts(&item.state, &backend.state)));
}

fn compile_counter(counter: &Counter, backend: &Backend, out: &mut String) {
    match &counter.segment {
        Segment::Element(element) => {
            out.push_str(&backend.element.render(&[title_case(&element.symbol)]));
        }
        Segment::Group(group) => {
            out.push_str(
                &backend
                    .open_group
                    .render(&[backend.open_group.literal("'").to_string()]),
            );
            for inner in &group.counters {
                compile_counter(inner, backend, out);
            }
            out.push_str(
                &backend
                    .close_group
                    .render(&[backend.close_group.literal("'").to_string()]),
            );
        }
    }
    out.push_str(&backend.counter.render(&count_parts(&counter.count, &backend.counter)));
}

fn separator_parts(separator: &Separator, backend: &Backend) -> Vec<String> {
    vec![backend.separator.literal(separator.kind.symbol()).to_string()]
}

fn coefficient_parts(coefficient: &Coefficient) -> Vec<String> {
    if coefficient.is_implicit() {
        Vec::new()
    } else if coefficient.is_fraction() {
        vec![coefficient.numerator.clone(), coefficient.denominator.clone()]
    } else {
        vec![coefficient.numerator.clone()]
    }
}

fn charge_parts(charge: &Charge, fragment: &Fragment) -> Vec<String> {
    if !charge.is_charged() {
        return Vec::new();
    }
    let magnitude = if charge.magnitude == "1" {
        String::new()
    } else {
        fragment.digits(&charge.magnitude)
    };
    let sign = charge.sign.map(|sign| fragment.literal(sign.symbol())).unwrap_or("");
    vec![magnitude + sign]
}

fn state_parts(state: &State, fragment: &Fragment) -> Vec<String> {
    if state.is_none() {
        return Vec::new();
    }
    vec![fragment.literal(&state.abbreviation).to_string()]
}

fn count_parts(count: &str, fragment: &Fragment) -> Vec<String> {
    if count == "1" {
        return Vec::new();
    }
    vec![fragment.digits(count)]
}

/// `cl` → `Cl`
pub(crate) fn title_case(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A backend together with its compiled merge rules.
#[derive(Debug, Clone)]
pub struct Renderer {
    backend: &'static Backend,
    mergers: Vec<SpanMerger>,
}

impl Renderer {
    /// Compiles the backend's merge rules.
    ///
    /// Backend tables are static, so a rule that fails to compile is a bug in the table.
    pub fn new(backend: &'static Backend) -> Result<Self, regex::Error> {
        Ok(Self {
            backend,
            mergers: merge::compile_rules(backend.merge)?,
        })
    }

    pub fn backend(&self) -> &'static Backend {
        self.backend
    }

    /// compile → merge → tidy → enclose
    pub fn render(&self, ast: &Ast) -> String {
        self.backend.enclose.fill(&[self.render_bare(ast)])
    }

    /// Like [`Renderer::render`], without the enclosure.
    pub fn render_bare(&self, ast: &Ast) -> String {
        let merged = merge::merge_all(&self.mergers, compile(ast, self.backend));
        match self.backend.tidy {
            Some(tidy) => tidy(merged),
            None => merged,
        }
    }
}
