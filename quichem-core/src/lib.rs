//! Parser for quichem chemical shorthand
//!
//!     quichem is a terse, keyboard-friendly way of typing chemical formulas and equations:
//!     lowercase letters, digits and a handful of punctuation characters that never need a
//!     shift key. `2h2=o2-2h2o` is the combustion of hydrogen, `cuso4/5h2o` a hydrate,
//!     `so4.2-aq` an aqueous sulfate ion.
//!
//!     This crate turns such a string into an [`Ast`]. It does no rendering: that is the job of
//!     quichem-babel, which walks the tree into HTML, LaTeX, plain Unicode and friends.
//!
//! Structure
//!
//!     .
//!     ├── symbols.rs      # element and state tables, punctuation glyphs
//!     ├── ast.rs          # the parsed tree
//!     ├── grammar.rs      # backtracking parser, see there for the precedence rules
//!     └── error.rs        # SyntaxError
//!
//! Usage
//!
//!     let ast = quichem_core::parse("2h2=o2-2h2o")?;
//!     assert_eq!(ast.items().count(), 3);
//!
//!     Parsing is pure and deterministic: the same input always yields the same tree, and a
//!     failed parse never yields a partial one.

pub mod ast;
pub mod error;
pub mod grammar;
pub mod symbols;

pub use ast::{
    Ast, Charge, Coefficient, Compound, Counter, Element, Group, Item, Node, Segment, Separator,
    SeparatorKind, Sign, State,
};
pub use error::SyntaxError;
pub use grammar::parse;
