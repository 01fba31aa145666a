//! mhchem backend
//!
//! Source for the `\ce{}` macro of the LaTeX `mhchem` package, which does its own typesetting:
//! counts are bare digits, charges a caret, and the arrows are ASCII art. This is the format
//! the quichem LaTeX package calls the command-line tool for.
//!
//!     h==oh-   →   \ce{H^+ + OH^-}

use crate::compiler::Renderer;
use crate::formats::latex::PACKAGE_ERROR;
use crate::fragment::{Backend, Fragment, Template};
use once_cell::sync::Lazy;

pub static BACKEND: Backend = Backend {
    name: "mhchem",
    description: "LaTeX mhchem \\ce{} source",
    extensions: &[],
    separator: Fragment {
        literals: &[
            ("=", " + "),
            ("-", " -> "),
            ("/", "*"),
            ("=,", " = "),
            ("-/", " <--> "),
            ("=/", " <=> "),
        ],
        ..Fragment::PLAIN
    },
    coefficient: Fragment {
        wrap: &[Template(&["", ""]), Template(&["", "/", ""])],
        ..Fragment::PLAIN
    },
    charge: Fragment {
        literals: &[("=", "+"), ("-", "-")],
        wrap: &[Template(&["^", ""])],
        ..Fragment::PLAIN
    },
    state: Fragment {
        literals: &[("l", "$\\ell$")],
        wrap: &[Template(&[" _{(", ")}"])],
        ..Fragment::PLAIN
    },
    element: Fragment::PLAIN,
    counter: Fragment::PLAIN,
    open_group: Fragment {
        literals: &[("'", "(")],
        ..Fragment::PLAIN
    },
    close_group: Fragment {
        literals: &[("'", ")")],
        ..Fragment::PLAIN
    },
    merge: &[],
    tidy: None,
    enclose: Template(&["\\ce{", "}"]),
    error: Some(PACKAGE_ERROR),
};

pub static RENDERER: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(&BACKEND).expect("mhchem has no merge rules"));
