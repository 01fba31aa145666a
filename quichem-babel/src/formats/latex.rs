//! LaTeX math backend
//!
//! Plain math mode, no chemistry package needed: element symbols go in `\mathrm`, counts and
//! states are subscripts, charges superscripts. Every sub- and superscript is followed by an
//! empty group `{}` so that a following script attaches to it rather than to the previous
//! symbol. The output is enclosed in `\(`…`\)`.
//!
//!     so4.2-   →   \(\mathrm{SO}_{4}{}^{2-}{}\)

use crate::compiler::Renderer;
use crate::fragment::{Backend, Fragment, MergeRule, Template};
use once_cell::sync::Lazy;

/// Reported through the LaTeX package when the shorthand does not parse.
pub(crate) const PACKAGE_ERROR: Template = Template(&[
    "\\PackageError{quichem}{ \\protect ",
    " }{I don't know what to do with \\protect ",
    "}",
]);

pub static BACKEND: Backend = Backend {
    name: "latex",
    description: "LaTeX math mode",
    extensions: &["tex"],
    separator: Fragment {
        literals: &[
            ("=", "+"),
            ("-", "\\longrightarrow"),
            ("/", "\\cdot{}"),
            ("=,", "="),
            ("-/", "\\rightleftarrows"),
            ("=/", "\\rightleftharpoons"),
        ],
        ..Fragment::PLAIN
    },
    coefficient: Fragment {
        wrap: &[
            Template(&["", "\\,"]),
            Template(&["\\frac{", "}{", "}\\,"]),
        ],
        ..Fragment::PLAIN
    },
    charge: Fragment {
        literals: &[("=", "+"), ("-", "-")],
        wrap: &[Template(&["^{", "}{}"])],
        ..Fragment::PLAIN
    },
    state: Fragment {
        literals: &[("l", "\\ell")],
        wrap: &[Template(&["_{\\mathrm{(", ")}}{}"])],
        ..Fragment::PLAIN
    },
    element: Fragment {
        wrap: &[Template(&["\\mathrm{", "}"])],
        ..Fragment::PLAIN
    },
    counter: Fragment {
        wrap: &[Template(&["_{", "}{}"])],
        ..Fragment::PLAIN
    },
    open_group: Fragment {
        literals: &[("'", "\\left(")],
        ..Fragment::PLAIN
    },
    close_group: Fragment {
        literals: &[("'", "\\right)")],
        ..Fragment::PLAIN
    },
    merge: &[
        MergeRule {
            open: "\\mathrm{",
            close: "}",
            content: "[^{}]",
        },
        MergeRule {
            open: "_{",
            close: "}{}",
            content: "[^{}]",
        },
        MergeRule {
            open: "^{",
            close: "}{}",
            content: "[^{}]",
        },
    ],
    tidy: None,
    enclose: Template(&["\\(", "\\)"]),
    error: Some(PACKAGE_ERROR),
};

pub static RENDERER: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(&BACKEND).expect("latex merge rules are valid regexes"));
