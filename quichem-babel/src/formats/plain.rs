//! Plain Unicode backend
//!
//! Uses the Unicode sub- and superscript digits, so the result survives being pasted anywhere
//! that takes text. There is no markup, hence nothing to merge.

use crate::compiler::Renderer;
use crate::fragment::{Backend, Fragment, Template, SUBSCRIPT_DIGITS, SUPERSCRIPT_DIGITS};
use once_cell::sync::Lazy;

pub static BACKEND: Backend = Backend {
    name: "plain",
    description: "Plain text with Unicode subscripts and superscripts",
    extensions: &["txt"],
    separator: Fragment {
        literals: &[
            ("=", " + "),
            ("-", " \u{27f6} "),
            ("/", "\u{b7}"),
            ("=,", " = "),
            ("-/", " \u{21c4} "),
            ("=/", " \u{21cc} "),
        ],
        ..Fragment::PLAIN
    },
    coefficient: Fragment {
        wrap: &[
            Template(&["", "\u{2006}"]),
            Template(&["", "\u{2044}", "\u{2006}"]),
        ],
        ..Fragment::PLAIN
    },
    charge: Fragment {
        digits: &SUPERSCRIPT_DIGITS,
        literals: &[("=", "\u{207a}"), ("-", "\u{207b}")],
        wrap: &[],
    },
    state: Fragment {
        literals: &[("l", "\u{2113}")],
        wrap: &[Template(&["(", ")"])],
        ..Fragment::PLAIN
    },
    element: Fragment::PLAIN,
    counter: Fragment {
        digits: &SUBSCRIPT_DIGITS,
        literals: &[],
        wrap: &[],
    },
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
    enclose: Template::IDENTITY,
    error: None,
};

pub static RENDERER: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(&BACKEND).expect("plain text has no merge rules"));
