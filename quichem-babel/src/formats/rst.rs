//! reStructuredText backend
//!
//! Sub- and superscripts are the `:sub:` and `:sup:` roles. A role only parses when it is
//! separated from the surrounding text, which inside a word means an escaped space (`\ `)
//! on both sides. Those escapes pile up between adjacent roles and at the end of the output,
//! so the tidy step collapses doubled escapes and trims the trailing one.
//!
//!     h2o   →   H\ :sub:`2`\ O

use crate::compiler::Renderer;
use crate::fragment::{Backend, Fragment, MergeRule, Template};
use once_cell::sync::Lazy;

pub static BACKEND: Backend = Backend {
    name: "rst",
    description: "reStructuredText with :sub: and :sup: roles",
    extensions: &["rst"],
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
            Template(&[
                "\\ :sup:`",
                "`\\ \u{2044}\\ :sub:`",
                "`\\ \u{2006}",
            ]),
        ],
        ..Fragment::PLAIN
    },
    charge: Fragment {
        literals: &[("=", "+"), ("-", "\u{2212}")],
        wrap: &[Template(&["\\ :sup:`", "`\\ "])],
        ..Fragment::PLAIN
    },
    state: Fragment {
        literals: &[("l", "\u{2113}")],
        wrap: &[Template(&["\\ :sub:`(", ")`\\ "])],
        ..Fragment::PLAIN
    },
    element: Fragment::PLAIN,
    counter: Fragment {
        wrap: &[Template(&["\\ :sub:`", "`\\ "])],
        ..Fragment::PLAIN
    },
    open_group: Fragment {
        literals: &[("'", "(")],
        ..Fragment::PLAIN
    },
    close_group: Fragment {
        literals: &[("'", ")")],
        ..Fragment::PLAIN
    },
    merge: &[
        MergeRule {
            open: "\\ :sub:`",
            close: "`\\ ",
            content: "[^`]",
        },
        MergeRule {
            open: "\\ :sup:`",
            close: "`\\ ",
            content: "[^`]",
        },
    ],
    tidy: Some(tidy),
    enclose: Template::IDENTITY,
    error: None,
};

pub static RENDERER: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(&BACKEND).expect("rst merge rules are valid regexes"));

/// Halves doubled escaped spaces and drops trailing escapes and spaces.
fn tidy(text: String) -> String {
    text.replace("\\ \\ ", "\\ ")
        .trim_end_matches(|c: char| c == '\\' || c == ' ')
        .to_string()
}
