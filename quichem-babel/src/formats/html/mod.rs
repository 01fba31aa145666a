//! HTML backend
//!
//! Inline markup meant to be dropped into running text: subscripts and superscripts use
//! `<sub>`/`<sup>`, every other glyph is an entity so the output is pure ASCII.
//!
//!     cuso4/5h2o   →   CuSO<sub>4</sub>&#x2022;5&#x2006;H<sub>2</sub>O

use crate::compiler::Renderer;
use crate::fragment::{Backend, Fragment, MergeRule, Template};
use once_cell::sync::Lazy;

pub static BACKEND: Backend = Backend {
    name: "html",
    description: "Inline HTML markup",
    extensions: &["html", "htm"],
    separator: Fragment {
        literals: &[
            ("=", "&nbsp;+&nbsp;"),
            ("-", "&nbsp;&#x27f6;&nbsp;"),
            ("/", "&#x2022;"),
            ("=,", "&nbsp;=&nbsp;"),
            ("-/", "&nbsp;&#x21c4;&nbsp;"),
            ("=/", "&nbsp;&#x21cc;&nbsp;"),
        ],
        ..Fragment::PLAIN
    },
    coefficient: Fragment {
        wrap: &[
            Template(&["", "&#x2006;"]),
            Template(&["<sup>", "</sup>&frasl;<sub>", "</sub>&#x2006;"]),
        ],
        ..Fragment::PLAIN
    },
    charge: Fragment {
        literals: &[("=", "+"), ("-", "&#x2212;")],
        wrap: &[Template(&["<sup>", "</sup>"])],
        ..Fragment::PLAIN
    },
    state: Fragment {
        literals: &[("l", "&#x2113;")],
        wrap: &[Template(&["<sub>(", ")</sub>"])],
        ..Fragment::PLAIN
    },
    element: Fragment::PLAIN,
    counter: Fragment {
        wrap: &[Template(&["<sub>", "</sub>"])],
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
            open: "<sub>",
            close: "</sub>",
            content: "[^<]",
        },
        MergeRule {
            open: "<sup>",
            close: "</sup>",
            content: "[^<]",
        },
    ],
    tidy: None,
    enclose: Template::IDENTITY,
    error: None,
};

pub static RENDERER: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(&BACKEND).expect("html merge rules are valid regexes"));
