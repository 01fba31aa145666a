//! Backend tables
//!
//!     A backend is described entirely by data: for each kind of node the compiler emits, a
//!     [`Fragment`] says how the node's parts are spelled, and a handful of post-processing rules
//!     say how the concatenated result is cleaned up. Adding an output notation means writing one
//!     `static` [`Backend`], no code.
//!
//!     Node kinds produce zero, one or two *parts* (see compiler.rs). A fragment turns those
//!     parts into text:
//!
//!         0 parts      → ""
//!         no wrap      → parts concatenated
//!         n parts      → wrap[n - 1] filled with the parts (concatenated if there is no such template)
//!
//!     Symbols such as `=` or `l` are looked up in the fragment's literal table and fall back to
//!     the symbol itself. Digit strings are mapped glyph by glyph through the digit table.

/// A wrap template: literal text with one slot between consecutive pieces.
///
/// `Template(&["<sub>", "</sub>"])` has one slot, `Template(&["", "/", ""])` has two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(pub &'static [&'static str]);

impl Template {
    /// The template that returns its single part unchanged.
    pub const IDENTITY: Template = Template(&["", ""]);

    /// Interleaves the pieces with `parts`.
    ///
    /// Surplus parts are appended, missing parts leave their slot empty.
    pub fn fill<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let mut out = String::new();
        let mut parts = parts.iter();
        for (i, piece) in self.0.iter().enumerate() {
            if i > 0 {
                if let Some(part) = parts.next() {
                    out.push_str(part.as_ref());
                }
            }
            out.push_str(piece);
        }
        for part in parts {
            out.push_str(part.as_ref());
        }
        out
    }
}

pub const ASCII_DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub const SUPERSCRIPT_DIGITS: [&str; 10] = [
    "\u{2070}", "\u{b9}", "\u{b2}", "\u{b3}", "\u{2074}", "\u{2075}", "\u{2076}", "\u{2077}",
    "\u{2078}", "\u{2079}",
];

pub const SUBSCRIPT_DIGITS: [&str; 10] = [
    "\u{2080}", "\u{2081}", "\u{2082}", "\u{2083}", "\u{2084}", "\u{2085}", "\u{2086}", "\u{2087}",
    "\u{2088}", "\u{2089}",
];

/// How one kind of node is spelled by a backend.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub digits: &'static [&'static str; 10],
    pub literals: &'static [(&'static str, &'static str)],
    pub wrap: &'static [Template],
}

impl Fragment {
    /// No literals, ASCII digits, parts concatenated.
    pub const PLAIN: Fragment = Fragment {
        digits: &ASCII_DIGITS,
        literals: &[],
        wrap: &[],
    };

    /// The backend's spelling of `symbol`, or `symbol` itself if it has none.
    pub fn literal<'a>(&self, symbol: &'a str) -> &'a str {
        self.literals
            .iter()
            .find(|(key, _)| *key == symbol)
            .map(|(_, value)| *value)
            .unwrap_or(symbol)
    }

    /// Maps every ASCII digit of `number` through the digit table.
    pub fn digits(&self, number: &str) -> String {
        number
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => self.digits[d as usize].to_string(),
                None => c.to_string(),
            })
            .collect()
    }

    /// Wraps the parts a node produced.
    pub fn render(&self, parts: &[String]) -> String {
        if parts.is_empty() {
            return String::new();
        }
        match self.wrap.get(parts.len() - 1) {
            Some(template) => template.fill(parts),
            None => parts.concat(),
        }
    }
}

/// Adjacent spans of one kind that the merge pass joins into one.
///
/// A span is `open`, then one or more characters of the `content` class, then `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRule {
    pub open: &'static str,
    pub close: &'static str,
    /// A regex character class, e.g. `[^<]`.
    pub content: &'static str,
}

/// Every table that makes up one output notation.
#[derive(Debug, Clone, Copy)]
pub struct Backend {
    pub name: &'static str,
    pub description: &'static str,
    pub extensions: &'static [&'static str],

    pub separator: Fragment,
    pub coefficient: Fragment,
    pub charge: Fragment,
    pub state: Fragment,
    pub element: Fragment,
    pub counter: Fragment,
    pub open_group: Fragment,
    pub close_group: Fragment,

    pub merge: &'static [MergeRule],
    /// Last textual clean-up, applied after merging.
    pub tidy: Option<fn(String) -> String>,
    /// Wraps the whole output.
    pub enclose: Template,
    /// Output for unparsable input, filled with the error message and the input.
    pub error: Option<Template>,
}
