//! Parsed representation of shorthand input
//!
//! An [`Ast`] is a flat sequence alternating [`Item`]s and [`Separator`]s:
//!
//! ```text
//! Ast
//! ├── Item          coefficient, compound, charge, state
//! │   └── Compound  one or more Counters
//! │       └── Counter
//! │           ├── Element | Group (Group holds Counters again)
//! │           └── count
//! ├── Separator     +, →, ·, =, ⇄, ⇌
//! └── Item
//! ```
//!
//! Every field of an [`Item`] is always populated. Values the input left
//! out are filled with their defaults by the grammar, so consumers never
//! have to tell "missing" from "default".
//!
//! The AST is a tree of owned values. It is built once by the grammar and
//! only read afterwards.
//!
//! `Display` renders the bracketed debug notation also used by the test
//! corpus, e.g. `Item[Coefficient[1, 1], Compound[[Counter[Element[o], 2]]], Charge[0, ], State[]]`.

use serde::Serialize;
use std::fmt;

/// A parsed formula or equation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ast {
    pub nodes: Vec<Node>,
}

impl Ast {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// All items, in order, skipping separators.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Item(item) => Some(item),
            Node::Separator(_) => None,
        })
    }

    /// All separators, in order.
    pub fn separators(&self) -> impl Iterator<Item = &Separator> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Separator(separator) => Some(separator),
            Node::Item(_) => None,
        })
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Top-level node of an [`Ast`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Item(Item),
    Separator(Separator),
}

/// One reactant or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub coefficient: Coefficient,
    pub compound: Compound,
    pub charge: Charge,
    pub state: State,
}

impl Item {
    /// An item with every optional part left at its default.
    pub fn bare(compound: Compound) -> Self {
        Self {
            coefficient: Coefficient::default(),
            compound,
            charge: Charge::none(),
            state: State::none(),
        }
    }
}

/// Multiplier in front of a compound.
///
/// A denominator of `"1"` means the numerator stands alone (an integer or a
/// decimal such as `"99.001"`); anything else is a fraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coefficient {
    pub numerator: String,
    pub denominator: String,
}

impl Coefficient {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// A coefficient with denominator `"1"`.
    pub fn whole(numerator: impl Into<String>) -> Self {
        Self::new(numerator, "1")
    }

    /// True for the default `1/1`, which renders as nothing.
    pub fn is_implicit(&self) -> bool {
        self.numerator == "1" && self.denominator == "1"
    }

    pub fn is_fraction(&self) -> bool {
        self.denominator != "1"
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Self::whole("1")
    }
}

/// A chemical formula: one or more counted elements or groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compound {
    pub counters: Vec<Counter>,
}

impl Compound {
    pub fn new(counters: Vec<Counter>) -> Self {
        Self { counters }
    }
}

/// A bracketed sub-formula such as `(OH)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub counters: Vec<Counter>,
}

impl Group {
    pub fn new(counters: Vec<Counter>) -> Self {
        Self { counters }
    }
}

/// An element or group together with its subscript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub segment: Segment,
    pub count: String,
}

impl Counter {
    pub fn new(segment: Segment, count: impl Into<String>) -> Self {
        Self {
            segment,
            count: count.into(),
        }
    }

    /// A single, uncounted element.
    pub fn element(symbol: impl Into<String>) -> Self {
        Self::new(Segment::Element(Element::new(symbol)), "1")
    }
}

/// What a [`Counter`] counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Element(Element),
    Group(Group),
}

/// An element symbol, stored lowercase as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub symbol: String,
}

impl Element {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

/// Sign of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// The shorthand character for this sign.
    pub fn symbol(self) -> &'static str {
        match self {
            Sign::Positive => "=",
            Sign::Negative => "-",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Sign::Positive),
            '-' => Some(Sign::Negative),
            _ => None,
        }
    }
}

/// Ionic charge. Without a written charge the magnitude is `"0"` and there
/// is no sign; a magnitude of `"0"` renders as uncharged either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Charge {
    pub magnitude: String,
    pub sign: Option<Sign>,
}

impl Charge {
    pub fn none() -> Self {
        Self {
            magnitude: "0".to_string(),
            sign: None,
        }
    }

    pub fn new(magnitude: impl Into<String>, sign: Sign) -> Self {
        Self {
            magnitude: magnitude.into(),
            sign: Some(sign),
        }
    }

    pub fn is_charged(&self) -> bool {
        self.magnitude != "0"
    }
}

impl Default for Charge {
    fn default() -> Self {
        Self::none()
    }
}

/// State of aggregation; an empty abbreviation means none was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    pub abbreviation: String,
}

impl State {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(abbreviation: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.abbreviation.is_empty()
    }
}

/// Connector between two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Separator {
    pub kind: SeparatorKind,
}

impl Separator {
    pub fn new(kind: SeparatorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorKind {
    /// `=`, rendered as a plus sign.
    Plus,
    /// `-`, rendered as a reaction arrow.
    Arrow,
    /// `/`, rendered as the hydrate dot.
    Hydrate,
    /// `=,`, rendered as an equals sign.
    Equals,
    /// `-/`, rendered as a pair of opposing arrows.
    Reversible,
    /// `=/`, rendered as equilibrium harpoons.
    Equilibrium,
}

impl SeparatorKind {
    pub const ALL: [SeparatorKind; 6] = [
        SeparatorKind::Plus,
        SeparatorKind::Arrow,
        SeparatorKind::Hydrate,
        SeparatorKind::Equals,
        SeparatorKind::Reversible,
        SeparatorKind::Equilibrium,
    ];

    /// The shorthand spelling, without the optional leading `;`.
    pub fn symbol(self) -> &'static str {
        match self {
            SeparatorKind::Plus => "=",
            SeparatorKind::Arrow => "-",
            SeparatorKind::Hydrate => "/",
            SeparatorKind::Equals => "=,",
            SeparatorKind::Reversible => "-/",
            SeparatorKind::Equilibrium => "=/",
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.nodes)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Item(item) => fmt::Display::fmt(item, f),
            Node::Separator(separator) => fmt::Display::fmt(separator, f),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item[{}, {}, {}, {}]",
            self.coefficient, self.compound, self.charge, self.state
        )
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coefficient[{}, {}]", self.numerator, self.denominator)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Compound[")?;
        write_list(f, &self.counters)?;
        f.write_str("]")
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Group[")?;
        write_list(f, &self.counters)?;
        f.write_str("]")
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter[{}, {}]", self.segment, self.count)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Element(element) => fmt::Display::fmt(element, f),
            Segment::Group(group) => fmt::Display::fmt(group, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element[{}]", self.symbol)
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = self.sign.map(Sign::symbol).unwrap_or("");
        write!(f, "Charge[{}, {}]", self.magnitude, sign)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[{}]", self.abbreviation)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Separator[{}]", self.kind.symbol())
    }
}
