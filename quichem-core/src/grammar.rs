//! Shorthand grammar
//!
//! The grammar, informally:
//!
//! ```text
//! expression  = item (separator item)*
//! item        = coefficient? compound (dot? charge)?      (not followed by a charge)
//!             | coefficient? compound (dot? charge)? state?
//! compound    = counter+
//! counter     = (element | group) number? dot?
//! group       = "'" counter+ "'"                          (followed by a digit)
//! coefficient = decimal | number ("/" number)?
//! charge      = number? ("=" | "-")
//! state       = ";"? state-word
//! separator   = ";"? ("=/" | "-/" | "=," | "=" | "-" | "/")
//! ```
//!
//! Input is lowercase and has no whitespace. The whole input must be
//! consumed.
//!
//! # Ambiguity
//!
//! The notation is deliberately terse, so most inputs can be read in
//! several ways. The parser explores readings depth-first and keeps the
//! first one that consumes everything. The order in which alternatives are
//! tried is therefore part of the language:
//!
//! | Choice                         | Tried first                          |
//! |--------------------------------|--------------------------------------|
//! | element symbols                | longest symbol                       |
//! | optional parts (`?`)           | present                              |
//! | repetitions (`+`, `*`)         | one more                             |
//! | the two `item` forms           | the one without a state              |
//! | coefficient                    | decimal, then fraction, then integer |
//! | separators                     | two-character forms                  |
//!
//! Numbers, decimals and state words are atomic: they always take every
//! digit available and are never split by backtracking. Element symbols
//! are not atomic, which is what lets `cnergy` fall back to `C Ne Rg Y`.
//!
//! A few consequences worth knowing:
//!
//! - `hg` is mercury, `h;g` is hydrogen gas.
//! - `li=s` is a charged ion in the solid state, `li;=s` is an equation.
//! - `naq` is aqueous nitrogen, since `na` leaves a lone `q`.
//! - `'oh'` needs a count: a group without a trailing digit is an error.
//!
//! Pathological inputs can make the search backtrack a lot. Failed
//! sub-searches are remembered per position so each is explored once.

use crate::ast::{
    Ast, Charge, Coefficient, Compound, Counter, Element, Group, Item, Node, Segment, Separator,
    SeparatorKind, Sign, State,
};
use crate::error::{Result, SyntaxError};
use crate::symbols::{self, DOT, QUOTE, SEMICOLON, SLASH};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// Separators in the order they are tried.
const SEPARATORS: [SeparatorKind; 6] = [
    SeparatorKind::Equilibrium,
    SeparatorKind::Reversible,
    SeparatorKind::Equals,
    SeparatorKind::Plus,
    SeparatorKind::Arrow,
    SeparatorKind::Hydrate,
];

/// Parses shorthand into an [`Ast`].
///
/// An empty string parses to an empty AST. Anything else must be a
/// complete expression, otherwise the error points at the furthest
/// position the parser could make sense of.
pub fn parse(input: &str) -> Result<Ast> {
    Grammar::new(input).parse()
}

struct Grammar<'s> {
    src: &'s str,
    bytes: &'s [u8],
    furthest: Cell<usize>,
    dead_ends: RefCell<HashSet<usize>>,
}

impl<'s> Grammar<'s> {
    fn new(src: &'s str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            furthest: Cell::new(0),
            dead_ends: RefCell::new(HashSet::new()),
        }
    }

    fn parse(&self) -> Result<Ast> {
        if self.src.is_empty() {
            return Ok(Ast::default());
        }
        let mut nodes = Vec::new();
        if self.expression(0, &mut nodes) {
            Ok(Ast::new(nodes))
        } else {
            Err(SyntaxError::at(self.src, self.furthest.get()))
        }
    }

    // -- Expressions --------------------------------------------------------

    /// `item (separator item)*` followed by end of input.
    fn expression(&self, pos: usize, nodes: &mut Vec<Node>) -> bool {
        if self.dead_ends.borrow().contains(&pos) {
            return false;
        }
        let found = self.item(pos, &mut |item, end| {
            nodes.push(Node::Item(item));
            if self.expression_tail(end, &mut *nodes) {
                return true;
            }
            nodes.pop();
            false
        });
        if !found {
            self.dead_ends.borrow_mut().insert(pos);
        }
        found
    }

    fn expression_tail(&self, pos: usize, nodes: &mut Vec<Node>) -> bool {
        for (kind, after) in self.separators(pos) {
            nodes.push(Node::Separator(Separator::new(kind)));
            if self.expression(after, &mut *nodes) {
                return true;
            }
            nodes.pop();
        }
        self.at_end(pos)
    }

    // -- Items --------------------------------------------------------------

    fn item(&self, pos: usize, k: &mut dyn FnMut(Item, usize) -> bool) -> bool {
        let stateless = self.item_head(pos, &mut |coefficient, counters, charge, end| {
            if self.charge_at(end).is_some() {
                return false;
            }
            k(build_item(coefficient, counters, charge, State::none()), end)
        });
        if stateless {
            return true;
        }

        self.item_head(pos, &mut |coefficient, counters, charge, end| {
            for (state, after) in self.states(end) {
                let item = build_item(coefficient, counters, charge, State::new(state));
                if k(item, after) {
                    return true;
                }
            }
            k(build_item(coefficient, counters, charge, State::none()), end)
        })
    }

    /// `coefficient? compound (dot? charge)?`
    fn item_head(
        &self,
        pos: usize,
        k: &mut dyn FnMut(&Coefficient, &[Counter], &Charge, usize) -> bool,
    ) -> bool {
        for (coefficient, start) in self.coefficients(pos) {
            let mut dead_ends = HashSet::new();
            let mut counters = Vec::new();
            let found = self.counters(start, &mut counters, &mut dead_ends, &mut |counters, end| {
                self.charges(end)
                    .into_iter()
                    .any(|(charge, after)| k(&coefficient, counters, &charge, after))
            });
            if found {
                return true;
            }
        }
        false
    }

    // -- Compounds ----------------------------------------------------------

    /// `counter+`, longest run first.
    ///
    /// Whether the continuation accepts depends only on the end position it
    /// is handed, so a position that failed once is not explored again.
    fn counters(
        &self,
        pos: usize,
        acc: &mut Vec<Counter>,
        dead_ends: &mut HashSet<usize>,
        k: &mut dyn FnMut(&[Counter], usize) -> bool,
    ) -> bool {
        if dead_ends.contains(&pos) {
            return false;
        }
        let found = self.counter(pos, &mut |counter, end| {
            acc.push(counter);
            let found = self.counters(end, &mut *acc, &mut *dead_ends, &mut *k)
                || k(acc.as_slice(), end);
            acc.pop();
            found
        });
        if !found {
            dead_ends.insert(pos);
        }
        found
    }

    /// `(element | group) number? dot?`
    fn counter(&self, pos: usize, k: &mut dyn FnMut(Counter, usize) -> bool) -> bool {
        let elements = symbols::elements_at(&self.src[pos..]);
        if elements.is_empty() {
            self.reach(pos);
        }
        for symbol in elements {
            let segment = Segment::Element(Element::new(symbol));
            if self.counted(&segment, pos + symbol.len(), &mut *k) {
                return true;
            }
        }

        if !self.is(pos, QUOTE) {
            return false;
        }
        let mut dead_ends = HashSet::new();
        self.counters(pos + 1, &mut Vec::new(), &mut dead_ends, &mut |inner, end| {
            if !self.is(end, QUOTE) || !self.is_digit(end + 1) {
                return false;
            }
            let segment = Segment::Group(Group::new(inner.to_vec()));
            self.counted(&segment, end + 1, &mut *k)
        })
    }

    /// The optional count and dot after a segment.
    fn counted(
        &self,
        segment: &Segment,
        pos: usize,
        k: &mut dyn FnMut(Counter, usize) -> bool,
    ) -> bool {
        let mut counts = Vec::with_capacity(2);
        if let Some(end) = self.number_end(pos) {
            counts.push((&self.src[pos..end], end));
        }
        counts.push(("1", pos));

        for (count, end) in counts {
            let ends = if self.is(end, DOT) { vec![end + 1, end] } else { vec![end] };
            for end in ends {
                if k(Counter::new(segment.clone(), count), end) {
                    return true;
                }
            }
        }
        false
    }

    // -- Terminals ----------------------------------------------------------

    /// Every way to read an optional coefficient at `pos`, in order.
    fn coefficients(&self, pos: usize) -> Vec<(Coefficient, usize)> {
        let mut found = Vec::new();
        if let Some(end) = self.decimal_end(pos) {
            found.push((Coefficient::whole(&self.src[pos..end]), end));
        }
        if let Some(end) = self.number_end(pos) {
            let numerator = &self.src[pos..end];
            if self.is(end, SLASH) {
                if let Some(denominator_end) = self.number_end(end + 1) {
                    let denominator = &self.src[end + 1..denominator_end];
                    found.push((Coefficient::new(numerator, denominator), denominator_end));
                }
            }
            found.push((Coefficient::whole(numerator), end));
        }
        found.push((Coefficient::default(), pos));
        found
    }

    /// Every way to read an optional `dot? charge` at `pos`, in order.
    fn charges(&self, pos: usize) -> Vec<(Charge, usize)> {
        let mut found = Vec::new();
        if self.is(pos, DOT) {
            found.extend(self.charge_at(pos + 1));
        }
        found.extend(self.charge_at(pos));
        found.push((Charge::none(), pos));
        found
    }

    /// `number? sign`
    fn charge_at(&self, pos: usize) -> Option<(Charge, usize)> {
        let (magnitude, sign_pos) = match self.number_end(pos) {
            Some(end) => (&self.src[pos..end], end),
            None => ("1", pos),
        };
        let sign = self.sign_at(sign_pos)?;
        Some((Charge::new(magnitude, sign), sign_pos + 1))
    }

    fn sign_at(&self, pos: usize) -> Option<Sign> {
        self.reach(pos);
        self.bytes
            .get(pos)
            .and_then(|&b| Sign::from_char(char::from(b)))
    }

    /// Every way to read an optional state at `pos`, in order.
    fn states(&self, pos: usize) -> Vec<(&'static str, usize)> {
        let start = if self.is(pos, SEMICOLON) { pos + 1 } else { pos };
        self.reach(start);
        symbols::states_at(&self.src[start..])
            .into_iter()
            .map(|state| (state, start + state.len()))
            .collect()
    }

    /// Every separator that can be read at `pos`, in order.
    fn separators(&self, pos: usize) -> Vec<(SeparatorKind, usize)> {
        let start = if self.is(pos, SEMICOLON) { pos + 1 } else { pos };
        self.reach(start);
        let rest = &self.src[start..];
        SEPARATORS
            .iter()
            .filter(|kind| rest.starts_with(kind.symbol()))
            .map(|&kind| (kind, start + kind.symbol().len()))
            .collect()
    }

    fn at_end(&self, pos: usize) -> bool {
        self.reach(pos);
        pos == self.bytes.len()
    }

    // -- Scanning helpers ---------------------------------------------------

    fn number_end(&self, pos: usize) -> Option<usize> {
        self.reach(pos);
        let len = self.bytes[pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        (len > 0).then_some(pos + len)
    }

    /// `\d+\.\d*` or `\.\d+`
    fn decimal_end(&self, pos: usize) -> Option<usize> {
        let point = self.number_end(pos).unwrap_or(pos);
        if !self.is(point, DOT) {
            return None;
        }
        match self.number_end(point + 1) {
            Some(end) => Some(end),
            None if point > pos => Some(point + 1),
            None => None,
        }
    }

    fn is(&self, pos: usize, c: char) -> bool {
        self.reach(pos);
        self.bytes.get(pos) == Some(&(c as u8))
    }

    fn is_digit(&self, pos: usize) -> bool {
        self.reach(pos);
        self.bytes.get(pos).is_some_and(u8::is_ascii_digit)
    }

    fn reach(&self, pos: usize) {
        if pos > self.furthest.get() && pos <= self.bytes.len() {
            self.furthest.set(pos);
        }
    }
}

fn build_item(
    coefficient: &Coefficient,
    counters: &[Counter],
    charge: &Charge,
    state: State,
) -> Item {
    Item {
        coefficient: coefficient.clone(),
        compound: Compound::new(counters.to_vec()),
        charge: charge.clone(),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_item(input: &str) -> Item {
        let ast = parse(input).unwrap();
        let item = ast.items().next().cloned().unwrap();
        item
    }

    fn symbols_of(item: &Item) -> Vec<String> {
        item.compound
            .counters
            .iter()
            .map(|counter| match &counter.segment {
                Segment::Element(element) => element.symbol.clone(),
                Segment::Group(_) => "'group'".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_longest_element_wins() {
        assert_eq!(symbols_of(&first_item("cmgali")), ["cm", "ga", "li"]);
        assert_eq!(symbols_of(&first_item("c.mgali")), ["c", "mg", "al", "i"]);
    }

    #[test]
    fn test_backtracks_into_shorter_elements() {
        assert_eq!(symbols_of(&first_item("cnergy")), ["c", "ne", "rg", "y"]);
        assert_eq!(symbols_of(&first_item("clina")), ["cl", "i", "na"]);
    }

    #[test]
    fn test_state_needs_no_semicolon_when_unambiguous() {
        let item = first_item("naq");
        assert_eq!(symbols_of(&item), ["n"]);
        assert_eq!(item.state.abbreviation, "aq");

        let item = first_item("hg");
        assert_eq!(symbols_of(&item), ["hg"]);
        assert!(item.state.is_none());
    }

    #[test]
    fn test_charge_then_state() {
        let item = first_item("li=s");
        assert_eq!(item.charge, Charge::new("1", Sign::Positive));
        assert_eq!(item.state.abbreviation, "s");
    }

    #[test]
    fn test_semicolon_forces_separator() {
        let ast = parse("li;=s").unwrap();
        assert_eq!(ast.items().count(), 2);
        assert_eq!(ast.separators().next().map(|s| s.kind), Some(SeparatorKind::Plus));
    }

    #[test]
    fn test_qualified_separators() {
        for (input, kind) in [
            ("h;=/h", SeparatorKind::Equilibrium),
            ("h;-/h", SeparatorKind::Reversible),
            ("h;=,h", SeparatorKind::Equals),
            ("h=,h", SeparatorKind::Equals),
        ] {
            let ast = parse(input).unwrap();
            assert_eq!(ast.separators().next().map(|s| s.kind), Some(kind), "{input}");
        }
    }

    #[test]
    fn test_charge_binds_before_separator() {
        let ast = parse("h=/h").unwrap();
        assert_eq!(first_item("h=/h").charge, Charge::new("1", Sign::Positive));
        assert_eq!(ast.separators().next().map(|s| s.kind), Some(SeparatorKind::Hydrate));
    }

    #[test]
    fn test_group_requires_count() {
        let err = parse("'oh'").unwrap_err();
        assert_eq!(err.position, 4);
        assert_eq!(err.found, None);
    }

    #[test]
    fn test_error_position_is_furthest_reached() {
        let err = parse("h2ox").unwrap_err();
        assert_eq!(err.position, 3);
        assert_eq!(err.found, Some('x'));
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        let err = parse("hé").unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.found, Some('é'));
    }

    #[test]
    fn test_long_failing_input_terminates() {
        let input = format!("{}x", "co".repeat(200));
        assert!(parse(&input).is_err());
    }
}
