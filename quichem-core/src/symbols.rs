//! Static symbol tables
//!
//! Element symbols and state-of-aggregation abbreviations understood by the
//! shorthand, plus the single-character glyphs the grammar is built from.
//! Everything here is plain data: the grammar decides how to use it.
//!
//! Symbols are stored in lowercase, exactly as they are typed. Lookups are
//! done longest-first so that callers get maximal munch by iterating the
//! candidates in the returned order.

use phf::{phf_set, Set};

/// Longest element symbol in [`ELEMENTS`] (the systematic `uu*` names).
pub const MAX_ELEMENT_LEN: usize = 3;

/// Longest state abbreviation in [`STATES`].
pub const MAX_STATE_LEN: usize = 3;

/// Element symbols, lowercase.
///
/// This is the periodic table as the notation knows it: the four
/// systematic placeholder names are kept and the later official names
/// (`nh`, `mc`, `ts`, `og`) are deliberately absent, since adding them
/// would change how existing input segments (`'nh4'` is N H4, not Nh4).
pub static ELEMENTS: Set<&'static str> = phf_set! {
    "uut", "uup", "uus", "uuo",
    "he", "li", "be", "ne", "na", "mg", "al", "si", "cl", "ar", "ca", "sc",
    "ti", "cr", "mn", "fe", "co", "ni", "cu", "zn", "ga", "ge", "as", "se",
    "br", "kr", "rb", "sr", "zr", "nb", "mo", "tc", "ru", "rh", "pd", "ag",
    "cd", "in", "sn", "sb", "te", "xe", "cs", "ba", "la", "ce", "pr", "nd",
    "pm", "sm", "eu", "gd", "tb", "dy", "ho", "er", "tm", "yb", "lu", "hf",
    "ta", "re", "os", "ir", "pt", "au", "hg", "tl", "pb", "bi", "po", "at",
    "rn", "fr", "ra", "ac", "th", "pa", "np", "pu", "am", "cm", "bk", "cf",
    "es", "fm", "md", "no", "lr", "rf", "db", "sg", "bh", "hs", "mt", "ds",
    "rg", "cn", "fl", "lv",
    "h", "b", "c", "n", "o", "f", "p", "s", "k", "v", "y", "i", "w", "u",
};

/// State-of-aggregation abbreviations, lowercase.
///
/// `s` solid, `l` liquid, `g` gas, `aq` aqueous, `cr` crystalline,
/// `am` amorphous, `lc` liquid crystal, `sln` solution, `ads` adsorbed,
/// `mon` monomeric, `pol` polymeric, `vit` vitreous, `cd` condensed,
/// `f` fluid, `n` nematic, `a` amorphous solid.
pub static STATES: Set<&'static str> = phf_set! {
    "mon", "pol", "sln", "vit", "ads", "cd", "cr", "am", "aq", "lc",
    "s", "f", "l", "g", "n", "a",
};

/// Positive charge sign, also the "plus" separator.
pub const POSITIVE: char = '=';
/// Negative charge sign, also the "arrow" separator.
pub const NEGATIVE: char = '-';
/// Hydrate separator and fraction bar.
pub const SLASH: char = '/';
/// Qualifier for the "equals" separator (`=,`).
pub const COMMA: char = ',';
/// Disambiguating prefix for states and separators.
pub const SEMICOLON: char = ';';
/// Segmentation boundary inside compounds, also a decimal point.
pub const DOT: char = '.';
/// Opens and closes a bracketed group.
pub const QUOTE: char = '\'';

/// Returns true if `symbol` is a known element symbol.
pub fn is_element(symbol: &str) -> bool {
    ELEMENTS.contains(symbol)
}

/// Returns true if `word` is a known state abbreviation.
pub fn is_state(word: &str) -> bool {
    STATES.contains(word)
}

/// Returns every element symbol that is a prefix of `text`, longest first.
pub fn elements_at(text: &str) -> Vec<&'static str> {
    prefixes_in(text, MAX_ELEMENT_LEN, &ELEMENTS)
}

/// Returns every state abbreviation that is a prefix of `text`, longest first.
pub fn states_at(text: &str) -> Vec<&'static str> {
    prefixes_in(text, MAX_STATE_LEN, &STATES)
}

fn prefixes_in(text: &str, max_len: usize, table: &Set<&'static str>) -> Vec<&'static str> {
    (1..=max_len.min(text.len()))
        .rev()
        .filter(|&len| text.is_char_boundary(len))
        .filter_map(|len| table.get_key(&text[..len]).copied())
        .collect()
}
