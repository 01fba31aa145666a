//! Invariants that hold for any formula, checked over generated shorthand.

use proptest::prelude::*;
use quichem_babel::common::merge;
use quichem_babel::formats::quichem::write;
use quichem_babel::{compile, formats, Backend, FormatRegistry};
use quichem_core::parse;

/// Items that parse on their own.
const ITEMS: &[&str] = &[
    "h2o",
    "so4.2-aq",
    "ca'oh'2",
    "2nacl",
    "1/2o2",
    "fe.3=aq",
    "cuso4",
    "naq",
    "li=s",
    "h2;l",
    "ge''nh4'2o'4",
    "0.5co2;g",
];

/// Separators, each with the `;` that keeps it from being read as a charge.
const SEPARATORS: &[&str] = &[";=", ";-", ";/", ";=,", ";-/", ";=/"];

fn formula() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ITEMS),
        prop::collection::vec(
            (prop::sample::select(SEPARATORS), prop::sample::select(ITEMS)),
            0..4,
        ),
    )
        .prop_map(|(first, rest)| {
            let mut formula = first.to_string();
            for (separator, item) in rest {
                formula.push_str(separator);
                formula.push_str(item);
            }
            formula
        })
}

const BACKENDS: &[&str] = &["html", "plain", "latex", "mhchem", "rst"];

static BACKEND_TABLES: [&Backend; 5] = [
    &formats::html::BACKEND,
    &formats::plain::BACKEND,
    &formats::latex::BACKEND,
    &formats::mhchem::BACKEND,
    &formats::rst::BACKEND,
];

proptest! {
    #[test]
    fn generated_formulas_parse(input in formula()) {
        let ast = parse(&input).unwrap();
        prop_assert_eq!(ast.separators().count() + 1, ast.items().count());
    }

    #[test]
    fn canonical_form_round_trips(input in formula()) {
        let ast = parse(&input).unwrap();
        prop_assert_eq!(parse(&write(&ast)).unwrap(), ast);
    }

    #[test]
    fn merging_is_idempotent(input in formula()) {
        let ast = parse(&input).unwrap();
        for backend in BACKEND_TABLES {
            let mergers = merge::compile_rules(backend.merge).unwrap();
            let once = merge::merge_all(&mergers, compile(&ast, backend));
            prop_assert_eq!(merge::merge_all(&mergers, once.clone()), once);
        }
    }

    #[test]
    fn rendering_is_deterministic_and_leaves_ast_alone(input in formula()) {
        let ast = parse(&input).unwrap();
        let before = ast.clone();
        let registry = FormatRegistry::default();
        for name in BACKENDS {
            let first = registry.serialize(&ast, name).unwrap();
            let second = registry.serialize(&ast, name).unwrap();
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(ast, before);
    }

    #[test]
    fn html_never_emits_split_subscripts(input in formula()) {
        let html = registry_html(&input);
        prop_assert!(!html.contains("</sub><sub>"), "{}", html);
        prop_assert!(!html.contains("</sup><sup>"), "{}", html);
    }
}

fn registry_html(input: &str) -> String {
    let ast = parse(input).unwrap();
    FormatRegistry::default().serialize(&ast, "html").unwrap()
}
