use super::render;
use quichem_babel::{BackendFormat, Format, FormatRegistry};
use std::collections::HashMap;

#[test]
fn test_scripts_are_closed_with_empty_group() {
    assert_eq!(render("latex", "so4.2-"), "\\(\\mathrm{SO}_{4}{}^{2-}{}\\)");
}

#[test]
fn test_adjacent_symbols_merge() {
    assert_eq!(
        render("latex", "ca'oh'2"),
        "\\(\\mathrm{Ca}\\left(\\mathrm{OH}\\right)_{2}{}\\)"
    );
}

#[test]
fn test_state_is_not_merged_into_count() {
    assert_eq!(
        render("latex", "h2;s"),
        "\\(\\mathrm{H}_{2}{}_{\\mathrm{(s)}}{}\\)"
    );
}

#[test]
fn test_fraction_coefficient() {
    assert_eq!(
        render("latex", "1/2o2"),
        "\\(\\frac{1}{2}\\,\\mathrm{O}_{2}{}\\)"
    );
}

#[test]
fn test_without_enclosure() {
    let registry = FormatRegistry::default();
    let ast = quichem_core::parse("h2o").unwrap();
    let mut options = HashMap::new();
    options.insert("enclose".to_string(), "false".to_string());
    assert_eq!(
        registry
            .serialize_with_options(&ast, "latex", &options)
            .unwrap(),
        "\\mathrm{H}_{2}{}\\mathrm{O}"
    );
}

#[test]
fn test_unknown_option_is_rejected() {
    let registry = FormatRegistry::default();
    let ast = quichem_core::parse("h2o").unwrap();
    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "true".to_string());
    assert!(registry
        .serialize_with_options(&ast, "latex", &options)
        .is_err());
}

#[test]
fn test_parse_failure_becomes_package_error() {
    let error = quichem_core::parse("h2ox").unwrap_err();
    let output = BackendFormat::latex().format_error("h2ox", &error).unwrap();
    assert_eq!(
        output,
        format!(
            "\\PackageError{{quichem}}{{ \\protect {error} }}{{I don't know what to do with \\protect h2ox}}"
        )
    );
}
