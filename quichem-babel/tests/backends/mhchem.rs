use super::render;
use quichem_babel::{BackendFormat, Format};

#[test]
fn test_ions() {
    assert_eq!(render("mhchem", "h==oh-"), "\\ce{H^+ + OH^-}");
    assert_eq!(render("mhchem", "so4.2-"), "\\ce{SO4^2-}");
}

#[test]
fn test_equation() {
    assert_eq!(render("mhchem", "2h2=o2-2h2o"), "\\ce{2H2 + O2 -> 2H2O}");
    assert_eq!(render("mhchem", "n2;=/3h2"), "\\ce{N2 <=> 3H2}");
}

#[test]
fn test_state_fraction_and_hydrate() {
    assert_eq!(render("mhchem", "h2o;l"), "\\ce{H2O _{($\\ell$)}}");
    assert_eq!(render("mhchem", "1/2o2"), "\\ce{1/2O2}");
    assert_eq!(render("mhchem", "cuso4/5h2o"), "\\ce{CuSO4*5H2O}");
}

#[test]
fn test_shares_package_error_with_latex() {
    let error = quichem_core::parse("x").unwrap_err();
    assert_eq!(
        BackendFormat::mhchem().format_error("x", &error),
        BackendFormat::latex().format_error("x", &error)
    );
}
