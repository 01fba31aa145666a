use super::render;

#[test]
fn test_equation() {
    assert_eq!(
        render("html", "2h2=o2-2h2o"),
        "2&#x2006;H<sub>2</sub>&nbsp;+&nbsp;O<sub>2</sub>&nbsp;&#x27f6;&nbsp;2&#x2006;H<sub>2</sub>O"
    );
}

#[test]
fn test_charge_and_state() {
    assert_eq!(
        render("html", "so4.2-aq"),
        "SO<sub>4</sub><sup>2&#x2212;</sup><sub>(aq)</sub>"
    );
    assert_eq!(render("html", "h="), "H<sup>+</sup>");
}

#[test]
fn test_count_and_state_share_one_subscript() {
    assert_eq!(render("html", "h2;l"), "H<sub>2(&#x2113;)</sub>");
}

#[test]
fn test_fraction_coefficient() {
    assert_eq!(
        render("html", "1/2o2"),
        "<sup>1</sup>&frasl;<sub>2</sub>&#x2006;O<sub>2</sub>"
    );
}

#[test]
fn test_groups_and_hydrates() {
    assert_eq!(render("html", "ca'oh'2"), "Ca(OH)<sub>2</sub>");
    assert_eq!(
        render("html", "cuso4/5h2o"),
        "CuSO<sub>4</sub>&#x2022;5&#x2006;H<sub>2</sub>O"
    );
}

#[test]
fn test_output_is_ascii() {
    for input in ["h2;l", "so4.2-aq", "n2;=/3h2", "h;-/h"] {
        assert!(render("html", input).is_ascii(), "{input}");
    }
}
