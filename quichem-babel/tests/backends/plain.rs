use super::render;

#[test]
fn test_unicode_scripts() {
    assert_eq!(render("plain", "h2o"), "H\u{2082}O");
    assert_eq!(render("plain", "so4.2-"), "SO\u{2084}\u{b2}\u{207b}");
    assert_eq!(render("plain", "fe.3="), "Fe\u{b3}\u{207a}");
    assert_eq!(render("plain", "h="), "H\u{207a}");
}

#[test]
fn test_equation() {
    assert_eq!(
        render("plain", "2h2=o2-2h2o"),
        "2\u{2006}H\u{2082} + O\u{2082} \u{27f6} 2\u{2006}H\u{2082}O"
    );
}

#[test]
fn test_state_and_fraction() {
    assert_eq!(render("plain", "h2;l"), "H\u{2082}(\u{2113})");
    assert_eq!(render("plain", "1/2o2"), "1\u{2044}2\u{2006}O\u{2082}");
}

#[test]
fn test_hydrate() {
    assert_eq!(
        render("plain", "cocl2/6h2o"),
        "CoCl\u{2082}\u{b7}6\u{2006}H\u{2082}O"
    );
}
