use super::render;

#[test]
fn test_roles_are_escaped_inside_words() {
    assert_eq!(render("rst", "h2o"), "H\\ :sub:`2`\\ O");
}

#[test]
fn test_trailing_escape_is_trimmed() {
    assert_eq!(render("rst", "h="), "H\\ :sup:`+`");
    assert_eq!(
        render("rst", "so4.2-"),
        "SO\\ :sub:`4`\\ :sup:`2\u{2212}`"
    );
}

#[test]
fn test_count_and_state_share_one_role() {
    assert_eq!(render("rst", "h2;l"), "H\\ :sub:`2(\u{2113})`");
}
