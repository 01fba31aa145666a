use quichem_babel::{convert, FormatError, FormatRegistry};

#[test]
fn test_every_default_format_renders_water() {
    let registry = FormatRegistry::default();
    let ast = quichem_core::parse("h2o").unwrap();
    for name in registry.list_formats() {
        let output = registry.serialize(&ast, &name).unwrap();
        assert!(!output.is_empty(), "{name}");
    }
}

#[test]
fn test_convert() {
    assert_eq!(convert("h==oh-", "mhchem").unwrap(), "\\ce{H^+ + OH^-}");
    assert!(matches!(
        convert("h2o", "docx"),
        Err(FormatError::FormatNotFound(_))
    ));
    assert!(matches!(
        convert("'c'", "html"),
        Err(FormatError::ParseError(_))
    ));
}

#[test]
fn test_empty_input_renders_empty() {
    assert_eq!(convert("", "html").unwrap(), "");
    assert_eq!(convert("", "latex").unwrap(), "\\(\\)");
}
