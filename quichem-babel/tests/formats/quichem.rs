use quichem_babel::{Format, FormatError, QuichemFormat};

#[test]
fn test_parse_and_write() {
    let format = QuichemFormat;
    let ast = format.parse("2cl-aq=2ag=aq-2agcl;s").unwrap();
    assert_eq!(ast.items().count(), 3);
    assert_eq!(
        format.serialize(&ast).unwrap(),
        "2cl.-;aq;=2ag.=;aq;-2ag.cl;s"
    );
}

#[test]
fn test_parse_error_is_wrapped() {
    match QuichemFormat.parse("h2ox").unwrap_err() {
        FormatError::ParseError(error) => {
            assert_eq!(error.position, 3);
            assert_eq!(error.found, Some('x'));
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_canonical_form_is_a_fixed_point() {
    let format = QuichemFormat;
    for input in ["cuso4/5h2o", "h==oh-", "ge''nh4'2o'4", "1/2o2;g", "n2;=/3h2"] {
        let once = format.serialize(&format.parse(input).unwrap()).unwrap();
        let twice = format.serialize(&format.parse(&once).unwrap()).unwrap();
        assert_eq!(once, twice, "{input}");
    }
}
