use quichem_babel::{Format, ReprFormat};

#[test]
fn test_repr_of_water() {
    let ast = quichem_core::parse("h2o").unwrap();
    assert_eq!(
        ReprFormat.serialize(&ast).unwrap(),
        "[Item[Coefficient[1, 1], Compound[[Counter[Element[h], 2], Counter[Element[o], 1]]], Charge[0, ], State[]]]"
    );
}

#[test]
fn test_repr_of_equation_lists_separators() {
    let ast = quichem_core::parse("h=o").unwrap();
    let repr = ReprFormat.serialize(&ast).unwrap();
    assert!(repr.contains("Separator[=]"), "{repr}");
}
