use quichem_babel::formats::treeviz::to_treeviz_str_with_options;
use quichem_babel::{FormatRegistry, TreevizOptions};
use std::collections::HashMap;

fn treeviz(input: &str) -> String {
    let ast = quichem_core::parse(input).unwrap();
    let output = FormatRegistry::default().serialize(&ast, "treeviz").unwrap();
    output.trim_end().to_string()
}

#[test]
fn test_item_with_everything() {
    insta::assert_snapshot!(treeviz("2h2o=aq"), @r"
    ⧉ Expression (1 items, 0 separators)
    └─ ◆ Item
      ├─ × Coefficient 2
      ├─ ⌬ Compound
      │ ├─ ● Element H 2
      │ └─ ● Element O
      ├─ ± Charge +
      └─ ◌ State aq
    ");
}

#[test]
fn test_separators_and_items() {
    insta::assert_snapshot!(treeviz("cuso4/5h2o"), @r"
    ⧉ Expression (2 items, 1 separators)
    ├─ ◆ Item
    │ └─ ⌬ Compound
    │   ├─ ● Element Cu
    │   ├─ ● Element S
    │   └─ ● Element O 4
    ├─ ⟶ Separator /
    └─ ◆ Item
      ├─ × Coefficient 5
      └─ ⌬ Compound
        ├─ ● Element H 2
        └─ ● Element O
    ");
}

#[test]
fn test_groups_nest() {
    insta::assert_snapshot!(treeviz("ca'oh'2"), @r"
    ⧉ Expression (1 items, 0 separators)
    └─ ◆ Item
      └─ ⌬ Compound
        ├─ ● Element Ca
        └─ ◯ Group 2
          ├─ ● Element O
          └─ ● Element H
    ");
}

#[test]
fn test_show_defaults() {
    let ast = quichem_core::parse("h").unwrap();
    let output = to_treeviz_str_with_options(&ast, TreevizOptions { show_defaults: true });
    insta::assert_snapshot!(output.trim_end(), @r"
    ⧉ Expression (1 items, 0 separators)
    └─ ◆ Item
      ├─ × Coefficient 1/1
      ├─ ⌬ Compound
      │ └─ ● Element H 1
      ├─ ± Charge 0
      └─ ◌ State (none)
    ");
}

#[test]
fn test_show_defaults_through_registry_options() {
    let ast = quichem_core::parse("h").unwrap();
    let mut options = HashMap::new();
    options.insert("show-defaults".to_string(), "true".to_string());
    let output = FormatRegistry::default()
        .serialize_with_options(&ast, "treeviz", &options)
        .unwrap();
    assert_eq!(
        output,
        to_treeviz_str_with_options(&ast, TreevizOptions { show_defaults: true })
    );
}
