//! Treeviz formatter for the parse tree
//!
//! Treeviz is a visual representation of the AST, one node per line, with the nesting drawn as
//! a tree. It is meant for looking at how the parser read an ambiguous input.
//!
//! So the format is :
//! <prefix><connector> <icon> <label>
//!
//! Example, for `2h2o=aq` :
//!
//!   ⧉ Expression (1 items, 0 separators)
//!   └─ ◆ Item
//!     ├─ × Coefficient 2
//!     ├─ ⌬ Compound
//!     │ ├─ ● Element H 2
//!     │ └─ ● Element O
//!     ├─ ± Charge +
//!     └─ ◌ State aq
//!
//! Icons
//!     Expression: ⧉
//!     Item: ◆
//!     Separator: ⟶
//!     Coefficient: ×
//!     Compound: ⌬
//!     Element: ●
//!     Group: ◯
//!     Charge: ±
//!     State: ◌

use crate::compiler::title_case;
use crate::error::FormatError;
use crate::format::{bool_option, check_options, Format};
use quichem_core::{Ast, Counter, Item, Node, Segment};
use std::collections::HashMap;

/// Get the Unicode icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Expression" => "⧉",
        "Item" => "◆",
        "Separator" => "⟶",
        "Coefficient" => "×",
        "Compound" => "⌬",
        "Element" => "●",
        "Group" => "◯",
        "Charge" => "±",
        "State" => "◌",
        _ => "○",
    }
}

/// Knobs for the treeviz output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Also show coefficients, charges and states the input left out, with their default values.
    pub show_defaults: bool,
}

impl TreevizOptions {
    fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        check_options("treeviz", params, &["show-defaults"])?;
        Ok(Self {
            show_defaults: bool_option("treeviz", params, "show-defaults")?.unwrap_or(false),
        })
    }
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn push_line(output: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let icon = get_icon(node_type);
    if label.is_empty() {
        output.push_str(&format!("{prefix}{} {icon} {node_type}\n", connector(is_last)));
    } else {
        output.push_str(&format!(
            "{prefix}{} {icon} {node_type} {label}\n",
            connector(is_last)
        ));
    }
}

fn format_item(output: &mut String, item: &Item, prefix: &str, options: TreevizOptions) {
    let mut lines: Vec<(&str, String)> = Vec::new();

    let coefficient = &item.coefficient;
    if options.show_defaults || !coefficient.is_implicit() {
        let label = if coefficient.is_fraction() || options.show_defaults {
            format!("{}/{}", coefficient.numerator, coefficient.denominator)
        } else {
            coefficient.numerator.clone()
        };
        lines.push(("Coefficient", label));
    }
    lines.push(("Compound", String::new()));
    if options.show_defaults || item.charge.is_charged() {
        let sign = item.charge.sign.map(|sign| sign_label(sign.symbol())).unwrap_or("");
        let magnitude = if item.charge.magnitude == "1" && !options.show_defaults {
            ""
        } else {
            item.charge.magnitude.as_str()
        };
        lines.push(("Charge", format!("{magnitude}{sign}")));
    }
    if options.show_defaults || !item.state.is_none() {
        let label = if item.state.is_none() {
            "(none)".to_string()
        } else {
            item.state.abbreviation.clone()
        };
        lines.push(("State", label));
    }

    let count = lines.len();
    for (i, (node_type, label)) in lines.into_iter().enumerate() {
        let is_last = i == count - 1;
        push_line(output, prefix, is_last, node_type, &label);
        if node_type == "Compound" {
            format_counters(
                output,
                &item.compound.counters,
                &child_prefix(prefix, is_last),
                options,
            );
        }
    }
}

fn sign_label(symbol: &str) -> &'static str {
    match symbol {
        "=" => "+",
        _ => "-",
    }
}

fn format_counters(
    output: &mut String,
    counters: &[Counter],
    prefix: &str,
    options: TreevizOptions,
) {
    for (i, counter) in counters.iter().enumerate() {
        let is_last = i == counters.len() - 1;
        let count = if counter.count == "1" && !options.show_defaults {
            String::new()
        } else {
            counter.count.clone()
        };
        match &counter.segment {
            Segment::Element(element) => {
                let label = format!("{} {}", title_case(&element.symbol), count);
                push_line(output, prefix, is_last, "Element", label.trim_end());
            }
            Segment::Group(group) => {
                push_line(output, prefix, is_last, "Group", &count);
                format_counters(
                    output,
                    &group.counters,
                    &child_prefix(prefix, is_last),
                    options,
                );
            }
        }
    }
}

/// Convert an AST to a treeviz string
///
/// # Examples
///
/// ```ignore
/// let options = TreevizOptions { show_defaults: true };
/// let output = to_treeviz_str_with_options(&ast, options);
/// ```
pub fn to_treeviz_str_with_options(ast: &Ast, options: TreevizOptions) -> String {
    let mut output = format!(
        "{} Expression ({} items, {} separators)\n",
        get_icon("Expression"),
        ast.items().count(),
        ast.separators().count()
    );

    let count = ast.len();
    for (i, node) in ast.iter().enumerate() {
        let is_last = i == count - 1;
        match node {
            Node::Item(item) => {
                push_line(&mut output, "", is_last, "Item", "");
                format_item(&mut output, item, &child_prefix("", is_last), options);
            }
            Node::Separator(separator) => {
                push_line(&mut output, "", is_last, "Separator", separator.kind.symbol());
            }
        }
    }
    output
}

/// Format implementation for treeviz format
///
/// # Parameters
///
/// - `"show-defaults"`: When set to `"true"`, also shows the implicit `1/1` coefficient, the
///   zero charge and the missing state of every item, and counts of 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreevizFormat {
    options: TreevizOptions,
}

impl TreevizFormat {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation of the parse with Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(ast, self.options))
    }

    fn serialize_with_options(
        &self,
        ast: &Ast,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            return self.serialize(ast);
        }
        let options = TreevizOptions::from_params(options)?;
        Ok(to_treeviz_str_with_options(ast, options))
    }
}
