//! CLI-specific transforms
//!
//! This module defines the views `quichem inspect` can show of a parse. Each transform is a
//! stage + format combination; there is a single stage, the AST.
//!
//! - `ast-treeviz`: Tree visualization with Unicode icons
//! - `ast-repr`: Bracketed notation, one line
//! - `ast-json`: JSON representation
//! - `ast-quichem`: The canonical shorthand, every implicit choice spelled out
//!
//! ## Extra Parameters
//!
//! Transforms can accept extra parameters via `--extra-<name> [value]`:
//!
//! - `show-defaults`: (treeviz) also show implicit coefficients, counts, charges and states
//! - `pretty`: (json) indent the output, defaults to "true"
//!
//! Example: `quichem inspect h2o ast-treeviz --extra-show-defaults`

use quichem_babel::{parse_bool, FormatRegistry};
use quichem_core::Ast;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-treeviz", "ast-repr", "ast-json", "ast-quichem"];

/// Execute a named transform on a notation with optional extra parameters
///
/// # Returns
///
/// The transformed output as a string, or an error message
///
/// # Examples
///
/// ```ignore
/// let output = execute_transform("h2o", "ast-treeviz", &HashMap::new())?;
/// ```
pub fn execute_transform(
    notation: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let ast = quichem_core::parse(notation).map_err(|e| format!("Parse error: {e}"))?;
    tracing::debug!(transform = transform_name, "running transform");

    match transform_name {
        "ast-treeviz" => render(&ast, "treeviz", pick(extra_params, &["show-defaults"])),
        "ast-repr" => render(&ast, "repr", HashMap::new()).map(|text| text + "\n"),
        "ast-json" => {
            let json = if flag(extra_params, "pretty", true)? {
                serde_json::to_string_pretty(&ast)
            } else {
                serde_json::to_string(&ast)
            };
            json.map(|json| json + "\n")
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "ast-quichem" => render(&ast, "quichem", HashMap::new()).map(|text| text + "\n"),
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

/// Serializes with the named format of the default registry.
fn render(ast: &Ast, format: &str, options: HashMap<String, String>) -> Result<String, String> {
    FormatRegistry::default()
        .serialize_with_options(ast, format, &options)
        .map_err(|e| e.to_string())
}

/// The subset of `params` a format understands; the rest belong to other transforms.
fn pick(params: &HashMap<String, String>, keys: &[&str]) -> HashMap<String, String> {
    params
        .iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn flag(params: &HashMap<String, String>, key: &str, default: bool) -> Result<bool, String> {
    match params.get(key) {
        None => Ok(default),
        Some(value) => parse_bool(value)
            .ok_or_else(|| format!("Invalid boolean value '{value}' for --extra-{key}")),
    }
}
