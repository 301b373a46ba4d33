//! Extrude submenu state (data only)
//!
//! The height text box accepts plain numbers and arithmetic expressions
//! (`2.5`, `5 / 2`, `PI * 2`). Integer literals are evaluated as floats, so
//! division never truncates. Rendering lives in ui/extrude_menu.rs in the
//! binary crate.

use evalexpr::{build_operator_tree, ContextWithMutableVariables, HashMapContext, Value};
use thiserror::Error;

/// Why the height text could not be turned into a number
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeightInputError {
    #[error("enter an extrusion height")]
    Empty,

    #[error("cannot parse height: {0}")]
    Parse(String),

    #[error("height must be a number")]
    NotANumber,
}

/// Extrude submenu: toggled by the Extrude button, holds the height text
#[derive(Debug, Clone)]
pub struct ExtrudeDialog {
    pub open: bool,
    pub height_text: String,
}

impl Default for ExtrudeDialog {
    fn default() -> Self {
        Self {
            open: false,
            height_text: "1.0".to_string(),
        }
    }
}

impl ExtrudeDialog {
    /// Show or hide the submenu
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Evaluate the height text. Range checks are left to the extrusion builder.
    pub fn parse_height(&self) -> Result<f64, HeightInputError> {
        parse_height(&self.height_text)
    }
}

/// Evaluate a height expression to a number
pub fn parse_height(text: &str) -> Result<f64, HeightInputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(HeightInputError::Empty);
    }
    if let Ok(value) = text.parse::<f64>() {
        return Ok(value);
    }

    let mut context = HashMapContext::new();
    context
        .set_value("PI".to_string(), Value::Float(std::f64::consts::PI))
        .ok();

    let tree = build_operator_tree(&float_literals(text)).map_err(|e| HeightInputError::Parse(e.to_string()))?;
    let value = tree
        .eval_with_context(&context)
        .map_err(|e| HeightInputError::Parse(e.to_string()))?;

    match value {
        Value::Float(f) => Ok(f),
        Value::Int(i) => Ok(i as f64),
        _ => Err(HeightInputError::NotANumber),
    }
}

/// Rewrite integer literals as floats (`5` becomes `5.0`). Digits inside
/// identifiers and literals already carrying a fraction or exponent are kept.
fn float_literals(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let after_word =
            i > 0 && (chars[i - 1].is_alphanumeric() || matches!(chars[i - 1], '_' | '.'));
        if !c.is_ascii_digit() || after_word {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        let mut is_float = false;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i < chars.len() && chars[i] == '.' {
            is_float = true;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
        if i < chars.len() && matches!(chars[i], 'e' | 'E') {
            is_float = true;
            i += 1;
            if i < chars.len() && matches!(chars[i], '+' | '-') {
                i += 1;
            }
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
        out.extend(&chars[start..i]);
        if !is_float {
            out.push_str(".0");
        }
    }
    out
}
