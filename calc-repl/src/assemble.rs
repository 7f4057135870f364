//! Translation of calculator keypad input into text the arithmetic grammar understands.

use std::f64::consts::PI;

/// The name that refers to the previous result.
pub const ANS: &str = "ans";

/// Writes a number so that the arithmetic grammar reads it back as the same value. The grammar
/// has no unary minus, so negative numbers, including `-0`, are written as a subtraction from
/// zero.
pub fn number_literal(value: f64) -> String {
    if value.is_sign_negative() {
        format!("(0-{})", -value)
    } else {
        format!("{}", value)
    }
}

/// Replaces the `√` glyph with `sqrt`, `π` with the value of pi, and `ans` with the previous
/// result, if there is one.
pub fn assemble(input: &str, ans: Option<f64>) -> String {
    let mut text = input.replace('√', "sqrt").replace('π', &number_literal(PI));
    if let Some(ans) = ans {
        text = text.replace(ANS, &number_literal(ans));
    }
    text
}
