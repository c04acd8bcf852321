//! Integer operators: `<< >> & &^ | ^`.

use super::{ADDITIVE, MULTIPLICATIVE};
use crate::error::ScriptError;
use crate::node::Node;
use crate::types::OperatorDefinition;
use crate::util;

fn left_shift_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, shift) = util::shift_operands(left, right)?;
    let result = u32::try_from(shift)
        .ok()
        .and_then(|s| l.checked_shl(s))
        .unwrap_or(0);
    Ok(Node::numeric("left shift", result as f64))
}

/// Arithmetic shift; counts of 64 and above leave only the sign.
fn right_shift_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, shift) = util::shift_operands(left, right)?;
    let result = u32::try_from(shift)
        .ok()
        .and_then(|s| l.checked_shr(s))
        .unwrap_or(if l < 0 { -1 } else { 0 });
    Ok(Node::numeric("right shift", result as f64))
}

fn and_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::ints(left, right)?;
    Ok(Node::numeric("bitwise AND", (l & r) as f64))
}

fn and_not_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::ints(left, right)?;
    Ok(Node::numeric("bit clear (AND NOT)", (l & !r) as f64))
}

fn or_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::ints(left, right)?;
    Ok(Node::numeric("bitwise OR", (l | r) as f64))
}

fn xor_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::ints(left, right)?;
    Ok(Node::numeric("bitwise XOR", (l ^ r) as f64))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "<<",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: left_shift_eval,
        },
        OperatorDefinition {
            name: ">>",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: right_shift_eval,
        },
        OperatorDefinition {
            name: "&",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: and_eval,
        },
        OperatorDefinition {
            name: "&^",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: and_not_eval,
        },
        OperatorDefinition {
            name: "|",
            precedence: ADDITIVE,
            right_associative: false,
            eval_fn: or_eval,
        },
        OperatorDefinition {
            name: "^",
            precedence: ADDITIVE,
            right_associative: false,
            eval_fn: xor_eval,
        },
    ]
}
