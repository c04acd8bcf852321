//! Logical operators: `&& ||`.
//!
//! Both operands are already evaluated when these run; skipping the right
//! operand's subtree is done by [`Registry::eval`](crate::Registry::eval)
//! following [`short_circuits`].

use super::{AND, OR};
use crate::error::ScriptError;
use crate::node::Node;
use crate::types::{OperatorDefinition, ShortCircuit};

fn and_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("AND", left.truthy() && right.truthy()))
}

fn or_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("OR", left.truthy() || right.truthy()))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "&&",
            precedence: AND,
            right_associative: false,
            eval_fn: and_eval,
        },
        OperatorDefinition {
            name: "||",
            precedence: OR,
            right_associative: false,
            eval_fn: or_eval,
        },
    ]
}

/// `&&` stops on a falsy left operand, `||` on a truthy one.
pub fn short_circuits() -> Vec<ShortCircuit> {
    vec![
        ShortCircuit {
            token: "&&",
            label: "AND",
            stops_on: false,
        },
        ShortCircuit {
            token: "||",
            label: "OR",
            stops_on: true,
        },
    ]
}
