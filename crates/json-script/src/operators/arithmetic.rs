//! Arithmetic operators: `** * / % + -`.

use super::{ADDITIVE, MULTIPLICATIVE, POWER};
use crate::error::ScriptError;
use crate::node::Node;
use crate::types::OperatorDefinition;
use crate::util;

fn power_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::floats(left, right)?;
    Ok(Node::numeric("power", l.powf(r)))
}

fn multiply_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::floats(left, right)?;
    Ok(Node::numeric("multiply", l * r))
}

fn divide_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::floats(left, right)?;
    if r == 0.0 {
        return Err(ScriptError::DivisionByZero);
    }
    Ok(Node::numeric("division", l / r))
}

fn remainder_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::ints(left, right)?;
    if r == 0 {
        return Err(ScriptError::DivisionByZero);
    }
    Ok(Node::numeric("remainder", l.wrapping_rem(r) as f64))
}

/// String concatenation when the left side is a string, numeric sum otherwise.
fn add_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    if left.is_string() {
        let (l, r) = util::strings(left, right)?;
        return Ok(Node::string("sum", [l, r].concat()));
    }
    let (l, r) = util::floats(left, right)?;
    Ok(Node::numeric("sum", l + r))
}

fn subtract_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let (l, r) = util::floats(left, right)?;
    Ok(Node::numeric("sub", l - r))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "**",
            precedence: POWER,
            right_associative: true,
            eval_fn: power_eval,
        },
        OperatorDefinition {
            name: "*",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: multiply_eval,
        },
        OperatorDefinition {
            name: "/",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: divide_eval,
        },
        OperatorDefinition {
            name: "%",
            precedence: MULTIPLICATIVE,
            right_associative: false,
            eval_fn: remainder_eval,
        },
        OperatorDefinition {
            name: "+",
            precedence: ADDITIVE,
            right_associative: false,
            eval_fn: add_eval,
        },
        OperatorDefinition {
            name: "-",
            precedence: ADDITIVE,
            right_associative: false,
            eval_fn: subtract_eval,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_of_min_by_minus_one_does_not_panic() {
        let l = Node::numeric("l", i64::MIN as f64);
        let r = Node::numeric("r", -1.0);
        assert_eq!(remainder_eval(&l, &r).unwrap().get_numeric().unwrap(), 0.0);
    }

    #[test]
    fn remainder_requires_integers() {
        let l = Node::numeric("l", 7.5);
        let r = Node::numeric("r", 2.0);
        assert!(matches!(
            remainder_eval(&l, &r),
            Err(ScriptError::TypeCoercion { .. })
        ));
    }
}
