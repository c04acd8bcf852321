//! Comparison operators: `== != < <= > >= =~`.
//!
//! Cross-type rules live on [`Node`]: values of different types are unequal
//! and unordered.

use super::COMPARISON;
use crate::error::ScriptError;
use crate::node::Node;
use crate::types::{BinaryFn, OperatorDefinition};
use regex::Regex;

fn eq_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("eq", left.eq_node(right)))
}

fn ne_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("neq", !left.eq_node(right)))
}

fn lt_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("lt", left.lt(right)?))
}

fn le_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("le", left.le(right)?))
}

fn gt_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("gt", left.gt(right)?))
}

fn ge_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("ge", left.ge(right)?))
}

/// True when the pattern on the right matches anywhere in the left string.
fn regex_eval(left: &Node, right: &Node) -> Result<Node, ScriptError> {
    let subject = left.get_string()?;
    let pattern = Regex::new(right.get_string()?)?;
    Ok(Node::bool("match", pattern.is_match(subject)))
}

pub fn operators() -> Vec<OperatorDefinition> {
    let def = |name: &'static str, eval_fn: BinaryFn| OperatorDefinition {
        name,
        precedence: COMPARISON,
        right_associative: false,
        eval_fn,
    };
    vec![
        def("==", eq_eval),
        def("!=", ne_eval),
        def("<", lt_eval),
        def("<=", le_eval),
        def(">", gt_eval),
        def(">=", ge_eval),
        def("=~", regex_eval),
    ]
}
