//! Container functions: `sum`, `avg`, `length`.

use crate::error::ScriptError;
use crate::node::{Node, NodeValue};
use crate::types::FunctionDefinition;

/// Sum of all children, stopping at the first child that is not numeric.
fn total(node: &Node) -> Result<f64, ScriptError> {
    node.children()
        .into_iter()
        .try_fold(0.0, |acc, child| Ok(acc + child.get_numeric()?))
}

fn sum_eval(node: &Node) -> Result<Node, ScriptError> {
    if !node.is_container() {
        return Ok(Node::null("sum"));
    }
    Ok(Node::numeric("sum", total(node)?))
}

/// Mean of the children; an empty container averages to 0.
fn avg_eval(node: &Node) -> Result<Node, ScriptError> {
    if !node.is_container() {
        return Ok(Node::null("avg"));
    }
    if node.size() == 0 {
        return Ok(Node::numeric("avg", 0.0));
    }
    Ok(Node::numeric("avg", total(node)? / node.size() as f64))
}

fn length_eval(node: &Node) -> Result<Node, ScriptError> {
    let len = match node.value() {
        NodeValue::Array(_) | NodeValue::Object(_) => node.size(),
        NodeValue::String(s) => s.chars().count(),
        _ => 1,
    };
    Ok(Node::numeric("length", len as f64))
}

pub fn functions() -> Vec<FunctionDefinition> {
    vec![
        FunctionDefinition::new("sum", sum_eval),
        FunctionDefinition::new("avg", avg_eval),
        FunctionDefinition::new("length", length_eval),
    ]
}
