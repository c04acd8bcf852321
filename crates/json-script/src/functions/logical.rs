use crate::error::ScriptError;
use crate::node::Node;
use crate::types::FunctionDefinition;

fn not_eval(node: &Node) -> Result<Node, ScriptError> {
    Ok(Node::bool("not", !node.truthy()))
}

pub fn functions() -> Vec<FunctionDefinition> {
    vec![FunctionDefinition::new("not", not_eval)]
}
