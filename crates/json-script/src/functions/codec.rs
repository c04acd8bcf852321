//! `b64encode` / `b64decode` over string nodes.

use crate::error::ScriptError;
use crate::node::Node;
use crate::types::FunctionDefinition;
use json_script_base64::{from_base64, to_base64};

/// Encodes the UTF-8 bytes of a string. Non-strings give null.
fn b64encode_eval(node: &Node) -> Result<Node, ScriptError> {
    if !node.is_string() {
        return Ok(Node::null("base64_encode"));
    }
    let encoded = to_base64(node.get_string()?.as_bytes())?;
    Ok(Node::string("base64_encode", encoded))
}

/// Decodes to a string; the decoded bytes must be UTF-8. Non-strings give null.
fn b64decode_eval(node: &Node) -> Result<Node, ScriptError> {
    if !node.is_string() {
        return Ok(Node::null("base64_decode"));
    }
    let bytes = from_base64(node.get_string()?)?;
    let decoded = String::from_utf8(bytes).map_err(|err| {
        ScriptError::Domain(format!("b64decode: decoded bytes are not UTF-8: {}", err))
    })?;
    Ok(Node::string("base64_decode", decoded))
}

pub fn functions() -> Vec<FunctionDefinition> {
    vec![
        FunctionDefinition::new("b64encode", b64encode_eval),
        FunctionDefinition::new("b64decode", b64decode_eval),
    ]
}
