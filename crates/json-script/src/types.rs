use crate::error::ScriptError;
use crate::node::Node;
use std::sync::Arc;

/// A binary operation bound to an operator token.
pub type Operation = Arc<dyn Fn(&Node, &Node) -> Result<Node, ScriptError> + Send + Sync>;

/// A unary function bound to a function name.
pub type Function = Arc<dyn Fn(&Node) -> Result<Node, ScriptError> + Send + Sync>;

/// Built-in binary operator signature.
pub type BinaryFn = fn(&Node, &Node) -> Result<Node, ScriptError>;

/// Built-in unary function signature.
pub type UnaryFn = fn(&Node) -> Result<Node, ScriptError>;

/// An operator as stored in a registry: token, grouping metadata and body.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub precedence: u8,
    pub right_associative: bool,
    pub eval_fn: BinaryFn,
}

/// Lazy evaluation rule for a logical operator token.
///
/// When the left operand's truthiness equals `stops_on`, the right subtree is
/// skipped and the result is `Bool(stops_on)` labelled `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCircuit {
    pub token: &'static str,
    pub label: &'static str,
    pub stops_on: bool,
}

/// A named function as stored in a registry.
pub struct FunctionDefinition {
    pub name: &'static str,
    pub eval_fn: Function,
}

impl FunctionDefinition {
    pub fn new(name: &'static str, eval_fn: UnaryFn) -> Self {
        FunctionDefinition {
            name,
            eval_fn: Arc::new(eval_fn),
        }
    }
}
