//! `rand` and `randint`, bound to an injected [`RandomSource`].

use crate::error::ScriptError;
use crate::node::Node;
use crate::random::RandomSource;
use crate::types::FunctionDefinition;
use std::sync::Arc;

pub fn functions(random: Arc<dyn RandomSource>) -> Vec<FunctionDefinition> {
    let source = Arc::clone(&random);
    let rand = move |node: &Node| -> Result<Node, ScriptError> {
        let scale = node.get_numeric()?;
        Ok(Node::numeric("rand", source.next_f64() * scale))
    };

    let randint = move |node: &Node| -> Result<Node, ScriptError> {
        let bound = node.get_integer()?;
        if bound <= 0 {
            return Err(ScriptError::Domain(format!(
                "randint: bound must be positive, got {}",
                bound
            )));
        }
        Ok(Node::numeric(
            "randint",
            random.next_below(bound as u64) as f64,
        ))
    };

    vec![
        FunctionDefinition {
            name: "rand",
            eval_fn: Arc::new(rand),
        },
        FunctionDefinition {
            name: "randint",
            eval_fn: Arc::new(randint),
        },
    ]
}
