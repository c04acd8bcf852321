//! Built-in unary functions.

pub mod aggregate;
pub mod codec;
pub mod logical;
pub mod math;
pub mod sampling;

use crate::random::RandomSource;
use crate::types::FunctionDefinition;
use std::sync::Arc;

/// All built-in functions; `rand` and `randint` draw from `random`.
pub fn all_functions(random: Arc<dyn RandomSource>) -> Vec<FunctionDefinition> {
    let mut fns = Vec::new();
    fns.extend(math::functions());
    fns.extend(aggregate::functions());
    fns.extend(logical::functions());
    fns.extend(codec::functions());
    fns.extend(sampling::functions(random));
    fns
}
