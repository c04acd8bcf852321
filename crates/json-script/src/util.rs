//! Operand coercion helpers shared by the operator families.

use crate::error::ScriptError;
use crate::node::Node;

pub fn floats(left: &Node, right: &Node) -> Result<(f64, f64), ScriptError> {
    Ok((left.get_numeric()?, right.get_numeric()?))
}

pub fn ints(left: &Node, right: &Node) -> Result<(i64, i64), ScriptError> {
    Ok((left.get_integer()?, right.get_integer()?))
}

pub fn strings<'a>(left: &'a Node, right: &'a Node) -> Result<(&'a str, &'a str), ScriptError> {
    Ok((left.get_string()?, right.get_string()?))
}

/// Integer operand paired with an unsigned shift count.
pub fn shift_operands(left: &Node, right: &Node) -> Result<(i64, u64), ScriptError> {
    Ok((left.get_integer()?, right.get_uinteger()?))
}
