//! Built-in binary operators.
//!
//! Precedence, highest first. Operators on one level group left to right,
//! except `**` which groups right to left.
//!
//! ```text
//!     6   **
//!     5   *  /  %  <<  >>  &  &^
//!     4   +  -  |  ^
//!     3   ==  !=  <  <=  >  >=  =~
//!     2   &&
//!     1   ||
//! ```

pub mod arithmetic;
pub mod bitwise;
pub mod comparison;
pub mod logical;

use crate::types::OperatorDefinition;

pub const POWER: u8 = 6;
pub const MULTIPLICATIVE: u8 = 5;
pub const ADDITIVE: u8 = 4;
pub const COMPARISON: u8 = 3;
pub const AND: u8 = 2;
pub const OR: u8 = 1;

/// All built-in operators.
pub fn all_operators() -> Vec<OperatorDefinition> {
    let mut ops = Vec::new();
    ops.extend(arithmetic::operators());
    ops.extend(bitwise::operators());
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops
}
