//! Expression trees built by a parser and evaluated against a [`Registry`].

use crate::error::ScriptError;
use crate::node::Node;
use crate::registry::Registry;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An already-evaluated operand, e.g. a node selected by a path.
    Literal(Node),
    /// A named constant such as `pi`.
    Constant(String),
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        name: String,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(node: Node) -> Self {
        Expr::Literal(node)
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Expr::Constant(name.into())
    }

    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, arg: Expr) -> Self {
        Expr::Call {
            name: name.into(),
            arg: Box::new(arg),
        }
    }
}

impl Registry {
    /// Evaluates `expr` bottom-up.
    ///
    /// The right subtree of `&&` is evaluated only when the left side is
    /// truthy, and that of `||` only when it is falsy. A skipped subtree is
    /// never run, so its errors are never seen. Once a host registers its
    /// own operation under either token, both operands are always evaluated
    /// and passed to it.
    pub fn eval(&self, expr: &Expr) -> Result<Node, ScriptError> {
        match expr {
            Expr::Literal(node) => Ok(node.clone()),
            Expr::Constant(name) => self
                .constant(name)
                .ok_or_else(|| ScriptError::UnknownConstant(name.clone())),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                if let Some(rule) = self.short_circuit(op) {
                    if left.truthy() == rule.stops_on {
                        return Ok(Node::bool(rule.label, rule.stops_on));
                    }
                }
                let right = self.eval(right)?;
                self.evaluate(op, &left, &right)
            }
            Expr::Call { name, arg } => {
                let arg = self.eval(arg)?;
                self.call(name, &arg)
            }
        }
    }
}
