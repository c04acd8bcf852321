//! Evaluation core for JSONPath filter scripts.
//!
//! # Overview
//!
//! A host parses an expression such as `@.price < 10 && @.qty > 0` into an
//! [`Expr`] tree, using the precedence and tokenizing tables exposed by a
//! [`Registry`], and then evaluates the tree against that registry. The
//! registry holds the binary operators, the unary functions and the named
//! constants; all of them can be extended at startup.
//!
//! # Example
//!
//! ```
//! use json_script::{Expr, Node, Registry};
//! use serde_json::json;
//!
//! let registry = Registry::new();
//! let item = Node::from(json!({"price": 8, "qty": 3}));
//! let price = Node::from(json!(8));
//!
//! let expr = Expr::binary(
//!     "&&",
//!     Expr::binary("<", Expr::literal(price), Expr::literal(Node::numeric("ten", 10.0))),
//!     Expr::binary(">", Expr::call("length", Expr::literal(item)), Expr::literal(Node::numeric("zero", 0.0))),
//! );
//! assert_eq!(registry.eval(&expr).unwrap(), Node::bool("expected", true));
//! ```
//!
//! # Concurrency
//!
//! Evaluation only reads the registry and may run on many threads at once.
//! Registration needs `&mut Registry` and therefore cannot overlap with
//! evaluation on the same instance. The random source given to
//! [`Registry::with_random`] is called from every evaluating thread; its
//! thread-safety is the host's concern.

pub mod constants;
pub mod error;
pub mod expr;
pub mod functions;
pub mod node;
pub mod operators;
pub mod random;
pub mod registry;
pub mod types;
pub mod util;

pub use error::ScriptError;
pub use expr::Expr;
pub use node::{Node, NodeType, NodeValue};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use registry::Registry;
pub use types::{Function, Operation};
