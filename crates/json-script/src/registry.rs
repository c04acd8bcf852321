//! Operator, function and constant tables.
//!
//! A [`Registry`] is built once, extended during startup, and then only read.
//! Every `register_*` method takes `&mut self`, so a registry shared behind an
//! `Arc` can no longer be extended; hosts that share one must finish
//! registering first. Lookups never lock.

use crate::constants::all_constants;
use crate::error::ScriptError;
use crate::functions::all_functions;
use crate::node::Node;
use crate::operators::{all_operators, logical};
use crate::random::{RandomSource, ThreadRandom};
use crate::types::{Function, Operation, ShortCircuit};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Default)]
pub struct Registry {
    precedence: HashMap<String, u8>,
    right_associative: HashSet<String>,
    short_circuits: HashMap<String, ShortCircuit>,
    operator_bytes: HashSet<u8>,
    operations: HashMap<String, Operation>,
    functions: HashMap<String, Function>,
    constants: HashMap<String, Node>,
}

impl Registry {
    /// All built-ins, with `rand`/`randint` drawing from the thread-local
    /// generator.
    pub fn new() -> Self {
        Registry::with_random(Arc::new(ThreadRandom))
    }

    /// All built-ins, with `rand`/`randint` drawing from `random`.
    pub fn with_random(random: Arc<dyn RandomSource>) -> Self {
        let mut registry = Registry::empty();

        for op in all_operators() {
            registry.insert_operator(
                op.name.to_string(),
                op.precedence,
                op.right_associative,
                Arc::new(op.eval_fn),
            );
        }
        for rule in logical::short_circuits() {
            registry.short_circuits.insert(rule.token.to_string(), rule);
        }
        for def in all_functions(random) {
            registry.functions.insert(def.name.to_string(), def.eval_fn);
        }
        for constant in all_constants() {
            registry.constants.insert(constant.label().to_string(), constant);
        }

        log::debug!(
            "built registry: {} operators, {} functions, {} constants",
            registry.operations.len(),
            registry.functions.len(),
            registry.constants.len()
        );
        registry
    }

    /// No operators, functions or constants at all.
    pub fn empty() -> Self {
        Registry::default()
    }

    fn insert_operator(
        &mut self,
        alias: String,
        precedence: u8,
        right_associative: bool,
        operation: Operation,
    ) {
        if let Some(&first) = alias.as_bytes().first() {
            self.operator_bytes.insert(first);
        }
        // a replaced body no longer has the built-in's lazy semantics
        self.short_circuits.remove(&alias);
        if right_associative {
            self.right_associative.insert(alias.clone());
        } else {
            self.right_associative.remove(&alias);
        }
        self.precedence.insert(alias.clone(), precedence);
        self.operations.insert(alias, operation);
    }

    // ------------------------------------------------------------- Extension

    /// Adds or replaces a binary operator under the lower-cased `alias`.
    pub fn register_operator<F>(
        &mut self,
        alias: &str,
        precedence: u8,
        right_associative: bool,
        operation: F,
    ) -> Result<(), ScriptError>
    where
        F: Fn(&Node, &Node) -> Result<Node, ScriptError> + Send + Sync + 'static,
    {
        let alias = alias.to_lowercase();
        if alias.is_empty() {
            return Err(ScriptError::Domain(
                "operator alias must not be empty".to_string(),
            ));
        }
        if self.operations.contains_key(&alias) {
            log::debug!("replacing operator {:?}", alias);
        } else {
            log::debug!("registering operator {:?} (precedence {})", alias, precedence);
        }
        self.insert_operator(alias, precedence, right_associative, Arc::new(operation));
        Ok(())
    }

    /// Adds or replaces a function under the lower-cased `alias`.
    pub fn register_function<F>(&mut self, alias: &str, function: F)
    where
        F: Fn(&Node) -> Result<Node, ScriptError> + Send + Sync + 'static,
    {
        let alias = alias.to_lowercase();
        if self.functions.insert(alias.clone(), Arc::new(function)).is_some() {
            log::debug!("replaced function {:?}", alias);
        } else {
            log::debug!("registered function {:?}", alias);
        }
    }

    /// Adds or replaces a constant under the lower-cased `alias`.
    pub fn register_constant(&mut self, alias: &str, value: Node) {
        let alias = alias.to_lowercase();
        if self.constants.insert(alias.clone(), value).is_some() {
            log::debug!("replaced constant {:?}", alias);
        } else {
            log::debug!("registered constant {:?}", alias);
        }
    }

    // ----------------------------------------------------------- Tokenizing

    pub fn precedence(&self, token: &str) -> Option<u8> {
        self.precedence.get(&token.to_lowercase()).copied()
    }

    pub fn is_right_associative(&self, token: &str) -> bool {
        self.right_associative.contains(&token.to_lowercase())
    }

    /// The lazy evaluation rule for `token`, if it still has its built-in body.
    pub fn short_circuit(&self, token: &str) -> Option<ShortCircuit> {
        self.short_circuits.get(&token.to_lowercase()).copied()
    }

    /// Whether `byte` can begin an operator token.
    pub fn starts_operator(&self, byte: u8) -> bool {
        self.operator_bytes.contains(&byte.to_ascii_lowercase())
    }

    /// Every operator token, longest first, for longest-match tokenizing.
    ///
    /// Tokens of equal length come out in byte order; callers should not
    /// rely on that.
    pub fn operators_by_length(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.precedence.keys().map(String::as_str).collect();
        tokens.sort_by_key(|token| (Reverse(token.len()), *token));
        tokens
    }

    // -------------------------------------------------------------- Lookups

    pub fn operation(&self, token: &str) -> Option<&Operation> {
        self.operations.get(&token.to_lowercase())
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(&name.to_lowercase())
    }

    /// A detached copy of the named constant.
    pub fn constant(&self, name: &str) -> Option<Node> {
        self.constants.get(&name.to_lowercase()).cloned()
    }

    // ------------------------------------------------------------- Dispatch

    /// Applies the operator `token` to two evaluated operands.
    pub fn evaluate(&self, token: &str, left: &Node, right: &Node) -> Result<Node, ScriptError> {
        let operation = self
            .operation(token)
            .ok_or_else(|| ScriptError::UnsupportedOperator(token.to_string()))?;
        log::trace!("evaluate {} {:?} {}", left.label(), token, right.label());
        operation(left, right)
    }

    /// Applies the function `name` to an evaluated argument.
    pub fn call(&self, name: &str, arg: &Node) -> Result<Node, ScriptError> {
        let function = self
            .function(name)
            .ok_or_else(|| ScriptError::UnknownFunction(name.to_string()))?;
        log::trace!("call {}({})", name, arg.label());
        function(arg)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut functions: Vec<&String> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("Registry")
            .field("operators", &self.operators_by_length())
            .field("functions", &functions)
            .field("constants", &self.constants.len())
            .finish()
    }
}
