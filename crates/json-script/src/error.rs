use crate::node::NodeType;
use json_script_base64::Base64Error;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("{label}: expected {expected}, found {found}")]
    TypeCoercion {
        label: String,
        expected: &'static str,
        found: NodeType,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("unknown constant: {0}")]
    UnknownConstant(String),

    #[error("invalid regular expression: {0}")]
    Regex(String),

    #[error("invalid base64: {0}")]
    Base64(Base64Error),

    #[error("cannot encode an empty string")]
    EmptyInput,

    #[error("{0}: result overflows")]
    Overflow(String),

    #[error("{0}")]
    Domain(String),
}

impl From<Base64Error> for ScriptError {
    fn from(err: Base64Error) -> Self {
        match err {
            Base64Error::EmptyInput => ScriptError::EmptyInput,
            other => ScriptError::Base64(other),
        }
    }
}

impl From<regex::Error> for ScriptError {
    fn from(err: regex::Error) -> Self {
        ScriptError::Regex(err.to_string())
    }
}
