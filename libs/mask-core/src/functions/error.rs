use thiserror::Error;

use super::LogicalType;
use crate::mask::MaskCharError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("Function does not exist: {0}")]
    UnknownFunction(String),

    #[error("{function} expects {expected} arguments, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("{function} argument {position} must be {expected}, got {actual}")]
    ArgumentType {
        function: String,
        position: usize,
        expected: LogicalType,
        actual: LogicalType,
    },

    #[error("Invalid mask character: {0}")]
    InvalidMaskChar(#[from] MaskCharError),
}
