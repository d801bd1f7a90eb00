//! Scalar function descriptors that let a query-engine host call the masking
//! primitives row by row.

mod catalog;
mod error;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::{FunctionCatalog, MaskExtension};
pub use error::FunctionError;

use crate::{email::mask_email, mask::mask, scramble::scramble, MaskChar};

pub const MASK_STRING: &str = "mask_string";
pub const MASK_EMAIL: &str = "mask_email";
pub const SCRAMBLE_STRING: &str = "scramble_string";

/// Argument and return types understood by the masking functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalType {
    Varchar,
    Integer,
}

impl LogicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::Varchar => "VARCHAR",
            LogicalType::Integer => "INTEGER",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single argument or result cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Varchar(String),
}

impl Value {
    pub fn logical_type(&self) -> Option<LogicalType> {
        match self {
            Value::Null => None,
            Value::Integer(_) => Some(LogicalType::Integer),
            Value::Varchar(_) => Some(LogicalType::Varchar),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Varchar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Varchar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Varchar(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

/// Row body of a scalar function. Arguments are non-null and already match
/// the declared argument types.
type ScalarBody = fn(&[Value]) -> Result<String, FunctionError>;

/// A named scalar function with a fixed signature.
#[derive(Clone)]
pub struct ScalarFunction {
    name: &'static str,
    arguments: &'static [LogicalType],
    return_type: LogicalType,
    body: ScalarBody,
}

impl fmt::Debug for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarFunction")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("return_type", &self.return_type)
            .finish()
    }
}

impl ScalarFunction {
    pub fn new(
        name: &'static str,
        arguments: &'static [LogicalType],
        return_type: LogicalType,
        body: ScalarBody,
    ) -> Self {
        Self {
            name,
            arguments,
            return_type,
            body,
        }
    }

    /// `mask_string(input, start, length, mask)`
    pub fn mask_string() -> Self {
        Self::new(
            MASK_STRING,
            &[
                LogicalType::Varchar,
                LogicalType::Integer,
                LogicalType::Integer,
                LogicalType::Varchar,
            ],
            LogicalType::Varchar,
            |args| {
                let input = varchar(&args[0]);
                let start = integer(&args[1]);
                let length = integer(&args[2]);
                let mask_char: MaskChar = varchar(&args[3]).parse()?;
                Ok(mask(input, start, length, mask_char))
            },
        )
    }

    /// `mask_email(email)`
    pub fn mask_email() -> Self {
        Self::new(
            MASK_EMAIL,
            &[LogicalType::Varchar],
            LogicalType::Varchar,
            |args| Ok(mask_email(varchar(&args[0]))),
        )
    }

    /// `scramble_string(input)`
    pub fn scramble_string() -> Self {
        Self::new(
            SCRAMBLE_STRING,
            &[LogicalType::Varchar],
            LogicalType::Varchar,
            |args| Ok(scramble(varchar(&args[0]))),
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arguments(&self) -> &'static [LogicalType] {
        self.arguments
    }

    pub fn return_type(&self) -> LogicalType {
        self.return_type
    }

    /// Checks that a call with `types` matches this function's signature.
    pub fn bind(&self, types: &[LogicalType]) -> Result<(), FunctionError> {
        self.check_arity(types.len())?;

        for (position, (expected, actual)) in self.arguments.iter().zip(types).enumerate() {
            if expected != actual {
                return Err(self.type_mismatch(position, *expected, *actual));
            }
        }

        Ok(())
    }

    /// Evaluates one row. Any `Null` argument produces `Null`.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, FunctionError> {
        self.check_arity(args.len())?;

        if args.iter().any(Value::is_null) {
            return Ok(Value::Null);
        }

        for (position, (expected, arg)) in self.arguments.iter().zip(args).enumerate() {
            if let Some(actual) = arg.logical_type() {
                if actual != *expected {
                    return Err(self.type_mismatch(position, *expected, actual));
                }
            }
        }

        (self.body)(args).map(Value::Varchar)
    }

    /// Evaluates every row of a batch independently, one result per row.
    pub fn execute(&self, rows: &[Vec<Value>]) -> Result<Vec<Value>, FunctionError> {
        rows.iter().map(|row| self.invoke(row)).collect()
    }

    fn check_arity(&self, actual: usize) -> Result<(), FunctionError> {
        if actual != self.arguments.len() {
            return Err(FunctionError::ArgumentCount {
                function: self.name.to_string(),
                expected: self.arguments.len(),
                actual,
            });
        }
        Ok(())
    }

    fn type_mismatch(
        &self,
        position: usize,
        expected: LogicalType,
        actual: LogicalType,
    ) -> FunctionError {
        FunctionError::ArgumentType {
            function: self.name.to_string(),
            position: position + 1,
            expected,
            actual,
        }
    }
}

// Bodies only run after `invoke` has checked types, so these never fall back.
fn varchar(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn integer(value: &Value) -> i64 {
    value.as_integer().unwrap_or_default()
}
