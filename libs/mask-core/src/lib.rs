//! String masking and scrambling primitives for query-engine scalar functions.
//!
//! This crate provides three stateless string transformations and the catalog
//! descriptors a host uses to expose them as SQL scalar functions:
//! positional masking (`mask_string`), email masking (`mask_email`) and
//! character scrambling (`scramble_string`).
//!
//! All transformations work on Unicode scalar values, never on raw bytes, so
//! offsets count characters and every output is valid UTF-8.

// Module declarations
pub mod email;
pub mod functions;
pub mod mask;
pub mod scramble;

// Re-export key types
pub use email::{mask_email, EMAIL_MASK_CHAR};
pub use functions::{
    FunctionCatalog, FunctionError, LogicalType, MaskExtension, ScalarFunction, Value,
};
pub use mask::{mask, MaskChar, MaskCharError};
pub use scramble::{scramble, scramble_with};
