use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::{FunctionError, ScalarFunction, Value};

/// Registry of scalar functions keyed by name.
#[derive(Debug, Clone, Default)]
pub struct FunctionCatalog {
    functions: HashMap<&'static str, ScalarFunction>,
}

impl FunctionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `function`, replacing any earlier entry with the same name.
    pub fn register(&mut self, function: ScalarFunction) {
        let name = function.name();
        if self.functions.insert(name, function).is_some() {
            warn!(function = name, "replaced existing scalar function");
        } else {
            debug!(function = name, "registered scalar function");
        }
    }

    pub fn get(&self, name: &str) -> Result<&ScalarFunction, FunctionError> {
        self.functions
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, FunctionError> {
        self.get(name)?.invoke(args)
    }

    pub fn execute(&self, name: &str, rows: &[Vec<Value>]) -> Result<Vec<Value>, FunctionError> {
        let function = self.get(name)?;
        let results = function.execute(rows)?;
        debug!(function = name, rows = rows.len(), "executed scalar function");
        Ok(results)
    }
}

/// The masking extension: registers `mask_string`, `mask_email` and
/// `scramble_string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskExtension;

impl MaskExtension {
    pub const NAME: &'static str = "mask";

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn load(&self, catalog: &mut FunctionCatalog) {
        catalog.register(ScalarFunction::mask_string());
        catalog.register(ScalarFunction::mask_email());
        catalog.register(ScalarFunction::scramble_string());

        info!(
            extension = Self::NAME,
            version = self.version(),
            "extension loaded"
        );
    }

    /// A fresh catalog holding only this extension's functions.
    pub fn catalog() -> FunctionCatalog {
        let mut catalog = FunctionCatalog::new();
        MaskExtension.load(&mut catalog);
        catalog
    }
}
