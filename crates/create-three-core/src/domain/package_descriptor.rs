//! The template's `package.json`.

use serde_json::{Map, Value};

use crate::domain::{error::DomainError, package_name::PackageName};

/// File name of the package descriptor inside a template.
pub const PACKAGE_DESCRIPTOR: &str = "package.json";

/// A parsed `package.json` object. Key order is preserved so the rewritten
/// file only differs in its `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDescriptor {
    fields: Map<String, Value>,
}

impl PackageDescriptor {
    pub fn parse(bytes: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| DomainError::InvalidPackageDescriptor(e.to_string()))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DomainError::InvalidPackageDescriptor(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Set the `name` field, keeping its position when it already exists.
    pub fn set_name(&mut self, name: &PackageName) {
        self.fields
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    /// Two-space indented JSON followed by a newline.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut out = serde_json::to_string_pretty(&self.fields)
            .map_err(|e| DomainError::InvalidPackageDescriptor(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
