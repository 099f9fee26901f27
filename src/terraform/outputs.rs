//! `terraform output -json` document
//!
//! The document is a flat object of `{environment}_{field}` keys, each wrapping its
//! value as `{"value": ...}`. Lookups are tolerant: a missing key, a missing or null
//! `value`, an empty string, a wrapper of the wrong shape, or a value that is not a
//! hostname or IP literal all mean "unknown".

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{Environment, Role};
use crate::error::{InventoryError, Result};

/// Parsed Terraform outputs
#[derive(Debug, Clone, Default)]
pub struct TerraformOutputs {
    outputs: Map<String, Value>,
}

impl TerraformOutputs {
    /// Load outputs from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InventoryError::InputNotFound {
                path: display.clone(),
            },
            _ => InventoryError::InputReadFailed {
                path: display.clone(),
                reason: e.to_string(),
            },
        })?;

        Self::from_json(&content).map_err(|e| match e {
            InventoryError::MalformedInput { reason, .. } => InventoryError::MalformedInput {
                path: display,
                reason,
            },
            other => other,
        })
    }

    /// Parse outputs from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Wrap an already parsed JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(outputs) => Ok(Self { outputs }),
            other => Err(InventoryError::MalformedInput {
                path: "unknown".to_string(),
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Address of the host with `role` in `environment`, if known
    pub fn address(&self, environment: Environment, role: Role) -> Option<String> {
        lookup_keys(environment, role)
            .into_iter()
            .find_map(|key| self.value(&key))
    }

    /// Non-empty string held by the wrapper at `key`
    pub fn value(&self, key: &str) -> Option<String> {
        let wrapper = self.outputs.get(key)?;
        let Value::Object(fields) = wrapper else {
            tracing::warn!(
                key,
                "ignoring output: expected {{\"value\": ...}}, found {}",
                json_kind(wrapper)
            );
            return None;
        };

        match fields.get("value") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if !is_host_address(trimmed) {
                    tracing::warn!(
                        key,
                        "ignoring output: {trimmed:?} is not an IP address or hostname"
                    );
                    return None;
                }
                Some(trimmed.to_string())
            }
            Some(other) => {
                tracing::warn!(
                    key,
                    "ignoring output: expected a string value, found {}",
                    json_kind(other)
                );
                None
            }
        }
    }
}

/// Output keys consulted for an address, in order of preference
pub fn lookup_keys(environment: Environment, role: Role) -> Vec<String> {
    let suffixes: &[&str] = match role {
        Role::Bastion => &["ip", "public_ip", "hostname"],
        Role::Frontend | Role::Backend => &["private_ip", "ip", "hostname"],
    };
    suffixes
        .iter()
        .map(|suffix| format!("{environment}_{role}_{suffix}"))
        .collect()
}

/// Addresses end up in ssh options and shell commands, so only hostname and
/// IP literal characters are accepted
fn is_host_address(address: &str) -> bool {
    !address.starts_with('-')
        && address
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '_'))
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
