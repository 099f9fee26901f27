//! SSH connection parameters rendered as `ansible_ssh_common_args`

/// A single `-o Name=value` SSH option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshOption {
    pub name: String,
    pub value: String,
}

/// Ordered SSH options attached to a host reached through a bastion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParameters {
    options: Vec<SshOption>,
}

impl ConnectionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option, keeping insertion order
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(SshOption {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first option with the given name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether these parameters route the connection through another host
    pub fn is_jump(&self) -> bool {
        self.get("ProxyJump").is_some() || self.get("ProxyCommand").is_some()
    }

    /// Render as a single command line fragment.
    ///
    /// Values containing whitespace are wrapped in double quotes so Ansible's
    /// shell-style splitting keeps them as one argument.
    pub fn to_common_args(&self) -> String {
        self.options
            .iter()
            .map(|o| format!("-o {}={}", o.name, quote_value(&o.value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote_value(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
