//! Help-text catalog.
//!
//! All user-facing strings live here, separate from the schema shape: the
//! program description, per-argument help, and per-command help. The
//! catalog derives [`serde`] so applications can declare their help text in
//! YAML or JSON alongside the schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Program description plus help tables for arguments and commands.
///
/// Missing entries are not errors at this level: lookups return `None` and
/// the build engine decides how to degrade (arguments warn and fall back to
/// empty help, commands fall back silently).
///
/// # Examples
///
/// ```
/// use argtree_core::HelpCatalog;
///
/// let catalog = HelpCatalog::new("An example calculator")
///     .with_arg_help("offset", "Numerical offset for output")
///     .with_command_help("sum", "Reduce numbers to their sum");
///
/// assert_eq!(catalog.arg_help("offset"), Some("Numerical offset for output"));
/// assert_eq!(catalog.arg_help("missing"), None);
/// assert_eq!(catalog.command_help("sum"), Some("Reduce numbers to their sum"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCatalog {
    /// Description shown on the root command.
    pub program: String,
    /// Help text per argument name.
    #[serde(default)]
    pub args: BTreeMap<String, String>,
    /// Help text per command name.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
}

impl HelpCatalog {
    /// Creates a catalog with the given program description.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Default::default()
        }
    }

    /// Adds help text for an argument name.
    pub fn with_arg_help(mut self, name: &str, help: &str) -> Self {
        self.args.insert(name.to_string(), help.to_string());
        self
    }

    /// Adds help text for a command name.
    pub fn with_command_help(mut self, name: &str, help: &str) -> Self {
        self.commands.insert(name.to_string(), help.to_string());
        self
    }

    /// Looks up help text for an argument name.
    pub fn arg_help(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// Looks up help text for a command name.
    pub fn command_help(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_deserializes_from_yaml() {
        let catalog: HelpCatalog = serde_yaml::from_str(
            "\
program: An example program
args:
  offset: Numerical offset for output
commands:
  sum: Reduce numbers to their sum
",
        )
        .unwrap();

        assert_eq!(catalog.program, "An example program");
        assert_eq!(catalog.arg_help("offset"), Some("Numerical offset for output"));
        assert_eq!(catalog.command_help("sum"), Some("Reduce numbers to their sum"));
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let catalog: HelpCatalog = serde_yaml::from_str("program: bare").unwrap();
        assert!(catalog.args.is_empty());
        assert!(catalog.commands.is_empty());
    }
}
