//! Argument construction specs.
//!
//! An [`ArgSpec`] is what a configurator returns for a recognized argument
//! name: everything the CLI layer needs to materialize a positional or a
//! flag on a command, minus the help text (which is looked up separately in
//! the help catalog).

/// Value type for flags and positionals.
///
/// Determines the value parser the CLI layer installs for the argument.
///
/// # Examples
///
/// ```
/// use argtree_core::ValueType;
///
/// let vt = ValueType::default();
/// assert_eq!(vt, ValueType::Any);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    /// Boolean flag (no value).
    Bool,
    /// String value.
    String,
    /// Numeric value.
    Number,
    /// File path.
    File,
    /// Unvalidated value (the default).
    #[default]
    Any,
}

/// Construction spec for one command-line argument.
///
/// Covers both positionals (no short/long form) and flags. Use the
/// constructors [`positional`](ArgSpec::positional),
/// [`option`](ArgSpec::option), and [`flag`](ArgSpec::flag), then chain
/// builder methods.
///
/// # Examples
///
/// ```
/// use argtree_core::{ArgSpec, ValueType};
///
/// // Required positional: `left`
/// let left = ArgSpec::positional("left", ValueType::Number);
/// assert!(left.required);
/// assert!(left.is_positional());
///
/// // Option with a default: `-o/--offset 0`
/// let offset = ArgSpec::option(Some('o'), "offset", ValueType::Number)
///     .with_default("0");
/// assert!(!offset.required);
/// assert_eq!(offset.default.as_deref(), Some("0"));
///
/// // Variadic positional: one or more numbers
/// let nums = ArgSpec::positional("numeric_args", ValueType::Number).variadic();
/// assert!(nums.variadic);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    /// Identifier the parsed value is retrieved under.
    pub name: String,
    /// Short flag form (e.g. `-o`), if any.
    pub short: Option<char>,
    /// Long flag form (e.g. `--offset`), if any.
    pub long: Option<String>,
    /// Type of value the argument accepts.
    pub value_type: ValueType,
    /// Default value in string form, parsed by the CLI layer.
    pub default: Option<String>,
    /// Whether the argument must be supplied.
    pub required: bool,
    /// Whether the argument accepts one-or-more values.
    pub variadic: bool,
}

impl ArgSpec {
    /// Creates a required positional argument.
    pub fn positional(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            long: None,
            value_type,
            default: None,
            required: true,
            variadic: false,
        }
    }

    /// Creates an optional flag that takes a value.
    ///
    /// The long form doubles as the retrieval identifier.
    pub fn option(short: Option<char>, long: &str, value_type: ValueType) -> Self {
        Self {
            name: long.to_string(),
            short,
            long: Some(long.to_string()),
            value_type,
            default: None,
            required: false,
            variadic: false,
        }
    }

    /// Creates a boolean flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtree_core::{ArgSpec, ValueType};
    ///
    /// let verbose = ArgSpec::flag(Some('v'), "verbose");
    /// assert_eq!(verbose.value_type, ValueType::Bool);
    /// ```
    pub fn flag(short: Option<char>, long: &str) -> Self {
        Self {
            name: long.to_string(),
            short,
            long: Some(long.to_string()),
            value_type: ValueType::Bool,
            default: None,
            required: false,
            variadic: false,
        }
    }

    /// Sets a default value and makes the argument optional.
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self.required = false;
        self
    }

    /// Marks the argument as accepting one or more values.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Marks the argument as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Returns `true` when the argument has neither short nor long form.
    pub fn is_positional(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_is_required_by_default() {
        let spec = ArgSpec::positional("operand", ValueType::Number);
        assert!(spec.required);
        assert!(spec.is_positional());
    }

    #[test]
    fn test_default_clears_required() {
        let spec = ArgSpec::positional("scale", ValueType::Number).with_default("1");
        assert!(!spec.required);
        assert_eq!(spec.default.as_deref(), Some("1"));
    }

    #[test]
    fn test_option_retrieves_under_long_name() {
        let spec = ArgSpec::option(Some('s'), "scale", ValueType::Number);
        assert_eq!(spec.name, "scale");
        assert_eq!(spec.long.as_deref(), Some("scale"));
        assert!(!spec.is_positional());
    }
}
