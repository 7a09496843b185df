//! Error types for tree construction and dispatch.
//!
//! Build-time errors are configuration mistakes: they fail fast during the
//! single traversal pass and are not retryable. Either the full tree is
//! returned or no tree is returned; there is no partial-success state.

use argtree_core::SchemaError;
use thiserror::Error;

/// Errors raised while building a command tree.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An argument name in the schema has no constructor on the
    /// configurator.
    #[error("unknown argument {name:?} for configurator {configurator}")]
    UnknownArgument {
        /// The unresolved argument name.
        name: String,
        /// Type name of the configurator that was consulted.
        configurator: String,
    },

    /// A leaf's dotted path has no registered handler.
    #[error("no handler registered for path {path:?}; registered paths: {registered:?}")]
    UnknownHandler {
        /// The path that failed to resolve.
        path: String,
        /// All currently registered paths, sorted.
        registered: Vec<String>,
    },

    /// A handler is already registered for the path.
    #[error("handler already registered for path {0:?}")]
    DuplicateHandler(String),

    /// The schema failed structural validation.
    #[error("invalid schema: {}", format_schema_errors(.0))]
    InvalidSchema(Vec<SchemaError>),
}

fn format_schema_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised while dispatching parsed arguments against a built tree.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Argument parsing failed (also covers `--help`/`--version` exits;
    /// callers typically hand these back to `clap::Error::exit`).
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// A command without a bound handler was selected and no subcommand
    /// was named.
    #[error("command {command:?} requires a subcommand")]
    Incomplete {
        /// Name of the command the invocation stopped at.
        command: String,
    },
}
