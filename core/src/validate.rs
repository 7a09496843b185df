//! Structural schema validation.
//!
//! The schema type itself cannot express every invariant the build engine
//! relies on: branch keys must be unique, the shared-argument marker must
//! hold an argument list, names must be usable as path segments, and the
//! top level must name exactly one program. Validation runs before any
//! command node is created, so a malformed schema is an explicit error
//! rather than a half-built tree.
//!
//! # Examples
//!
//! ```
//! use argtree_core::{SchemaNode, validate_schema};
//!
//! let schema = SchemaNode::branch().with_child(
//!     "calc",
//!     SchemaNode::branch().with_child("sum", SchemaNode::leaf(["numeric_args"])),
//! );
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Two program entries at the top level
//! let bad = SchemaNode::branch()
//!     .with_child("calc", SchemaNode::branch())
//!     .with_child("calc2", SchemaNode::branch());
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::schema::{SHARED_ARGS_KEY, SchemaNode, join_path};

/// Structural problems found in a schema.
///
/// `path` fields refer to the dotted path of the enclosing command; the
/// empty string denotes the program root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The top level must map exactly one program name to its root node.
    #[error("top level must contain exactly one program entry, found {0}")]
    RootArity(usize),
    /// The top level is an argument list instead of a program mapping.
    #[error("top level must be a command mapping, not an argument list")]
    RootIsLeaf,
    /// A command name is empty or whitespace-only.
    #[error("empty command name under {path:?}")]
    EmptyCommandName {
        /// Dotted path of the enclosing command.
        path: String,
    },
    /// A command name contains the path separator.
    #[error("command name {name:?} under {path:?} contains '.'")]
    DottedCommandName {
        /// Dotted path of the enclosing command.
        path: String,
        /// The offending name.
        name: String,
    },
    /// Two children of the same branch share a name.
    #[error("duplicate command {name:?} under {path:?}")]
    DuplicateChild {
        /// Dotted path of the enclosing command.
        path: String,
        /// The duplicated name.
        name: String,
    },
    /// The shared-argument marker holds nested commands instead of an
    /// argument list.
    #[error("shared-argument marker under {path:?} must hold an argument list")]
    SharedArgsBranch {
        /// Dotted path of the enclosing command.
        path: String,
    },
    /// An argument name in a leaf is empty or whitespace-only.
    #[error("empty argument name in command {path:?}")]
    EmptyArgName {
        /// Dotted path of the command the argument belongs to.
        path: String,
    },
}

/// Validates a schema, returning every structural error found.
///
/// An empty result means the schema is safe to traverse. Errors are
/// reported in depth-first declaration order, so diagnostics are
/// deterministic for a given schema.
pub fn validate_schema(schema: &SchemaNode) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    let entries = match schema {
        SchemaNode::Leaf(_) => {
            errors.push(SchemaError::RootIsLeaf);
            return errors;
        }
        SchemaNode::Branch(entries) => entries,
    };

    if entries.len() != 1 {
        errors.push(SchemaError::RootArity(entries.len()));
        return errors;
    }

    let (program, root) = &entries[0];
    if program.trim().is_empty() {
        errors.push(SchemaError::EmptyCommandName {
            path: String::new(),
        });
    }

    // The program name is not a path segment, so the walk starts empty.
    validate_node(root, "", &mut errors);
    errors
}

fn validate_node(node: &SchemaNode, path: &str, errors: &mut Vec<SchemaError>) {
    match node {
        SchemaNode::Leaf(args) => validate_args(args, path, errors),
        SchemaNode::Branch(children) => {
            let mut seen: HashSet<&str> = HashSet::new();

            for (name, child) in children {
                if name.trim().is_empty() {
                    errors.push(SchemaError::EmptyCommandName {
                        path: path.to_string(),
                    });
                    continue;
                }

                if !seen.insert(name) {
                    errors.push(SchemaError::DuplicateChild {
                        path: path.to_string(),
                        name: name.clone(),
                    });
                    continue;
                }

                if name == SHARED_ARGS_KEY {
                    match child {
                        SchemaNode::Leaf(args) => validate_args(args, path, errors),
                        SchemaNode::Branch(_) => errors.push(SchemaError::SharedArgsBranch {
                            path: path.to_string(),
                        }),
                    }
                    continue;
                }

                if name.contains('.') {
                    errors.push(SchemaError::DottedCommandName {
                        path: path.to_string(),
                        name: name.clone(),
                    });
                    continue;
                }

                validate_node(child, &join_path(path, name), errors);
            }
        }
    }
}

fn validate_args(args: &[String], path: &str, errors: &mut Vec<SchemaError>) {
    for arg in args {
        if arg.trim().is_empty() {
            errors.push(SchemaError::EmptyArgName {
                path: path.to_string(),
            });
        }
    }
}
