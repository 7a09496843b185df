//! Core schema types for declarative CLI command trees.
//!
//! This crate defines the data model consumed by the `argtree-builder`
//! engine:
//!
//! - [`SchemaNode`] — the recursive schema: a branch of named children or a
//!   leaf of argument names, with the [`SHARED_ARGS_KEY`] marker for
//!   arguments that attach to the enclosing command.
//! - [`ArgSpec`] / [`ValueType`] — the construction spec a configurator
//!   returns for one argument.
//! - [`HelpCatalog`] — program description plus argument/command help
//!   tables.
//! - [`validate_schema`] / [`SchemaError`] — structural validation run
//!   before any tree is built.
//!
//! The crate is parser-agnostic: nothing here depends on the CLI toolkit
//! that ultimately materializes the commands.
//!
//! # Example
//!
//! ```
//! use argtree_core::{HelpCatalog, SchemaNode, validate_schema};
//!
//! let schema = SchemaNode::branch().with_child(
//!     "calc",
//!     SchemaNode::branch().with_child(
//!         "reduce_to",
//!         SchemaNode::branch()
//!             .with_shared_args(["offset", "scale"])
//!             .with_child("sum", SchemaNode::leaf(["numeric_args"])),
//!     ),
//! );
//! assert!(validate_schema(&schema).is_empty());
//!
//! let catalog = HelpCatalog::new("An example calculator")
//!     .with_arg_help("offset", "Numerical offset for output");
//! assert!(catalog.arg_help("offset").is_some());
//! ```

mod arg;
mod catalog;
mod schema;
mod validate;

pub use arg::{ArgSpec, ValueType};
pub use catalog::HelpCatalog;
pub use schema::{SHARED_ARGS_KEY, SchemaNode, join_path};
pub use validate::{SchemaError, validate_schema};
