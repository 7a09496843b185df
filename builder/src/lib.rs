//! Schema-driven builder for hierarchical command-line interfaces.
//!
//! Given a declarative [`SchemaNode`] tree, this crate constructs a
//! runnable hierarchy of [`clap`] commands in which every terminal command
//! is bound to exactly one handler, resolved by the dotted path derived
//! from its position in the tree (`reduce_to.sum` for a `sum` leaf under a
//! `reduce_to` branch).
//!
//! Two independent registries drive the build:
//!
//! - a [`Configurator`] resolves argument names to construction specs, so
//!   each application supplies its own vocabulary without touching the
//!   traversal engine;
//! - a [`HandlerRegistry`] maps dotted paths to handler callables,
//!   populated during an explicit setup phase before the build runs.
//!
//! Both are owned by the caller and read-only during a build; there is no
//! ambient global state. Building is single-threaded, synchronous, and
//! all-or-nothing: [`build_tree`] either returns a fully bound
//! [`CommandTree`] or an error.
//!
//! # Example
//!
//! ```
//! use argtree_builder::{Configurator, HandlerRegistry, build_tree};
//! use argtree_core::{ArgSpec, HelpCatalog, SchemaNode, ValueType};
//!
//! struct CalcConfigurator;
//!
//! impl Configurator for CalcConfigurator {
//!     fn arg_spec(&self, name: &str) -> Option<ArgSpec> {
//!         match name {
//!             "numeric_args" => {
//!                 Some(ArgSpec::positional("numeric_args", ValueType::Number).variadic())
//!             }
//!             "offset" => Some(
//!                 ArgSpec::option(Some('o'), "offset", ValueType::Number).with_default("0"),
//!             ),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let schema = SchemaNode::branch().with_child(
//!     "calc",
//!     SchemaNode::branch().with_child(
//!         "reduce_to",
//!         SchemaNode::branch()
//!             .with_shared_args(["offset"])
//!             .with_child("sum", SchemaNode::leaf(["numeric_args"])),
//!     ),
//! );
//!
//! let catalog = HelpCatalog::new("An example calculator")
//!     .with_arg_help("numeric_args", "Any number of numerical arguments");
//!
//! let mut handlers = HandlerRegistry::new();
//! handlers
//!     .register("reduce_to.sum", |matches| {
//!         let total: f64 = matches
//!             .get_many::<f64>("numeric_args")
//!             .into_iter()
//!             .flatten()
//!             .copied()
//!             .sum();
//!         println!("{total}");
//!     })
//!     .unwrap();
//!
//! let tree = build_tree(&schema, &catalog, &CalcConfigurator, &handlers).unwrap();
//! assert_eq!(tree.root().name(), "calc");
//! assert_eq!(tree.handler_paths(), ["reduce_to.sum"]);
//!
//! tree.dispatch(["calc", "reduce_to", "sum", "1", "2"]).unwrap();
//! ```

mod configurator;
mod error;
mod handlers;
mod node;
mod traverse;
mod tree;

pub use configurator::Configurator;
pub use error::{BuildError, DispatchError, Result};
pub use handlers::{Handler, HandlerRegistry};
pub use node::CommandNode;
pub use tree::CommandTree;

use argtree_core::{HelpCatalog, SchemaError, SchemaNode, validate_schema};

use crate::traverse::TreeTraverser;

/// Builds a fully bound command tree from a schema.
///
/// The top level of `schema` must map exactly one program name to the root
/// branch (or leaf). The root command takes its description from
/// `catalog.program`; traversal then walks the schema depth-first,
/// resolving argument names through `configurator` and leaf handlers
/// through `handlers` by dotted path.
///
/// Fails fast on the first unresolvable argument or handler, and rejects
/// structurally malformed schemas before creating any node. No partial
/// tree is ever returned.
pub fn build_tree<C: Configurator>(
    schema: &SchemaNode,
    catalog: &HelpCatalog,
    configurator: &C,
    handlers: &HandlerRegistry,
) -> Result<CommandTree> {
    let errors = validate_schema(schema);
    if !errors.is_empty() {
        return Err(BuildError::InvalidSchema(errors));
    }

    // Validation guarantees these shapes; the patterns keep extraction
    // total without panicking paths.
    let SchemaNode::Branch(entries) = schema else {
        return Err(BuildError::InvalidSchema(vec![SchemaError::RootIsLeaf]));
    };
    let [(program, root_schema)] = entries.as_slice() else {
        return Err(BuildError::InvalidSchema(vec![SchemaError::RootArity(
            entries.len(),
        )]));
    };

    let root = CommandNode::root(program, &catalog.program);
    let traverser = TreeTraverser::new(configurator, catalog, handlers);
    let root = traverser.traverse(root, root_schema, "")?;
    Ok(CommandTree::new(root))
}
