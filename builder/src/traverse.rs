//! Recursive schema traversal.

use argtree_core::{HelpCatalog, SHARED_ARGS_KEY, SchemaError, SchemaNode, join_path};
use tracing::debug;

use crate::configurator::{ArgRegistry, Configurator};
use crate::error::{BuildError, Result};
use crate::handlers::HandlerRegistry;
use crate::node::CommandNode;

/// Depth-first walker turning a schema into a bound command tree.
///
/// Both registries are read-only for the duration of a walk; a traverser
/// borrows them for a single build. The walk threads node ownership
/// (node in, node out), so every attachment happens on the way down and
/// the fully bound subtree comes back up.
pub(crate) struct TreeTraverser<'a, C> {
    args: ArgRegistry<'a, C>,
    handlers: &'a HandlerRegistry,
    catalog: &'a HelpCatalog,
}

impl<'a, C: Configurator> TreeTraverser<'a, C> {
    pub(crate) fn new(
        configurator: &'a C,
        catalog: &'a HelpCatalog,
        handlers: &'a HandlerRegistry,
    ) -> Self {
        Self {
            args: ArgRegistry::new(configurator, catalog),
            handlers,
            catalog,
        }
    }

    /// Walks `schema`, attaching arguments, children, and handlers to
    /// `node`. `path` is the dotted path of `node` itself; the root walks
    /// with the empty path.
    pub(crate) fn traverse(
        &self,
        node: CommandNode,
        schema: &SchemaNode,
        path: &str,
    ) -> Result<CommandNode> {
        match schema {
            SchemaNode::Leaf(args) => {
                let handler = self.handlers.get(path)?;
                debug!(path, "binding terminal command");
                self.args.attach_all(node, args, Some(handler))
            }
            SchemaNode::Branch(children) => {
                let mut node = node;
                for (name, child_schema) in children {
                    if name == SHARED_ARGS_KEY {
                        let SchemaNode::Leaf(shared) = child_schema else {
                            return Err(BuildError::InvalidSchema(vec![
                                SchemaError::SharedArgsBranch {
                                    path: path.to_string(),
                                },
                            ]));
                        };
                        // Shared arguments modify the enclosing command:
                        // no child node, no handler, no path growth.
                        node = self.args.attach_shared(node, shared)?;
                        continue;
                    }

                    let child_path = join_path(path, name);
                    let child = CommandNode::child(name, child_schema, self.catalog);
                    let child = self.traverse(child, child_schema, &child_path)?;
                    node.push_subcommand(child);
                }
                Ok(node)
            }
        }
    }
}
