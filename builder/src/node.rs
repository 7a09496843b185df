//! Command nodes and their factory constructors.

use std::fmt;

use argtree_core::{HelpCatalog, SchemaNode};
use clap::Command;

use crate::handlers::Handler;

/// One constructed command in the tree.
///
/// A node owns its underlying [`clap::Command`], an optional
/// subcommand-registration handle, and the handler bound to it if it is a
/// terminal command. The handle is present if and only if the node was
/// created for a branch-shaped schema value: leaves never register
/// subcommands, so they can carry positional arguments without the parser
/// confusing positionals with subcommand names.
pub struct CommandNode {
    pub(crate) name: String,
    pub(crate) parser: Command,
    pub(crate) subcommands: Option<Vec<CommandNode>>,
    pub(crate) handler: Option<Handler>,
}

impl CommandNode {
    /// Creates the root node for a program.
    ///
    /// The root always receives a subcommand-registration handle; it is
    /// never a leaf.
    pub(crate) fn root(program: &str, description: &str) -> Self {
        let mut parser = Command::new(program.to_string());
        if !description.is_empty() {
            parser = parser.about(description.to_string());
        }
        Self {
            name: program.to_string(),
            parser,
            subcommands: Some(Vec::new()),
            handler: None,
        }
    }

    /// Creates a child node for `schema`, peeking at its shape (never
    /// recursing into it) to decide whether the node may register
    /// subcommands. Command help comes from the catalog, empty if absent.
    pub(crate) fn child(name: &str, schema: &SchemaNode, catalog: &HelpCatalog) -> Self {
        let subcommands = schema.is_branch().then(Vec::<CommandNode>::new);
        let mut parser = Command::new(name.to_string());
        if let Some(help) = catalog.command_help(name) {
            parser = parser.about(help.to_string());
        }
        Self {
            name: name.to_string(),
            parser,
            subcommands,
            handler: None,
        }
    }

    /// Command name (one path segment).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying parser object for this command, before children are
    /// folded in.
    pub fn parser(&self) -> &Command {
        &self.parser
    }

    /// Handler bound to this command, if it is a terminal command.
    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }

    /// Returns `true` when this node may register subcommands.
    pub fn accepts_subcommands(&self) -> bool {
        self.subcommands.is_some()
    }

    /// Child commands, in registration order. Empty for leaves.
    pub fn subcommands(&self) -> &[CommandNode] {
        self.subcommands.as_deref().unwrap_or(&[])
    }

    /// Finds a direct child command by name.
    pub fn subcommand(&self, name: &str) -> Option<&CommandNode> {
        self.subcommands().iter().find(|child| child.name == name)
    }

    /// Names of the arguments attached to this command, in attachment
    /// order.
    pub fn arg_names(&self) -> Vec<&str> {
        self.parser
            .get_arguments()
            .map(|arg| arg.get_id().as_str())
            .collect()
    }

    pub(crate) fn push_subcommand(&mut self, child: CommandNode) {
        debug_assert!(
            self.subcommands.is_some(),
            "leaf commands cannot register subcommands"
        );
        self.subcommands.get_or_insert_with(Vec::new).push(child);
    }

    /// Materializes the full [`clap::Command`] for this subtree.
    pub fn to_command(&self) -> Command {
        let mut command = self.parser.clone();
        for child in self.subcommands() {
            command = command.subcommand(child.to_command());
        }
        command
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("args", &self.arg_names())
            .field("subcommands", &self.subcommands)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argtree_core::SchemaNode;

    #[test]
    fn test_branch_child_gets_subcommand_handle() {
        let catalog = HelpCatalog::default();
        let schema = SchemaNode::branch();
        let node = CommandNode::child("reduce_to", &schema, &catalog);
        assert!(node.accepts_subcommands());
        assert!(node.subcommands().is_empty());
    }

    #[test]
    fn test_leaf_child_gets_no_subcommand_handle() {
        let catalog = HelpCatalog::default();
        let schema = SchemaNode::leaf(["numeric_args"]);
        let node = CommandNode::child("sum", &schema, &catalog);
        assert!(!node.accepts_subcommands());
    }

    #[test]
    fn test_child_help_comes_from_catalog() {
        let catalog = HelpCatalog::new("prog").with_command_help("sum", "Reduce to sum");
        let node = CommandNode::child("sum", &SchemaNode::leaf(["x"]), &catalog);
        assert_eq!(
            node.parser().get_about().map(ToString::to_string),
            Some("Reduce to sum".to_string())
        );
    }

    #[test]
    fn test_to_command_folds_children() {
        let catalog = HelpCatalog::default();
        let mut root = CommandNode::root("calc", "A calculator");
        root.push_subcommand(CommandNode::child(
            "neg",
            &SchemaNode::leaf(["operand"]),
            &catalog,
        ));

        let command = root.to_command();
        let names: Vec<&str> = command
            .get_subcommands()
            .map(clap::Command::get_name)
            .collect();
        assert_eq!(names, ["neg"]);
    }
}
