//! The built command tree and dispatch.

use std::ffi::OsString;

use argtree_core::join_path;
use clap::{ArgMatches, Command};

use crate::error::DispatchError;
use crate::node::CommandNode;

/// A fully bound command tree, the sole output of
/// [`build_tree`](crate::build_tree).
///
/// The tree is read-mostly after construction: inspect it with
/// [`find`](Self::find) and [`handler_paths`](Self::handler_paths),
/// materialize the parser with [`to_command`](Self::to_command), or parse
/// and run in one step with [`dispatch`](Self::dispatch).
#[derive(Debug)]
pub struct CommandTree {
    root: CommandNode,
}

impl CommandTree {
    pub(crate) fn new(root: CommandNode) -> Self {
        Self { root }
    }

    /// The root command node.
    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Finds a node by dotted path; the empty path is the root.
    pub fn find(&self, path: &str) -> Option<&CommandNode> {
        if path.is_empty() {
            return Some(&self.root);
        }
        let mut node = &self.root;
        for segment in path.split('.') {
            node = node.subcommand(segment)?;
        }
        Some(node)
    }

    /// Sorted dotted paths of every handler-bearing command.
    pub fn handler_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_handler_paths(&self.root, "", &mut paths);
        paths.sort();
        paths
    }

    /// Materializes the full [`clap::Command`] for the tree.
    pub fn to_command(&self) -> Command {
        self.root.to_command()
    }

    /// Parses `argv` and invokes the handler of the selected command.
    ///
    /// `argv` must include the program name as its first element, as
    /// `std::env::args` does.
    pub fn dispatch<I, T>(&self, argv: I) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.to_command().try_get_matches_from(argv)?;
        self.run(&matches)
    }

    /// Invokes the handler selected by already-parsed matches.
    ///
    /// Walks the matched subcommand chain to the selected node and calls
    /// its handler with the deepest matches. Stopping at a command with no
    /// bound handler yields [`DispatchError::Incomplete`].
    pub fn run(&self, matches: &ArgMatches) -> Result<(), DispatchError> {
        let mut node = &self.root;
        let mut matches = matches;
        while let Some((name, sub_matches)) = matches.subcommand() {
            let Some(child) = node.subcommand(name) else {
                break;
            };
            node = child;
            matches = sub_matches;
        }

        match node.handler() {
            Some(handler) => {
                handler(matches);
                Ok(())
            }
            None => Err(DispatchError::Incomplete {
                command: node.name().to_string(),
            }),
        }
    }
}

fn collect_handler_paths(node: &CommandNode, path: &str, out: &mut Vec<String>) {
    if node.handler().is_some() {
        out.push(path.to_string());
    }
    for child in node.subcommands() {
        collect_handler_paths(child, &join_path(path, child.name()), out);
    }
}
