//! Argument resolution and attachment.
//!
//! Each application supplies its own argument vocabulary by implementing
//! [`Configurator`]; the build engine stays generic over it. The registry
//! wrapping the configurator resolves schema argument names to
//! [`ArgSpec`]s, joins in help text from the catalog, and attaches the
//! materialized arguments to command nodes in schema order.

use std::any;
use std::path::PathBuf;

use argtree_core::{ArgSpec, HelpCatalog, ValueType};
use clap::{Arg, ArgAction, Command, value_parser};
use tracing::warn;

use crate::error::{BuildError, Result};
use crate::handlers::Handler;
use crate::node::CommandNode;

/// Application-supplied argument vocabulary.
///
/// Returns the construction spec for a recognized argument name, `None`
/// otherwise. Implementations are typically a single `match` over the
/// fixed set of names the application understands; resolution must be
/// idempotent (equal specs for repeated calls).
///
/// # Examples
///
/// ```
/// use argtree_core::{ArgSpec, ValueType};
/// use argtree_builder::Configurator;
///
/// struct CalcConfigurator;
///
/// impl Configurator for CalcConfigurator {
///     fn arg_spec(&self, name: &str) -> Option<ArgSpec> {
///         match name {
///             "operand" => Some(ArgSpec::positional("operand", ValueType::Number)),
///             "offset" => Some(
///                 ArgSpec::option(Some('o'), "offset", ValueType::Number).with_default("0"),
///             ),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(CalcConfigurator.arg_spec("operand").is_some());
/// assert!(CalcConfigurator.arg_spec("unknown").is_none());
/// ```
pub trait Configurator {
    /// Resolves an argument name to its construction spec.
    fn arg_spec(&self, name: &str) -> Option<ArgSpec>;
}

/// Resolves argument names through a configurator and attaches the results
/// to command nodes.
pub(crate) struct ArgRegistry<'a, C> {
    configurator: &'a C,
    catalog: &'a HelpCatalog,
}

impl<'a, C: Configurator> ArgRegistry<'a, C> {
    pub(crate) fn new(configurator: &'a C, catalog: &'a HelpCatalog) -> Self {
        Self {
            configurator,
            catalog,
        }
    }

    /// Resolves `name`, failing with [`BuildError::UnknownArgument`] that
    /// reports both the name and the configurator type consulted.
    pub(crate) fn resolve(&self, name: &str) -> Result<ArgSpec> {
        self.configurator
            .arg_spec(name)
            .ok_or_else(|| BuildError::UnknownArgument {
                name: name.to_string(),
                configurator: configurator_name::<C>().to_string(),
            })
    }

    /// Resolves one argument and adds it to `command`. Missing help text
    /// is a warning, not an error; the argument is attached with empty
    /// help.
    fn attach(&self, command: Command, name: &str, shared: bool) -> Result<Command> {
        let spec = self.resolve(name)?;
        let help = match self.catalog.arg_help(name) {
            Some(help) => help,
            None => {
                warn!(argument = name, "no help text registered for argument");
                ""
            }
        };
        Ok(command.arg(clap_arg(&spec, help, shared)))
    }

    fn attach_names(&self, node: CommandNode, names: &[String], shared: bool) -> Result<CommandNode> {
        let mut node = node;
        let mut parser = node.parser;
        for name in names {
            parser = self.attach(parser, name, shared)?;
        }
        node.parser = parser;
        Ok(node)
    }

    /// Attaches every name in schema order and, if supplied, binds
    /// `handler` as the node's callback.
    pub(crate) fn attach_all(
        &self,
        node: CommandNode,
        names: &[String],
        handler: Option<Handler>,
    ) -> Result<CommandNode> {
        let mut node = self.attach_names(node, names, false)?;
        if let Some(handler) = handler {
            node.handler = Some(handler);
        }
        Ok(node)
    }

    /// Attaches shared arguments to the enclosing command.
    ///
    /// Their parsed values propagate into descendant matches, so a
    /// terminal handler reads them from its own matches exactly as it
    /// reads its own arguments.
    pub(crate) fn attach_shared(&self, node: CommandNode, names: &[String]) -> Result<CommandNode> {
        self.attach_names(node, names, true)
    }
}

/// Last path segment of the configurator's type name, for diagnostics.
fn configurator_name<C>() -> &'static str {
    let full = any::type_name::<C>();
    full.rsplit("::").next().unwrap_or(full)
}

fn clap_arg(spec: &ArgSpec, help: &str, shared: bool) -> Arg {
    let mut arg = Arg::new(spec.name.clone());
    if let Some(short) = spec.short {
        arg = arg.short(short);
    }
    if let Some(long) = &spec.long {
        arg = arg.long(long.clone());
    }
    if !help.is_empty() {
        arg = arg.help(help.to_string());
    }
    arg = match spec.value_type {
        ValueType::Bool => arg.action(ArgAction::SetTrue),
        ValueType::Number => arg.value_parser(value_parser!(f64)),
        ValueType::File => arg.value_parser(value_parser!(PathBuf)),
        ValueType::String | ValueType::Any => arg,
    };
    if spec.variadic {
        arg = arg.num_args(1..);
    }
    if let Some(default) = &spec.default {
        arg = arg.default_value(default.clone());
    }
    if spec.required && spec.default.is_none() {
        arg = arg.required(true);
    }
    // The parser only propagates optional named arguments; required or
    // positional shared arguments stay local to their command.
    if shared && !spec.required && !spec.is_positional() {
        arg = arg.global(true);
    }
    arg
}

#[cfg(test)]
mod tests {
    use super::*;
    use argtree_core::SchemaNode;

    struct TestConfigurator;

    impl Configurator for TestConfigurator {
        fn arg_spec(&self, name: &str) -> Option<ArgSpec> {
            match name {
                "operand" => Some(ArgSpec::positional("operand", ValueType::Number)),
                "scale" => Some(
                    ArgSpec::option(Some('s'), "scale", ValueType::Number).with_default("1"),
                ),
                _ => None,
            }
        }
    }

    fn leaf_node(name: &str, catalog: &HelpCatalog) -> CommandNode {
        CommandNode::child(name, &SchemaNode::leaf(["unused"]), catalog)
    }

    #[test]
    fn test_resolve_unknown_argument_names_configurator() {
        let catalog = HelpCatalog::default();
        let registry = ArgRegistry::new(&TestConfigurator, &catalog);

        let err = registry.resolve("bogus").unwrap_err();
        match err {
            BuildError::UnknownArgument { name, configurator } => {
                assert_eq!(name, "bogus");
                assert_eq!(configurator, "TestConfigurator");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attach_all_preserves_schema_order() {
        let catalog = HelpCatalog::new("prog")
            .with_arg_help("operand", "Single operand")
            .with_arg_help("scale", "Multiplier");
        let registry = ArgRegistry::new(&TestConfigurator, &catalog);

        let node = leaf_node("cmd", &catalog);
        let node = registry
            .attach_all(node, &["operand".to_string(), "scale".to_string()], None)
            .unwrap();

        assert_eq!(node.arg_names(), ["operand", "scale"]);
        assert!(node.handler().is_none());
    }

    #[test]
    fn test_attach_all_missing_help_is_not_fatal() {
        let catalog = HelpCatalog::default();
        let registry = ArgRegistry::new(&TestConfigurator, &catalog);

        let node = leaf_node("cmd", &catalog);
        let node = registry
            .attach_all(node, &["operand".to_string()], None)
            .unwrap();
        assert_eq!(node.arg_names(), ["operand"]);
    }

    #[test]
    fn test_attach_all_binds_handler() {
        use std::sync::Arc;

        let catalog = HelpCatalog::default();
        let registry = ArgRegistry::new(&TestConfigurator, &catalog);
        let handler: Handler = Arc::new(|_matches: &clap::ArgMatches| {});

        let node = leaf_node("cmd", &catalog);
        let node = registry
            .attach_all(node, &[], Some(Arc::clone(&handler)))
            .unwrap();

        let bound = node.handler().expect("handler should be bound");
        assert!(Arc::ptr_eq(bound, &handler));
    }
}
