//! Handler registry: dotted command paths to callables.
//!
//! Handlers are registered during an explicit setup phase, before the tree
//! is built, and the registry is read-only while a build is in flight. The
//! registry is a plain value owned by the caller: construct one at
//! startup and pass it by reference into
//! [`build_tree`](crate::build_tree).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use clap::ArgMatches;

use crate::error::{BuildError, Result};

/// A command handler, invoked with the parsed matches for its command.
///
/// Shared ownership lets the same handler back several paths and lets the
/// built tree hold the registration it was resolved from, comparable by
/// [`Arc::ptr_eq`].
pub type Handler = Arc<dyn Fn(&ArgMatches) + Send + Sync>;

/// Mapping from dotted command path to handler.
///
/// # Examples
///
/// ```
/// use argtree_builder::HandlerRegistry;
///
/// let mut registry = HandlerRegistry::new();
/// registry.register("reduce_to.sum", |_matches| {}).unwrap();
///
/// assert!(registry.contains("reduce_to.sum"));
/// assert!(registry.get("reduce_to.sum").is_ok());
///
/// // Duplicate registration is an error; `replace` is the explicit
/// // override.
/// assert!(registry.register("reduce_to.sum", |_matches| {}).is_err());
/// registry.replace("reduce_to.sum", |_matches| {});
/// ```
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, Handler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` at `path`.
    ///
    /// Fails with [`BuildError::DuplicateHandler`] if the path is already
    /// taken; use [`replace`](Self::replace) to overwrite deliberately.
    pub fn register<F>(&mut self, path: &str, handler: F) -> Result<()>
    where
        F: Fn(&ArgMatches) + Send + Sync + 'static,
    {
        if self.handlers.contains_key(path) {
            return Err(BuildError::DuplicateHandler(path.to_string()));
        }
        self.handlers.insert(path.to_string(), Arc::new(handler));
        Ok(())
    }

    /// Registers `handler` at `path`, displacing any existing
    /// registration. Returns the previous handler, if any.
    pub fn replace<F>(&mut self, path: &str, handler: F) -> Option<Handler>
    where
        F: Fn(&ArgMatches) + Send + Sync + 'static,
    {
        self.handlers.insert(path.to_string(), Arc::new(handler))
    }

    /// Resolves the handler registered at `path`.
    ///
    /// Fails with [`BuildError::UnknownHandler`] carrying the sorted list
    /// of registered paths, so a typo in a schema or registration shows
    /// the candidates immediately.
    pub fn get(&self, path: &str) -> Result<Handler> {
        self.handlers
            .get(path)
            .cloned()
            .ok_or_else(|| BuildError::UnknownHandler {
                path: path.to_string(),
                registered: self.paths(),
            })
    }

    /// Returns `true` if a handler is registered at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.handlers.contains_key(path)
    }

    /// All registered paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("paths", &self.paths())
            .finish()
    }
}

/// Registers a plain function under its own name.
///
/// The function-name registration style is only for the registry's root
/// namespace; nested paths are registered explicitly with
/// [`HandlerRegistry::register`].
///
/// # Examples
///
/// ```
/// use clap::ArgMatches;
/// use argtree_builder::{HandlerRegistry, register_fn};
///
/// fn prod(_matches: &ArgMatches) {}
///
/// let mut registry = HandlerRegistry::new();
/// register_fn!(registry, prod).unwrap();
/// assert!(registry.contains("prod"));
/// ```
#[macro_export]
macro_rules! register_fn {
    ($registry:expr, $handler:ident) => {
        $registry.register(stringify!($handler), $handler)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    #[test]
    fn test_get_returns_registered_handler() {
        let mut registry = HandlerRegistry::new();
        registry.register("neg", |_matches| {}).unwrap();

        assert!(registry.get("neg").is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_path_lists_sorted_paths() {
        let mut registry = HandlerRegistry::new();
        registry.register("prod", |_matches| {}).unwrap();
        registry.register("neg", |_matches| {}).unwrap();

        let err = registry.get("reduce_to.sum").err().unwrap();
        match err {
            BuildError::UnknownHandler { path, registered } => {
                assert_eq!(path, "reduce_to.sum");
                assert_eq!(registered, vec!["neg".to_string(), "prod".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let mut registry = HandlerRegistry::new();
        registry.register("prod", |_matches| {}).unwrap();

        let err = registry.register("prod", |_matches| {}).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateHandler(path) if path == "prod"));
    }

    #[test]
    fn test_replace_returns_displaced_handler() {
        let mut registry = HandlerRegistry::new();
        registry.register("prod", |_matches| {}).unwrap();

        let previous = registry.replace("prod", |_matches| {});
        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_fn_uses_function_name() {
        fn prod(_matches: &ArgMatches) {}

        let mut registry = HandlerRegistry::new();
        register_fn!(registry, prod).unwrap();
        assert!(registry.contains("prod"));
    }
}
