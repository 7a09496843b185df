//! Declarative schema tree for hierarchical command-line interfaces.
//!
//! A schema describes the *shape* of a CLI: which commands nest under which,
//! and which argument names each terminal command carries. The schema is
//! supplied wholesale by the caller, either built in code with the
//! constructors below or deserialized from JSON/YAML, and is treated as
//! immutable by the build engine.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reserved child key that attaches arguments to the *enclosing* command.
///
/// When a branch contains this key with a leaf value, the named arguments
/// are added to the parent command itself instead of creating a child
/// command. Shared arguments carry no handler of their own.
pub const SHARED_ARGS_KEY: &str = "__cur__";

/// Extends a dotted command path with one more segment.
///
/// The path at any node is the `.`-joined sequence of branch keys from the
/// root to that node, with no leading separator: the root itself is the
/// empty path. Handler lookups match these strings by exact equality, so
/// this is the single place the joining rule lives.
///
/// # Examples
///
/// ```
/// use argtree_core::join_path;
///
/// assert_eq!(join_path("", "reduce_to"), "reduce_to");
/// assert_eq!(join_path("reduce_to", "sum"), "reduce_to.sum");
/// ```
pub fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// One node of a command-tree schema.
///
/// A node is either a *branch* (an ordered mapping from child command name
/// to child schema) or a *leaf* (an ordered list of argument names that
/// terminates the tree at that point). The distinction is a compile-time
/// tagged variant, so consumers match exhaustively instead of inspecting
/// runtime shapes.
///
/// Branches serialize as maps and leaves as sequences, so a schema
/// round-trips through JSON or YAML in the natural literal form:
///
/// ```
/// use argtree_core::SchemaNode;
///
/// let schema: SchemaNode = serde_json::from_str(
///     r#"{"calc": {"reduce_to": {"__cur__": ["offset", "scale"], "sum": ["numeric_args"]}}}"#,
/// ).unwrap();
///
/// let SchemaNode::Branch(roots) = &schema else { panic!("expected branch") };
/// assert_eq!(roots.len(), 1);
/// assert_eq!(roots[0].0, "calc");
/// ```
///
/// Branch entries preserve declaration order; registration order of the
/// resulting subcommands follows it. Key uniqueness is not enforced by the
/// type; [`validate_schema`](crate::validate_schema) rejects duplicates
/// before any tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Named children, in declaration order.
    Branch(Vec<(String, SchemaNode)>),
    /// Argument names for a terminal command, in attachment order.
    Leaf(Vec<String>),
}

impl SchemaNode {
    /// Creates an empty branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtree_core::SchemaNode;
    ///
    /// let node = SchemaNode::branch()
    ///     .with_child("sum", SchemaNode::leaf(["numeric_args"]));
    /// assert!(node.is_branch());
    /// ```
    pub fn branch() -> Self {
        SchemaNode::Branch(Vec::new())
    }

    /// Creates a leaf from an ordered list of argument names.
    pub fn leaf<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SchemaNode::Leaf(args.into_iter().map(Into::into).collect())
    }

    /// Adds a named child, preserving insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `self` is a leaf. Like the underlying `clap` builder,
    /// schema construction treats structural misuse as a programmer error
    /// rather than a runtime result.
    pub fn with_child(self, name: &str, child: SchemaNode) -> Self {
        match self {
            SchemaNode::Branch(mut children) => {
                children.push((name.to_string(), child));
                SchemaNode::Branch(children)
            }
            SchemaNode::Leaf(_) => panic!("cannot add child {name:?} to a leaf schema node"),
        }
    }

    /// Adds shared arguments for the enclosing command under
    /// [`SHARED_ARGS_KEY`].
    ///
    /// # Panics
    ///
    /// Panics if `self` is a leaf.
    pub fn with_shared_args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_child(SHARED_ARGS_KEY, SchemaNode::leaf(args))
    }

    /// Returns `true` for a branch node.
    pub fn is_branch(&self) -> bool {
        matches!(self, SchemaNode::Branch(_))
    }

    /// Returns `true` for a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, SchemaNode::Leaf(_))
    }

    /// Child entries of a branch, or `None` for a leaf.
    pub fn children(&self) -> Option<&[(String, SchemaNode)]> {
        match self {
            SchemaNode::Branch(children) => Some(children),
            SchemaNode::Leaf(_) => None,
        }
    }

    /// Argument names of a leaf, or `None` for a branch.
    pub fn args(&self) -> Option<&[String]> {
        match self {
            SchemaNode::Branch(_) => None,
            SchemaNode::Leaf(args) => Some(args),
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SchemaNode::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (name, child) in children {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
            SchemaNode::Leaf(args) => {
                let mut seq = serializer.serialize_seq(Some(args.len()))?;
                for arg in args {
                    seq.serialize_element(arg)?;
                }
                seq.end()
            }
        }
    }
}

struct SchemaNodeVisitor;

impl<'de> Visitor<'de> for SchemaNodeVisitor {
    type Value = SchemaNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of subcommands or a sequence of argument names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut children = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, SchemaNode>()? {
            children.push(entry);
        }
        Ok(SchemaNode::Branch(children))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut args = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(arg) = seq.next_element::<String>()? {
            args.push(arg);
        }
        Ok(SchemaNode::Leaf(args))
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Maps and sequences are distinguishable in every self-describing
        // format the crate targets (JSON, YAML).
        deserializer.deserialize_any(SchemaNodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_constructs_nested_branch() {
        let schema = SchemaNode::branch().with_child(
            "reduce_to",
            SchemaNode::branch()
                .with_shared_args(["offset", "scale"])
                .with_child("sum", SchemaNode::leaf(["numeric_args"])),
        );

        let children = schema.children().unwrap();
        assert_eq!(children.len(), 1);

        let reduce_to = children[0].1.children().unwrap();
        assert_eq!(reduce_to[0].0, SHARED_ARGS_KEY);
        assert_eq!(reduce_to[0].1.args().unwrap(), ["offset", "scale"]);
        assert_eq!(reduce_to[1].0, "sum");
    }

    #[test]
    fn test_json_map_preserves_declaration_order() {
        let schema: SchemaNode = serde_json::from_str(
            r#"{"zeta": ["x"], "alpha": ["y"], "mid": {"leaf": ["z"]}}"#,
        )
        .unwrap();

        let names: Vec<&str> = schema
            .children()
            .unwrap()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_yaml_round_trip() {
        let schema = SchemaNode::branch().with_child(
            "calc",
            SchemaNode::branch()
                .with_child("prod", SchemaNode::leaf(["left", "right"]))
                .with_child("neg", SchemaNode::leaf(["operand"])),
        );

        let yaml = serde_yaml::to_string(&schema).unwrap();
        let restored: SchemaNode = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, schema);
    }

    #[test]
    fn test_empty_sequence_deserializes_as_leaf() {
        let schema: SchemaNode = serde_json::from_str("[]").unwrap();
        assert!(schema.is_leaf());
        assert_eq!(schema.args().unwrap().len(), 0);
    }
}
