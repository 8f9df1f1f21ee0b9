//! Prompt AST types and the structural depth walk
//!
//! The AST here is a descriptive structural summary of the input text, not a
//! programming-language syntax tree. It is built once per compilation and
//! consumed as a complexity signal.

use crate::intent::{Constraint, Domain, OutputFormat, TaskType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structural tree describing a compiled intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAst {
    /// Node tag, always [`PromptAst::NODE_TYPE`]
    #[serde(rename = "type")]
    pub node_type: String,
    pub meta: AstMeta,
    pub content: AstContent,
    pub structure: AstStructure,
}

/// Classification metadata attached to the tree root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstMeta {
    pub domain: Domain,
    pub task_type: TaskType,
    pub output_format: OutputFormat,
    /// RFC 3339 creation timestamp. Informational only; never part of
    /// equality checks by consumers.
    pub timestamp: String,
}

/// The original input and what was extracted from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstContent {
    pub input: String,
    pub constraints: Vec<Constraint>,
    pub complexity: u8,
}

/// Surface statistics of the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstStructure {
    pub sentences: usize,
    pub words: usize,
    /// Approximate token count, `ceil(chars / 4)`
    pub tokens: usize,
}

impl PromptAst {
    pub const NODE_TYPE: &'static str = "prompt";

    /// Maximum nesting depth of this tree, root at depth 0
    pub fn depth(&self) -> usize {
        serde_json::to_value(self)
            .map(|value| value_depth(&value))
            .unwrap_or(0)
    }
}

/// Structural classification of a tree node
enum Node<'a> {
    Leaf,
    Sequence(&'a [Value]),
    Mapping(&'a serde_json::Map<String, Value>),
}

fn classify(value: &Value) -> Node<'_> {
    match value {
        Value::Array(items) => Node::Sequence(items),
        Value::Object(fields) => Node::Mapping(fields),
        _ => Node::Leaf,
    }
}

/// Maximum nesting depth of a JSON-like tree
///
/// The root sits at depth 0 and every container level below it adds one.
/// The walk records the deepest point reached across all branches.
pub fn value_depth(value: &Value) -> usize {
    fn walk(value: &Value, depth: usize, max: &mut usize) {
        if depth > *max {
            *max = depth;
        }
        match classify(value) {
            Node::Leaf => {}
            Node::Sequence(items) => {
                for item in items {
                    walk(item, depth + 1, max);
                }
            }
            Node::Mapping(fields) => {
                for nested in fields.values() {
                    walk(nested, depth + 1, max);
                }
            }
        }
    }

    let mut max = 0;
    walk(value, 0, &mut max);
    max
}
