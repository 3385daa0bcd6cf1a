//! Generic JSON tree engine: a closed tagged union over parsed values plus
//! the flattening step that turns a tree and its expand map into display rows.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::error::ContentError;

/// Maximum rendered nesting depth; nodes at or beyond it are omitted.
pub const MAX_DEPTH: usize = 10;

/// A parsed JSON value.
///
/// Exactly one variant per node, matching the JSON grammar. The type set is
/// closed, so every consumption site matches exhaustively and there is no
/// "unsupported type" path. Object entries preserve document insertion order.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonNode {
    Object(Vec<(String, JsonNode)>),
    Array(Vec<JsonNode>),
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

/// Display classification of one node, used for row styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl JsonNode {
    /// Returns the display classification of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
            Self::String(_) => NodeKind::String,
            Self::Number(_) => NodeKind::Number,
            Self::Bool(_) => NodeKind::Bool,
            Self::Null => NodeKind::Null,
        }
    }

    /// Returns whether this node can be expanded.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    /// Compact single-line header preview for this node.
    pub fn preview(&self) -> String {
        match self {
            Self::Object(_) => "{...}".to_string(),
            Self::Array(_) => "[...]".to_string(),
            Self::String(text) => format!("\"{text}\""),
            Self::Number(number) => number.to_string(),
            Self::Bool(flag) => flag.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

impl From<Value> for JsonNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(key, member)| (key, member.into()))
                    .collect(),
            ),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::String(text) => Self::String(text),
            // f64 conversion is total for standard JSON numbers.
            Value::Number(number) => Self::Number(number.as_f64().unwrap_or_default()),
            Value::Bool(flag) => Self::Bool(flag),
            Value::Null => Self::Null,
        }
    }
}

/// One segment of a stable node identity path.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Stable identity of one node: key/index segments from the root.
pub type NodePath = Vec<PathSegment>;

/// Parses a raw payload using the object-then-array policy.
///
/// A payload that is neither a JSON object nor a JSON array fails with
/// `Invalid JSON format`. Bare top-level scalars such as `42` or `true` are
/// therefore rejected even though they are valid JSON; this two-shape grammar
/// is a known limitation of the viewer, kept deliberately.
pub fn parse_document(text: &str) -> Result<JsonNode, ContentError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ContentError::invalid_json())?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value.into()),
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            Err(ContentError::invalid_json())
        }
    }
}

/// One visible row of the flattened JSON tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRow {
    /// Nesting depth, `0` for the root.
    pub depth: usize,
    /// Object key or `[index]` prefix; `None` for the root.
    pub label: Option<String>,
    pub preview: String,
    pub kind: NodeKind,
    pub expandable: bool,
    pub expanded: bool,
    pub path: NodePath,
}

/// Returns the effective expand state for a node path.
///
/// The root defaults to expanded; every other node defaults to collapsed
/// until the session records a toggle.
pub fn is_expanded(expand: &HashMap<NodePath, bool>, path: &NodePath) -> bool {
    expand.get(path).copied().unwrap_or_else(|| path.is_empty())
}

/// Flattens the tree into visible rows honoring the expand map.
///
/// Children of a collapsed container are skipped entirely; nodes at
/// [`MAX_DEPTH`] or deeper are silently omitted.
pub fn tree_rows(root: &JsonNode, expand: &HashMap<NodePath, bool>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(root, &mut Vec::new(), None, 0, expand, &mut rows);

    rows
}

fn push_rows(
    node: &JsonNode,
    path: &mut NodePath,
    label: Option<String>,
    depth: usize,
    expand: &HashMap<NodePath, bool>,
    rows: &mut Vec<TreeRow>,
) {
    if depth >= MAX_DEPTH {
        return;
    }

    let expanded = node.is_container() && is_expanded(expand, path);
    rows.push(TreeRow {
        depth,
        label,
        preview: node.preview(),
        kind: node.kind(),
        expandable: node.is_container(),
        expanded,
        path: path.clone(),
    });

    if !expanded {
        return;
    }

    match node {
        JsonNode::Object(members) => {
            for (key, member) in members {
                path.push(PathSegment::Key(key.clone()));
                push_rows(member, path, Some(key.clone()), depth + 1, expand, rows);
                path.pop();
            }
        }
        JsonNode::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                push_rows(item, path, Some(format!("[{index}]")), depth + 1, expand, rows);
                path.pop();
            }
        }
        JsonNode::String(_) | JsonNode::Number(_) | JsonNode::Bool(_) | JsonNode::Null => {}
    }
}
