//! Typed view of the Pug AST JSON interchange format.
//!
//! The tree arrives as JSON produced by a Pug parser: every node is an object
//! with a `"type"` discriminant, position fields (`line`, `column`,
//! `filename`), and per-kind payload fields. Only the kinds the lowering pass
//! inspects get a dedicated variant here; everything else deserializes into
//! [`OtherNode`], which keeps the raw fields so the node serializes back with
//! every field intact. Known variants carry a flattened `rest` map for the
//! same reason: fields this pass does not understand survive a round trip
//! untouched.

use serde::{Deserialize, Serialize};

/// Extra fields we carry through without interpreting.
///
/// `serde_json`'s map preserves insertion order, so passthrough fields come
/// back out in the order they arrived.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Source position attached to nodes and attributes.
///
/// All pieces are optional: synthesized nodes inherit the position of the
/// node they replace, and attributes created by the lowering pass have no
/// source position at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, &self.filename) {
            (Some(line), Some(file)) => {
                write!(f, "{file}:{line}")?;
            }
            (Some(line), None) => {
                write!(f, "line {line}")?;
            }
            (None, Some(file)) => {
                write!(f, "{file}")?;
            }
            (None, None) => {
                write!(f, "unknown position")?;
            }
        }
        if let Some(column) = self.column
            && self.line.is_some()
        {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

/// Attribute value: either expression source text or a literal boolean.
///
/// Pug stores string-literal values with their quotes included, so
/// `v-if="cond"` is represented as the Rust string `"\"cond\""`. Valueless
/// directives such as `v-else` use `true`, which Pug renders as a bare
/// attribute name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Expr(String),
    Literal(bool),
}

impl AttrValue {
    /// Wraps expression source in double quotes, the form Pug expects for
    /// attribute values that should render as `name="expr"`.
    pub fn quoted(expr: &str) -> Self {
        Self::Expr(format!("\"{expr}\""))
    }
}

/// A single attribute on a [`TagNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub name: String,
    pub val: AttrValue,
    #[serde(rename = "mustEscape", default)]
    pub must_escape: bool,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

impl Attr {
    /// Builds a directive attribute the way the downstream Vue compiler
    /// expects it: never HTML-escaped and without a source position.
    pub fn directive(name: impl Into<String>, val: AttrValue) -> Self {
        Self {
            name: name.into(),
            val,
            must_escape: false,
            span: Span::default(),
            rest: Fields::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    pub name: String,
    #[serde(rename = "selfClosing", default)]
    pub self_closing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Box<Node>>,
    #[serde(default)]
    pub attrs: Vec<Attr>,
    #[serde(rename = "attributeBlocks", default)]
    pub attribute_blocks: Vec<serde_json::Value>,
    #[serde(rename = "isInline", default)]
    pub is_inline: bool,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub val: String,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

/// A `- code` / `= code` line. `buffer` means the value is written into the
/// output; `must_escape` means it is HTML-escaped on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeNode {
    pub val: String,
    #[serde(default)]
    pub buffer: bool,
    #[serde(rename = "mustEscape", default)]
    pub must_escape: bool,
    #[serde(rename = "isInline", default)]
    pub is_inline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Box<Node>>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

/// `if`/`else if`/`else` as parsed. The consequent is always a Block node;
/// the alternate is absent, a Block (`else`), or another Conditional
/// (`else if`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalNode {
    pub test: String,
    pub consequent: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Box<Node>>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

/// `each val, key in obj`. `key` is serialized even when absent because the
/// Pug parser always emits it (as `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EachNode {
    pub obj: String,
    pub val: String,
    #[serde(default)]
    pub key: Option<String>,
    pub block: Box<Node>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
    pub val: String,
    #[serde(default)]
    pub buffer: bool,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

/// Any node kind the pass does not rewrite: Mixin, Case, While, Filter,
/// Include, and whatever future parsers invent. The `kind` field holds the
/// original `"type"` string and `rest` holds every payload field, so the node
/// round-trips unchanged. `block` is split out because child blocks of
/// unknown kinds are still descended into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Box<Node>>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(flatten)]
    pub rest: Fields,
}

/// A node of the template tree, discriminated by the JSON `"type"` field.
///
/// Serialization is hand-written rather than derived: a known `"type"`
/// dispatches to its variant and any other `"type"` lands in [`Node::Other`],
/// while a *known* kind with missing or malformed payload fields stays a hard
/// deserialization error instead of silently degrading to passthrough. The
/// tree is expected to arrive as JSON (or another self-describing format).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Tag(TagNode),
    Text(TextNode),
    Code(CodeNode),
    Conditional(ConditionalNode),
    Each(EachNode),
    Block(BlockNode),
    Comment(CommentNode),
    Other(OtherNode),
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error as _;
        let value = tagged_json(self).map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

/// Serializes a node to a JSON value with the `"type"` discriminant first,
/// the way Pug parsers emit nodes.
fn tagged_json(node: &Node) -> Result<serde_json::Value, serde_json::Error> {
    let (kind, payload) = match node {
        Node::Tag(n) => ("Tag", serde_json::to_value(n)?),
        Node::Text(n) => ("Text", serde_json::to_value(n)?),
        Node::Code(n) => ("Code", serde_json::to_value(n)?),
        Node::Conditional(n) => ("Conditional", serde_json::to_value(n)?),
        Node::Each(n) => ("Each", serde_json::to_value(n)?),
        Node::Block(n) => ("Block", serde_json::to_value(n)?),
        Node::Comment(n) => ("Comment", serde_json::to_value(n)?),
        // OtherNode already carries its `"type"` in the `kind` field.
        Node::Other(n) => return serde_json::to_value(n),
    };
    let serde_json::Value::Object(fields) = payload else {
        return Ok(payload);
    };
    let mut map = Fields::with_capacity(fields.len() + 1);
    map.insert(
        "type".to_string(),
        serde_json::Value::String(kind.to_string()),
    );
    map.extend(fields);
    Ok(serde_json::Value::Object(map))
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = match value.get("type").and_then(serde_json::Value::as_str) {
            Some(kind) => kind.to_string(),
            None => return Err(D::Error::custom("node object without a \"type\" field")),
        };
        let node = match kind.as_str() {
            "Tag" => Node::Tag(from_payload(strip_tag(value))?),
            "Text" => Node::Text(from_payload(strip_tag(value))?),
            "Code" => Node::Code(from_payload(strip_tag(value))?),
            "Conditional" => Node::Conditional(from_payload(strip_tag(value))?),
            "Each" => Node::Each(from_payload(strip_tag(value))?),
            "Block" => Node::Block(from_payload(strip_tag(value))?),
            "Comment" => Node::Comment(from_payload(strip_tag(value))?),
            // OtherNode reads `"type"` itself, so it keeps the field.
            _ => Node::Other(from_payload(value)?),
        };
        Ok(node)
    }
}

/// Removes the consumed `"type"` discriminant so it cannot leak into a known
/// variant's passthrough `rest` map. `shift_remove` keeps the order of the
/// remaining fields.
fn strip_tag(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(object) = value.as_object_mut() {
        object.shift_remove("type");
    }
    value
}

fn from_payload<T, E>(value: serde_json::Value) -> Result<T, E>
where
    T: serde::de::DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(value).map_err(E::custom)
}

impl Node {
    /// The JSON `"type"` string for this node.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Tag(_) => "Tag",
            Node::Text(_) => "Text",
            Node::Code(_) => "Code",
            Node::Conditional(_) => "Conditional",
            Node::Each(_) => "Each",
            Node::Block(_) => "Block",
            Node::Comment(_) => "Comment",
            Node::Other(other) => other.kind.as_str(),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Node::Tag(n) => &n.span,
            Node::Text(n) => &n.span,
            Node::Code(n) => &n.span,
            Node::Conditional(n) => &n.span,
            Node::Each(n) => &n.span,
            Node::Block(n) => &n.span,
            Node::Comment(n) => &n.span,
            Node::Other(n) => &n.span,
        }
    }

    /// The `block` child carried by kinds the walk descends into without
    /// rewriting. Conditional and Each children are handled by their own
    /// transformers, and a Block's children live in `nodes`, not `block`.
    pub(crate) fn child_block_mut(&mut self) -> Option<&mut Node> {
        match self {
            Node::Tag(n) => n.block.as_deref_mut(),
            Node::Code(n) => n.block.as_deref_mut(),
            Node::Other(n) => n.block.as_deref_mut(),
            _ => None,
        }
    }
}
