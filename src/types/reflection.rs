//! Reflection Document Model
//!
//! Serde model for the reflector's JSON output. Only the fields the
//! normalizer inspects (name, kind, kindString, children, signatures) are
//! typed; everything else passes through a flattened map so re-serialization
//! is lossless and repeated runs produce byte-identical output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The top-level reflector output shares the node shape.
pub type ReflectionDocument = ReflectionNode;

/// One declaration in the reflection tree (class, method, accessor,
/// constructor, module container, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflectionNode {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub kind: i64,

    #[serde(rename = "kindString", skip_serializing_if = "Option::is_none")]
    pub kind_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ReflectionNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<Signature>>,

    /// Opaque passthrough: flags, sources, comment, decorators, types, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReflectionNode {
    /// Child declarations, empty when absent.
    pub fn children(&self) -> &[ReflectionNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The nested constructor declaration, if any.
    pub fn constructor(&mut self) -> Option<&mut ReflectionNode> {
        self.children
            .as_mut()?
            .iter_mut()
            .find(|child| {
                child.name == "constructor"
                    || child.kind_string.as_deref() == Some("Constructor")
            })
    }
}

/// A call signature attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub kind: i64,

    #[serde(rename = "kindString", skip_serializing_if = "Option::is_none")]
    pub kind_string: Option<String>,

    /// Declared return type; for constructor signatures this names the class.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A type reference within a signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
