//! Persisted Documentation Artifact
//!
//! Shape of `documentation.json`. Top-level key order is fixed (`anchorIds`,
//! `typedoc`, `codeExamples`) and mirrors the declaration order here; the
//! anchor map preserves insertion order so repeated runs serialize
//! identically.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::reflection::ReflectionDocument;

/// Declaration name to `<kind-slug>-<name-slug>` anchor. Insertion ordered.
pub type AnchorIdMap = Map<String, Value>;

/// One usage example gathered from the conventional code-examples directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    #[serde(rename = "fileName")]
    pub file_name: String,

    #[serde(rename = "filePath")]
    pub file_path: String,

    /// Raw file text with internal import paths rewritten to the published
    /// package name.
    #[serde(rename = "rawContents")]
    pub raw_contents: String,
}

/// The `documentation.json` artifact. Created empty and populated field by
/// field; every run fully recomputes all three fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentationJson {
    #[serde(rename = "anchorIds", skip_serializing_if = "Option::is_none")]
    pub anchor_ids: Option<AnchorIdMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub typedoc: Option<ReflectionDocument>,

    #[serde(rename = "codeExamples", skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<Vec<CodeExample>>,
}
