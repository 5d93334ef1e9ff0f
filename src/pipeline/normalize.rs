//! Reflection Normalizer
//!
//! Post-processes raw reflector output into the shape the artifact persists:
//!
//! - flattens multi-entry-point documents into one top-level `children` list
//! - repairs synthetic `λN` names the analyzer assigns to re-exported classes,
//!   recovering the real class name from the constructor signature's return
//!   type
//! - computes anchor IDs (`<kind-slug>-<name-slug>`) for same-page navigation

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::constants::slug as slug_constants;
use crate::types::{AnchorIdMap, ReflectionDocument};

/// Synthetic names the analyzer emits for aliased re-exports.
static ALIAS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^λ[0-9]+$").expect("alias pattern is valid"));

/// Flatten a combined multi-entry-point document.
///
/// When more than one entry point was analyzed, the analyzer wraps each one in
/// a container node; the flattened document concatenates every container's
/// children, in entry-point order. A single-entry-point document passes
/// through unchanged.
pub fn flatten_entry_points(
    mut document: ReflectionDocument,
    entry_point_count: usize,
) -> ReflectionDocument {
    if entry_point_count <= 1 {
        return document;
    }

    let containers = document.children.take().unwrap_or_default();
    let mut flattened = Vec::new();
    for mut container in containers {
        flattened.extend(container.children.take().unwrap_or_default());
    }
    document.children = Some(flattened);
    document
}

/// Merge one-document-per-entry-point runs into a single document.
///
/// The first document provides the top-level shape; later documents contribute
/// their children in order.
pub fn merge_documents(documents: Vec<ReflectionDocument>) -> Option<ReflectionDocument> {
    let mut documents = documents.into_iter();
    let mut merged = documents.next()?;

    for mut document in documents {
        let extra = document.children.take().unwrap_or_default();
        merged.children.get_or_insert_with(Vec::new).extend(extra);
    }
    Some(merged)
}

/// Rewrite synthetic `λN` top-level declaration names back to the real class
/// name declared by the constructor signature's return type. The fix is
/// applied to both the declaration and the signature; everything else is left
/// untouched.
pub fn repair_aliases(document: &mut ReflectionDocument) {
    let Some(children) = document.children.as_mut() else {
        return;
    };

    for declaration in children.iter_mut() {
        if !ALIAS_NAME.is_match(&declaration.name) {
            continue;
        }

        let Some(constructor) = declaration.constructor() else {
            continue;
        };
        let Some(signature) = constructor
            .signatures
            .as_mut()
            .and_then(|signatures| signatures.first_mut())
        else {
            continue;
        };
        let Some(real_name) = signature
            .return_type
            .as_ref()
            .and_then(|type_ref| type_ref.name.clone())
        else {
            continue;
        };

        signature.name = real_name.clone();
        declaration.name = real_name;
    }
}

/// Compute anchor IDs for every top-level declaration with a defined
/// `kindString` other than "Variable" (case-insensitive). Two declarations
/// sharing a name collide; the last one wins.
pub fn anchor_ids(document: &ReflectionDocument) -> AnchorIdMap {
    let mut anchors = AnchorIdMap::new();

    for declaration in document.children() {
        let Some(kind) = declaration.kind_string.as_deref() else {
            continue;
        };
        if kind.eq_ignore_ascii_case("variable") {
            continue;
        }
        anchors.insert(
            declaration.name.clone(),
            Value::String(format!("{}-{}", slug(kind), slug(&declaration.name))),
        );
    }

    anchors
}

/// Slugify for anchor IDs: lowercase, strip special characters, collapse
/// whitespace runs to a single dash, collapse doubled dashes.
pub fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.to_lowercase().chars() {
        if slug_constants::STRIPPED_CHARS.contains(c) {
            continue;
        }
        if c.is_whitespace() || c == '-' {
            if !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReflectionNode;
    use proptest::prelude::*;
    use serde_json::json;

    fn document(children: Value) -> ReflectionDocument {
        serde_json::from_value(json!({
            "id": 0,
            "name": "my-lib",
            "kind": 1,
            "children": children
        }))
        .unwrap()
    }

    // -------------------------------------------------------------------------
    // Slugification
    // -------------------------------------------------------------------------

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("Class"), "class");
        assert_eq!(slug("SkyIdDirective"), "skyiddirective");
        assert_eq!(slug("Call signature"), "call-signature");
        assert_eq!(slug("Type alias"), "type-alias");
    }

    #[test]
    fn test_slug_strips_special_characters() {
        assert_eq!(slug("Sky_Id.Directive!"), "skyiddirective");
        assert_eq!(slug("a@b#c$d"), "abcd");
        assert_eq!(slug("'quoted'/\"path\""), "quotedpath");
    }

    #[test]
    fn test_slug_collapses_whitespace_and_doubled_dashes() {
        assert_eq!(slug("a   b"), "a-b");
        assert_eq!(slug("a - b"), "a-b");
        assert_eq!(slug("a--b"), "a-b");
    }

    proptest! {
        #[test]
        fn prop_slug_is_lowercase_and_clean(input in ".{0,64}") {
            let s = slug(&input);
            prop_assert!(!s.contains("--"));
            prop_assert!(!s.chars().any(|c| c.is_uppercase()));
            prop_assert!(!s.chars().any(|c| c.is_whitespace()));
            for stripped in crate::constants::slug::STRIPPED_CHARS.chars() {
                prop_assert!(!s.contains(stripped));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Entry-point merging
    // -------------------------------------------------------------------------

    #[test]
    fn test_flatten_concatenates_container_children_in_order() {
        let doc = document(json!([
            {
                "id": 1, "name": "entry-a", "kind": 2,
                "children": [
                    { "id": 10, "name": "A1", "kind": 128 },
                    { "id": 11, "name": "A2", "kind": 128 }
                ]
            },
            {
                "id": 2, "name": "entry-b", "kind": 2,
                "children": [
                    { "id": 20, "name": "B1", "kind": 128 },
                    { "id": 21, "name": "B2", "kind": 128 },
                    { "id": 22, "name": "B3", "kind": 128 }
                ]
            }
        ]));

        let flattened = flatten_entry_points(doc, 2);
        let names: Vec<&str> = flattened
            .children()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["A1", "A2", "B1", "B2", "B3"]);
    }

    #[test]
    fn test_flatten_single_entry_point_is_identity() {
        let doc = document(json!([
            { "id": 1, "name": "FooComponent", "kind": 128, "kindString": "Class" }
        ]));
        let before = doc.clone();
        assert_eq!(flatten_entry_points(doc, 1), before);
    }

    #[test]
    fn test_merge_documents_concatenates_children() {
        let first = document(json!([
            { "id": 1, "name": "A", "kind": 128 },
            { "id": 2, "name": "B", "kind": 128 }
        ]));
        let second = document(json!([
            { "id": 3, "name": "C", "kind": 128 },
            { "id": 4, "name": "D", "kind": 128 },
            { "id": 5, "name": "E", "kind": 128 }
        ]));

        let merged = merge_documents(vec![first, second]).unwrap();
        assert_eq!(merged.children().len(), 5);
        assert_eq!(merged.children()[0].name, "A");
        assert_eq!(merged.children()[4].name, "E");
    }

    #[test]
    fn test_merge_documents_empty_and_singleton() {
        assert!(merge_documents(vec![]).is_none());

        let only = document(json!([{ "id": 1, "name": "A", "kind": 128 }]));
        let merged = merge_documents(vec![only.clone()]).unwrap();
        assert_eq!(merged, only);
    }

    // -------------------------------------------------------------------------
    // Alias repair
    // -------------------------------------------------------------------------

    fn aliased_class(alias: &str, real: &str) -> Value {
        json!({
            "id": 1,
            "name": alias,
            "kind": 128,
            "kindString": "Class",
            "children": [
                {
                    "id": 2,
                    "name": "constructor",
                    "kind": 512,
                    "kindString": "Constructor",
                    "signatures": [
                        {
                            "id": 3,
                            "name": format!("new {}", alias),
                            "kind": 16384,
                            "kindString": "Constructor signature",
                            "type": { "type": "reference", "name": real }
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_alias_repair_rewrites_declaration_and_signature() {
        let mut doc = document(json!([aliased_class("λ2", "SkyIdDirective")]));
        repair_aliases(&mut doc);

        let declaration = &doc.children()[0];
        assert_eq!(declaration.name, "SkyIdDirective");
        let signature = &declaration.children()[0].signatures.as_ref().unwrap()[0];
        assert_eq!(signature.name, "SkyIdDirective");
    }

    #[test]
    fn test_alias_repair_leaves_non_aliased_declarations_untouched() {
        let mut doc = document(json!([
            aliased_class("SkyIdDirective", "SomethingElse"),
            { "id": 9, "name": "λx", "kind": 128, "kindString": "Class" },
            { "id": 10, "name": "helper", "kind": 64, "kindString": "Function" }
        ]));
        let before = doc.clone();
        repair_aliases(&mut doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_alias_repair_tolerates_missing_constructor_or_signature() {
        let mut doc = document(json!([
            { "id": 1, "name": "λ1", "kind": 128, "kindString": "Class" },
            {
                "id": 2, "name": "λ2", "kind": 128, "kindString": "Class",
                "children": [
                    { "id": 3, "name": "constructor", "kind": 512, "kindString": "Constructor" }
                ]
            }
        ]));
        let before = doc.clone();
        repair_aliases(&mut doc);
        assert_eq!(doc, before);
    }

    // -------------------------------------------------------------------------
    // Anchor IDs
    // -------------------------------------------------------------------------

    #[test]
    fn test_anchor_ids_keys_and_slugs() {
        let doc = document(json!([
            { "id": 1, "name": "SkyIdDirective", "kind": 128, "kindString": "Class" },
            { "id": 2, "name": "SkyIdModule", "kind": 128, "kindString": "Class" },
            { "id": 3, "name": "SKY_ID_TOKEN", "kind": 32, "kindString": "Variable" },
            { "id": 4, "name": "lowercased", "kind": 32, "kindString": "variable" },
            { "id": 5, "name": "untyped", "kind": 0 }
        ]));

        let anchors = anchor_ids(&doc);
        assert_eq!(anchors.len(), 2);
        assert_eq!(
            anchors.get("SkyIdDirective").unwrap(),
            "class-skyiddirective"
        );
        assert_eq!(anchors.get("SkyIdModule").unwrap(), "class-skyidmodule");
        assert!(!anchors.contains_key("SKY_ID_TOKEN"));
        assert!(!anchors.contains_key("lowercased"));
        assert!(!anchors.contains_key("untyped"));
    }

    #[test]
    fn test_anchor_id_collision_last_write_wins() {
        let doc = document(json!([
            { "id": 1, "name": "Shared", "kind": 128, "kindString": "Class" },
            { "id": 2, "name": "Shared", "kind": 256, "kindString": "Interface" }
        ]));

        let anchors = anchor_ids(&doc);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors.get("Shared").unwrap(), "interface-shared");
    }

    #[test]
    fn test_anchor_ids_use_repaired_names() {
        let mut doc = document(json!([aliased_class("λ7", "SkyIdDirective")]));
        repair_aliases(&mut doc);
        let anchors = anchor_ids(&doc);
        assert!(anchors.contains_key("SkyIdDirective"));
        assert!(!anchors.contains_key("λ7"));
    }

    #[test]
    fn test_anchor_ids_on_childless_document() {
        let doc = ReflectionNode::default();
        assert!(anchor_ids(&doc).is_empty());
    }
}
