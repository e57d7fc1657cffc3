//! Data model for extracted definitions — format-agnostic.

use serde::Serialize;
use std::collections::HashSet;

/// Declaration kind for a [`RawDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefKind {
    Interface,
    Type,
    Enum,
    Class,
}

/// An extracted declaration with its body left unparsed.
///
/// `body` is the text between the balanced braces (interfaces, enums) or the
/// right-hand side (type aliases); empty for classes, which are recorded for
/// inventory only. Identity key is `(kind, name)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDefinition {
    pub kind: DefKind,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Verbatim declaration text, kept for fallback display.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_definition: String,
    #[serde(rename = "file")]
    pub source_file: String,
}

/// All typed-source definitions gathered across a tree, keyed by kind.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCorpus {
    pub interfaces: Vec<RawDefinition>,
    pub types: Vec<RawDefinition>,
    pub enums: Vec<RawDefinition>,
    pub classes: Vec<RawDefinition>,
}

/// A property line parsed out of an interface body.
#[derive(Debug, PartialEq)]
pub struct PropertyDef {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

/// A method line parsed out of an interface body.
#[derive(Debug, PartialEq)]
pub struct MethodDef {
    pub name: String,
    /// Captured but not rendered; signatures display without type parameters.
    #[allow(dead_code)]
    pub generics: Option<String>,
    pub parameters: String,
    pub return_type: String,
}

/// Members derived on demand from one interface body; never stored.
#[derive(Debug, Default)]
pub struct Members {
    pub properties: Vec<PropertyDef>,
    pub methods: Vec<MethodDef>,
}

/// A custom-property declaration with its literal value text.
///
/// Entries are never deduplicated — the value history across files is kept as
/// an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
    #[serde(rename = "file")]
    pub source_file: String,
}

/// Stylesheet definitions gathered across a tree.
#[derive(Debug, Default)]
pub struct StyleCorpus {
    pub class_names: OrderedSet,
    pub custom_properties: Vec<CustomProperty>,
    /// Subset of `class_names` matching the component prefix allowlist.
    pub component_class_names: OrderedSet,
}

/// DOM structure hints gathered from ClojureScript sources.
#[derive(Debug, Default)]
pub struct DomCorpus {
    pub data_attributes: OrderedSet,
    pub element_ids: OrderedSet,
    pub component_names: OrderedSet,
}

/// One function declaration record.
///
/// Records are never deduplicated — two files may define same-named functions
/// in different namespaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub name: String,
    pub parameters: Vec<String>,
    pub docstring: String,
    pub namespace: String,
    #[serde(rename = "file")]
    pub source_file: String,
    pub exported: bool,
}

/// Insertion-ordered string set.
///
/// Iteration order is first-insertion order, which keeps rendered output
/// stable for an unchanged scan order.
#[derive(Debug, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    /// Insert a value; returns false if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Alphabetically sorted view of the contents.
    pub fn sorted(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self.items.iter().map(String::as_str).collect();
        items.sort_unstable();
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Extend<String> for OrderedSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_set_dedups() {
        let mut set = OrderedSet::default();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(set.sorted(), vec!["a", "b"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn class_definition_serializes_without_body() {
        let def = RawDefinition {
            kind: DefKind::Class,
            name: "Widget".to_string(),
            body: String::new(),
            full_definition: String::new(),
            source_file: "widget.ts".to_string(),
        };
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"{"kind":"class","name":"Widget","file":"widget.ts"}"#);
    }
}
