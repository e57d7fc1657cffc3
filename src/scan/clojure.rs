//! ClojureScript scanner — function declarations, namespaces, DOM hints.
//!
//! Two independent sweeps run over the same text: exported declarations
//! (anchored on the `^:export` marker) and a broader inventory sweep over any
//! `defn`. The sweeps are not cross-deduplicated.

use crate::model::{DomCorpus, FunctionRecord};
use regex::Regex;
use std::sync::LazyLock;

// A file is assumed single-namespace; only the first match is used.
static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(ns\s+([^\s\)]+)").unwrap());

static RE_EXPORTED_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\(defn\s+\^:export\s+([^\s\[\]]+)(?:\s*\[([^\]]*)\])?(?:\s*"([^"]*)")?"#)
        .unwrap()
});

static RE_INTERNAL_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\(defn\s+([^\s\[\]\^]+)(?:\s*\[([^\]]*)\])?(?:\s*"([^"]*)")?"#).unwrap()
});

static RE_DATA_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data-([A-Za-z0-9_-]+)").unwrap());

static RE_ELEMENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":id\s+"([^"]+)""#).unwrap());

// Over-approximates: any defn counts as a possible component.
static RE_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"defn\s+([A-Za-z0-9_-]+)").unwrap());

/// Scan one file for function declarations.
///
/// Exported declarations come first, followed by the inventory sweep. An
/// exported function whose name also satisfies the inventory pattern on its
/// own can appear in both lists.
pub fn scan_functions(content: &str, source_file: &str) -> Vec<FunctionRecord> {
    let namespace = RE_NAMESPACE
        .captures(content)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let mut records = Vec::new();

    for caps in RE_EXPORTED_FN.captures_iter(content) {
        records.push(FunctionRecord {
            name: clean_name(&caps[1]),
            parameters: split_parameters(caps.get(2).map_or("", |m| m.as_str())),
            docstring: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
            namespace: namespace.clone(),
            source_file: source_file.to_string(),
            exported: true,
        });
    }

    for caps in RE_INTERNAL_FN.captures_iter(content) {
        let name = clean_name(&caps[1]);
        if name.len() <= 2 {
            continue;
        }
        records.push(FunctionRecord {
            name,
            parameters: split_parameters(caps.get(2).map_or("", |m| m.as_str())),
            docstring: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
            namespace: namespace.clone(),
            source_file: source_file.to_string(),
            exported: false,
        });
    }

    records
}

/// Per-file DOM structure hints.
#[derive(Debug, Default)]
pub struct DomHints {
    pub data_attributes: Vec<String>,
    pub element_ids: Vec<String>,
    pub component_names: Vec<String>,
}

/// Scan one file for DOM structure hints: data-attribute-shaped tokens,
/// quoted `:id` values, and possible component names.
pub fn scan_dom(content: &str) -> DomHints {
    let mut hints = DomHints::default();

    for caps in RE_DATA_ATTRIBUTE.captures_iter(content) {
        let attr = format!("data-{}", &caps[1]);
        if !hints.data_attributes.iter().any(|a| a == &attr) {
            hints.data_attributes.push(attr);
        }
    }

    for caps in RE_ELEMENT_ID.captures_iter(content) {
        let id = caps[1].to_string();
        if !hints.element_ids.iter().any(|i| i == &id) {
            hints.element_ids.push(id);
        }
    }

    for caps in RE_COMPONENT.captures_iter(content) {
        let name = caps[1].to_string();
        if !hints.component_names.iter().any(|c| c == &name) {
            hints.component_names.push(name);
        }
    }

    hints
}

impl DomHints {
    pub fn merge_into(self, corpus: &mut DomCorpus) {
        corpus.data_attributes.extend(self.data_attributes);
        corpus.element_ids.extend(self.element_ids);
        corpus.component_names.extend(self.component_names);
    }
}

fn clean_name(raw: &str) -> String {
    raw.strip_prefix('-').unwrap_or(raw).to_string()
}

/// Split a parameter vector body into tokens, dropping metadata markers.
fn split_parameters(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|token| !token.starts_with('^'))
        .map(str::to_string)
        .collect()
}
