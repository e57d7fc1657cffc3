//! Stylesheet scanner — selector class names and custom properties.

use crate::model::CustomProperty;
use regex::Regex;
use std::sync::LazyLock;

// A class selector chain immediately followed by a rule body. Compound
// selectors like `.a.b{` contribute each chained class.
static RE_CLASS_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)\s*\{").unwrap()
});

static RE_CUSTOM_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--([\w-]+):\s*([^;]+);").unwrap());

/// Class-name prefixes that mark a UI component class.
pub const COMPONENT_PREFIXES: &[&str] = &["ls-", "cp__", "block-", "page-", "sidebar-", "editor-"];

/// Definitions extracted from one stylesheet.
#[derive(Debug, Default)]
pub struct StyleSheet {
    /// Deduplicated within the file, in first-occurrence order.
    pub class_names: Vec<String>,
    /// Kept verbatim and in order; never deduplicated.
    pub custom_properties: Vec<CustomProperty>,
    pub component_class_names: Vec<String>,
}

/// Scan one stylesheet for class names and custom-property declarations.
pub fn scan(content: &str, source_file: &str) -> StyleSheet {
    let mut sheet = StyleSheet::default();

    for caps in RE_CLASS_SELECTOR.captures_iter(content) {
        for class_name in caps[1].split('.') {
            if !sheet.class_names.iter().any(|c| c == class_name) {
                sheet.class_names.push(class_name.to_string());
            }
        }
    }

    for caps in RE_CUSTOM_PROPERTY.captures_iter(content) {
        sheet.custom_properties.push(CustomProperty {
            name: format!("--{}", &caps[1]),
            value: caps[2].trim().to_string(),
            source_file: source_file.to_string(),
        });
    }

    sheet.component_class_names = sheet
        .class_names
        .iter()
        .filter(|name| COMPONENT_PREFIXES.iter().any(|p| name.starts_with(p)))
        .cloned()
        .collect();

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_class_selector() {
        let sheet = scan(".header { color: red; }", "a.css");
        assert_eq!(sheet.class_names, vec!["header"]);
    }

    #[test]
    fn compound_selector_yields_each_class() {
        let sheet = scan(".a.b { margin: 0; }", "a.css");
        assert_eq!(sheet.class_names, vec!["a", "b"]);
    }

    #[test]
    fn class_names_dedup_within_file() {
        let sheet = scan(".x { a: 1; }\n.x { b: 2; }\n.y { c: 3; }", "a.css");
        assert_eq!(sheet.class_names, vec!["x", "y"]);
    }

    #[test]
    fn custom_properties_keep_duplicates() {
        let css = ":root { --ls-color: #fff; }\n.dark { --ls-color: #000; }";
        let sheet = scan(css, "a.css");
        assert_eq!(sheet.custom_properties.len(), 2);
        assert_eq!(sheet.custom_properties[0].name, "--ls-color");
        assert_eq!(sheet.custom_properties[0].value, "#fff");
        assert_eq!(sheet.custom_properties[1].value, "#000");
    }

    #[test]
    fn component_prefix_subset() {
        let css = ".ls-block { a: 1; }\n.cp__sidebar { b: 2; }\n.plain { c: 3; }";
        let sheet = scan(css, "a.css");
        assert_eq!(sheet.component_class_names, vec!["ls-block", "cp__sidebar"]);
        assert_eq!(sheet.class_names.len(), 3);
    }

    #[test]
    fn no_matches_is_empty() {
        let sheet = scan("/* only a comment */", "a.css");
        assert!(sheet.class_names.is_empty());
        assert!(sheet.custom_properties.is_empty());
    }
}
