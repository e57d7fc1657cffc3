//! Stylesheet renderers — variables reference and classes reference.

use crate::model::{CustomProperty, StyleCorpus};
use crate::render::{bullet_list, NO_RESULTS};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

static RE_LEADING_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)").unwrap());

/// Variable category heuristic — first match on the variable name wins.
pub fn variable_category(name: &str) -> &'static str {
    if name.contains("color") {
        "Colors"
    } else if name.contains("font") || name.contains("text") {
        "Typography"
    } else if name.contains("size") || name.contains("width") || name.contains("height") {
        "Dimensions"
    } else if name.contains("spacing") || name.contains("margin") || name.contains("padding") {
        "Spacing"
    } else if name.contains("border") || name.contains("radius") {
        "Borders"
    } else if name.contains("shadow") {
        "Shadows"
    } else if name.contains("z-index") {
        "Z-Index"
    } else {
        "General"
    }
}

/// Group custom properties by category, categories in first-occurrence order.
/// Entries keep their corpus order; duplicates stay separate.
pub(crate) fn by_category(properties: &[CustomProperty]) -> Vec<(&'static str, Vec<&CustomProperty>)> {
    let mut groups: Vec<(&'static str, Vec<&CustomProperty>)> = Vec::new();
    for property in properties {
        let category = variable_category(&property.name);
        match groups.iter_mut().find(|(label, _)| *label == category) {
            Some((_, entries)) => entries.push(property),
            None => groups.push((category, vec![property])),
        }
    }
    groups
}

/// Render the CSS variables reference document.
pub fn variables_reference(corpus: &StyleCorpus) -> String {
    let mut out =
        String::from("# CSS Variables Reference\n\n*Auto-generated from stylesheet sources*\n\n");

    if corpus.custom_properties.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }

    for (category, properties) in by_category(&corpus.custom_properties) {
        let _ = write!(out, "## {}\n\n", category);
        out.push_str("| Variable | Default Value | Source |\n");
        out.push_str("|----------|---------------|--------|\n");
        for property in properties {
            let _ = writeln!(
                out,
                "| `{}` | `{}` | `{}` |",
                property.name, property.value, property.source_file
            );
        }
        out.push('\n');
    }

    out
}

/// Render the CSS classes reference document.
pub fn classes_reference(corpus: &StyleCorpus) -> String {
    let mut out =
        String::from("# CSS Classes Reference\n\n*Auto-generated from stylesheet sources*\n\n");

    out.push_str("## Component Classes\n\n");
    out.push_str("These classes are used for specific UI components:\n\n");

    let groups = component_groups(corpus);
    if groups.is_empty() {
        out.push_str(NO_RESULTS);
        out.push_str("\n\n");
    }
    for (prefix, mut names) in groups {
        let _ = write!(out, "### {} Components\n\n", prefix.to_uppercase());
        names.sort_unstable();
        let items: Vec<String> = names.iter().map(|n| format!("`.{}`", n)).collect();
        bullet_list(&mut out, &items);
    }

    out.push_str("## Utility Classes\n\n");
    out.push_str("General utility classes:\n\n");
    let mut utility: Vec<&str> = corpus
        .class_names
        .iter()
        .filter(|&name| {
            !corpus.component_class_names.contains(name)
                && !name.starts_with("ls-")
                && !name.starts_with("cp__")
                && !name.starts_with("block-")
                && !name.starts_with("page-")
        })
        .collect();
    utility.sort_unstable();
    let items: Vec<String> = utility.iter().map(|n| format!("`.{}`", n)).collect();
    bullet_list(&mut out, &items);

    out
}

/// Component class names grouped by their leading alphabetic run, groups in
/// first-occurrence order.
fn component_groups(corpus: &StyleCorpus) -> Vec<(String, Vec<&str>)> {
    let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
    for name in corpus.component_class_names.iter() {
        let prefix = RE_LEADING_ALPHA
            .captures(name)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| "other".to_string());
        match groups.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, names)) => names.push(name),
            None => groups.push((prefix, vec![name])),
        }
    }
    groups
}

/// Component class names carrying one of the given prefixes, sorted.
pub(crate) fn components_with_prefix<'a>(
    corpus: &'a StyleCorpus,
    prefixes: &[&str],
) -> Vec<&'a str> {
    let mut names: Vec<&str> = corpus
        .component_class_names
        .iter()
        .filter(|name| prefixes.iter().any(|p| name.starts_with(p)))
        .collect();
    names.sort_unstable();
    names
}
