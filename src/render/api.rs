//! API reference renderer and machine-readable definitions dump.

use crate::model::{ApiCorpus, RawDefinition};
use crate::render::NO_RESULTS;
use crate::scan::typescript::parse_members;
use anyhow::Result;
use std::fmt::Write;

/// Render the API reference document.
///
/// Definitions of each kind are sorted alphabetically by name before
/// rendering.
pub fn reference(corpus: &ApiCorpus) -> String {
    let mut out = String::from(
        "# Plugin API Reference\n\n*Auto-generated from TypeScript definitions*\n\n\
         ## Table of Contents\n\n\
         - [Interfaces](#interfaces)\n\
         - [Type Aliases](#type-aliases)\n\
         - [Enums](#enums)\n\
         - [Classes](#classes)\n\n",
    );

    out.push_str("## Interfaces\n\n");
    if corpus.interfaces.is_empty() {
        out.push_str(NO_RESULTS);
        out.push_str("\n\n");
    }
    for iface in sorted(&corpus.interfaces) {
        render_interface(&mut out, iface);
    }

    out.push_str("## Type Aliases\n\n");
    render_verbatim_section(&mut out, &corpus.types);

    out.push_str("## Enums\n\n");
    render_verbatim_section(&mut out, &corpus.enums);

    out.push_str("## Classes\n\n");
    if corpus.classes.is_empty() {
        out.push_str(NO_RESULTS);
        out.push_str("\n\n");
    }
    for class in sorted(&corpus.classes) {
        let _ = write!(
            out,
            "### {}\n\n*Source: `{}`*\n\n---\n\n",
            class.name, class.source_file
        );
    }

    out
}

/// Serialize all four definition collections, keyed by kind and sorted the
/// same way the reference document is.
pub fn definitions_json(corpus: &ApiCorpus) -> Result<String> {
    let sorted_corpus = ApiCorpus {
        interfaces: sorted(&corpus.interfaces).into_iter().cloned().collect(),
        types: sorted(&corpus.types).into_iter().cloned().collect(),
        enums: sorted(&corpus.enums).into_iter().cloned().collect(),
        classes: sorted(&corpus.classes).into_iter().cloned().collect(),
    };
    let mut json = serde_json::to_string_pretty(&sorted_corpus)?;
    json.push('\n');
    Ok(json)
}

fn sorted(defs: &[RawDefinition]) -> Vec<&RawDefinition> {
    let mut defs: Vec<&RawDefinition> = defs.iter().collect();
    defs.sort_by(|a, b| a.name.cmp(&b.name));
    defs
}

fn render_interface(out: &mut String, iface: &RawDefinition) {
    let _ = write!(
        out,
        "### {}\n\n*Source: `{}`*\n\n",
        iface.name, iface.source_file
    );

    let members = parse_members(&iface.body);

    if !members.properties.is_empty() {
        out.push_str("#### Properties\n\n");
        out.push_str("| Name | Type | Optional | Description |\n");
        out.push_str("|------|------|----------|-------------|\n");
        for prop in &members.properties {
            let optional = if prop.optional { "Yes" } else { "No" };
            let _ = writeln!(out, "| {} | {} | {} | |", prop.name, prop.ty, optional);
        }
        out.push('\n');
    }

    if !members.methods.is_empty() {
        out.push_str("#### Methods\n\n");
        for method in &members.methods {
            let _ = write!(
                out,
                "##### {}\n\n```typescript\n{}({}): {}\n```\n\n",
                method.name, method.name, method.parameters, method.return_type
            );
        }
    }

    let _ = write!(
        out,
        "#### Full Definition\n\n```typescript\n{}\n```\n\n---\n\n",
        iface.full_definition
    );
}

/// Section body for kinds rendered as their verbatim declaration text.
fn render_verbatim_section(out: &mut String, defs: &[RawDefinition]) {
    if defs.is_empty() {
        out.push_str(NO_RESULTS);
        out.push_str("\n\n");
        return;
    }
    for def in sorted(defs) {
        let _ = write!(
            out,
            "### {}\n\n*Source: `{}`*\n\n```typescript\n{}\n```\n\n---\n\n",
            def.name, def.source_file, def.full_definition
        );
    }
}
