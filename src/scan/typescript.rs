//! TypeScript definition scanner — interfaces, type aliases, enums, classes.
//!
//! Anchor patterns locate declaration starts; interface bodies are captured
//! with the brace matcher, type aliases by their `;` terminator, enums by the
//! first `}` (enums do not nest, so non-balanced matching is intentional).

use crate::model::{DefKind, Members, MethodDef, PropertyDef, RawDefinition};
use crate::scan::brace::match_brace;
use regex::Regex;
use std::sync::LazyLock;

static RE_INTERFACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export interface\s+(\w+)(?:\s+extends\s+[^{]+)?\s*\{").unwrap()
});

static RE_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)export type\s+(\w+)\s*=\s*([^;]+);").unwrap());

static RE_ENUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)export enum\s+(\w+)\s*\{([^}]+)\}").unwrap());

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export class\s+(\w+)(?:\s+extends\s+[^{]+)?\s*\{").unwrap()
});

static RE_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*(<[^>]+>)?\s*\((.*?)\)\s*:\s*(.+)").unwrap());

static RE_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)(\??):\s*(.+)").unwrap());

/// Definitions extracted from one file.
#[derive(Debug, Default)]
pub struct FileDefinitions {
    pub interfaces: Vec<RawDefinition>,
    pub types: Vec<RawDefinition>,
    pub enums: Vec<RawDefinition>,
    pub classes: Vec<RawDefinition>,
}

/// Scan one TypeScript file for exported declarations.
pub fn scan(content: &str, source_file: &str) -> FileDefinitions {
    let mut defs = FileDefinitions::default();

    for caps in RE_INTERFACE.captures_iter(content) {
        let whole = caps.get(0).unwrap();
        // The anchor ends on the opening brace.
        let open = whole.end() - 1;
        let Some(close) = match_brace(content, open) else {
            continue;
        };
        defs.interfaces.push(RawDefinition {
            kind: DefKind::Interface,
            name: caps[1].to_string(),
            body: content[open + 1..close].trim().to_string(),
            full_definition: content[whole.start()..=close].to_string(),
            source_file: source_file.to_string(),
        });
    }

    for caps in RE_TYPE.captures_iter(content) {
        defs.types.push(RawDefinition {
            kind: DefKind::Type,
            name: caps[1].to_string(),
            body: caps[2].trim().to_string(),
            full_definition: caps[0].to_string(),
            source_file: source_file.to_string(),
        });
    }

    for caps in RE_ENUM.captures_iter(content) {
        defs.enums.push(RawDefinition {
            kind: DefKind::Enum,
            name: caps[1].to_string(),
            body: caps[2].trim().to_string(),
            full_definition: caps[0].to_string(),
            source_file: source_file.to_string(),
        });
    }

    for caps in RE_CLASS.captures_iter(content) {
        defs.classes.push(RawDefinition {
            kind: DefKind::Class,
            name: caps[1].to_string(),
            body: String::new(),
            full_definition: String::new(),
            source_file: source_file.to_string(),
        });
    }

    defs
}

/// Parse an interface body into properties and methods, line by line.
///
/// A line containing both `(` and `)` is only ever a method candidate; one
/// that fails the method shape is dropped. Comment lines are skipped. Each
/// line yields at most one member.
pub fn parse_members(body: &str) -> Members {
    let mut members = Members::default();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('*') {
            continue;
        }

        if line.contains('(') && line.contains(')') {
            if let Some(caps) = RE_METHOD.captures(line) {
                members.methods.push(MethodDef {
                    name: caps[1].to_string(),
                    generics: caps.get(2).map(|m| m.as_str().to_string()),
                    parameters: caps[3].trim().to_string(),
                    return_type: strip_terminator(&caps[4]),
                });
            }
        } else if let Some(caps) = RE_PROPERTY.captures(line) {
            members.properties.push(PropertyDef {
                name: caps[1].to_string(),
                optional: &caps[2] == "?",
                ty: strip_terminator(&caps[3]),
            });
        }
    }

    members
}

/// Drop one trailing `;` or `,` from a captured type fragment.
fn strip_terminator(text: &str) -> String {
    let text = text.trim();
    let text = text
        .strip_suffix(';')
        .or_else(|| text.strip_suffix(','))
        .unwrap_or(text);
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_with_nested_braces() {
        let src = "export interface Foo {\n  bar: { baz: string };\n}\n";
        let defs = scan(src, "a.ts");
        assert_eq!(defs.interfaces.len(), 1);
        assert_eq!(defs.interfaces[0].name, "Foo");
        assert_eq!(defs.interfaces[0].body, "bar: { baz: string };");
        assert!(defs.interfaces[0].full_definition.starts_with("export interface Foo"));
        assert!(defs.interfaces[0].full_definition.ends_with('}'));
    }

    #[test]
    fn interface_with_inheritance_clause() {
        let src = "export interface Child extends Base, Other {\n  x: number;\n}\n";
        let defs = scan(src, "a.ts");
        assert_eq!(defs.interfaces.len(), 1);
        assert_eq!(defs.interfaces[0].name, "Child");
    }

    #[test]
    fn unterminated_interface_skipped() {
        let src = "export interface Broken {\n  x: { y: number;\n";
        let defs = scan(src, "a.ts");
        assert!(defs.interfaces.is_empty());
    }

    #[test]
    fn multiline_type_alias() {
        let src = "export type ID =\n  | string\n  | number;\n";
        let defs = scan(src, "a.ts");
        assert_eq!(defs.types.len(), 1);
        assert_eq!(defs.types[0].name, "ID");
        assert_eq!(defs.types[0].body, "| string\n  | number");
    }

    #[test]
    fn enum_and_class() {
        let src = "export enum Color { Red, Green }\nexport class Widget extends Base {\n}\n";
        let defs = scan(src, "a.ts");
        assert_eq!(defs.enums.len(), 1);
        assert_eq!(defs.enums[0].body, "Red, Green");
        assert_eq!(defs.classes.len(), 1);
        assert_eq!(defs.classes[0].name, "Widget");
        assert!(defs.classes[0].body.is_empty());
    }

    #[test]
    fn rescan_is_identical() {
        let src = "export interface A { x: string }\nexport type B = number;\n";
        let first = scan(src, "a.ts");
        let second = scan(src, "a.ts");
        assert_eq!(first.interfaces, second.interfaces);
        assert_eq!(first.types, second.types);
    }

    #[test]
    fn members_property_and_method() {
        let members = parse_members("bar: string;\nbaz(): void\n");
        assert_eq!(members.properties.len(), 1);
        assert_eq!(members.properties[0].name, "bar");
        assert_eq!(members.properties[0].ty, "string");
        assert!(!members.properties[0].optional);
        assert_eq!(members.methods.len(), 1);
        assert_eq!(members.methods[0].name, "baz");
        assert_eq!(members.methods[0].parameters, "");
        assert_eq!(members.methods[0].return_type, "void");
    }

    #[test]
    fn members_optional_property() {
        let members = parse_members("title?: string,\n");
        assert_eq!(members.properties.len(), 1);
        assert!(members.properties[0].optional);
        assert_eq!(members.properties[0].ty, "string");
    }

    #[test]
    fn members_generic_method() {
        let members = parse_members("get<T>(key: string): Promise<T>;\n");
        assert_eq!(members.methods.len(), 1);
        assert_eq!(members.methods[0].generics.as_deref(), Some("<T>"));
        assert_eq!(members.methods[0].parameters, "key: string");
        assert_eq!(members.methods[0].return_type, "Promise<T>");
    }

    #[test]
    fn members_skip_comments_and_unmatched() {
        let members = parse_members("// a comment\n* doc line\n???\n(weird)\n");
        assert!(members.properties.is_empty());
        assert!(members.methods.is_empty());
    }
}
