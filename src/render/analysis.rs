//! Functionality analysis, showcase, and the analysis data dump.

use crate::classify::CategoryBuckets;
use crate::model::FunctionRecord;
use crate::render::NO_RESULTS;
use anyhow::Result;
use std::collections::HashSet;
use std::fmt::Write;

/// How many functions a category preview lists before truncating.
const KEY_FUNCTIONS: usize = 10;

/// How many functions a showcase section lists.
const SHOWCASE_FUNCTIONS: usize = 5;

/// Categories that get a showcase section, with their capability blurbs.
const SHOWCASE_SECTIONS: [(&str, &str, &[&str]); 5] = [
    (
        "Block Management",
        "The Block Management API provides control over the block-based content system.",
        &[
            "Create, update, and delete blocks",
            "Navigate block hierarchies",
            "Manage block properties and metadata",
            "Handle block references and links",
        ],
    ),
    (
        "Page Operations",
        "The Page Operations API handles page creation, navigation, and management.",
        &[
            "Create and manage pages",
            "Handle journal pages",
            "Page metadata and properties",
            "Page navigation and linking",
        ],
    ),
    (
        "Database Queries",
        "The Database API provides query capabilities over the application database.",
        &[
            "Execute DataScript queries",
            "Filter and search content",
            "Database transactions",
            "Data relationships and references",
        ],
    ),
    (
        "UI Components",
        "The UI API allows plugins to create custom interface elements.",
        &[
            "Create custom UI components",
            "Display messages and notifications",
            "Handle user interactions",
            "Integrate with the host interface",
        ],
    ),
    (
        "Plugin System",
        "The Plugin System API manages plugin lifecycle and interactions.",
        &[
            "Plugin registration and management",
            "Hook system for extensibility",
            "Plugin communication",
            "Plugin configuration and settings",
        ],
    ),
];

/// Count of distinct namespace strings across all records.
fn namespace_count(records: &[FunctionRecord]) -> usize {
    records
        .iter()
        .map(|r| r.namespace.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Records whose source path mentions the API modules.
fn api_subset(records: &[FunctionRecord]) -> Vec<&FunctionRecord> {
    records
        .iter()
        .filter(|r| r.source_file.contains("api"))
        .collect()
}

/// Render the functionality analysis document.
pub fn functionality(buckets: &CategoryBuckets, records: &[FunctionRecord]) -> String {
    let mut out = String::from(
        "# API Functionality Analysis\n\n\
         *Analysis of the core API implementation*\n\n\
         ## Overview\n\n\
         This document summarizes the API functionality extracted directly from the\n\
         ClojureScript implementation: the functions that power the application core,\n\
         grouped by what they do.\n\n",
    );

    out.push_str("## API Statistics\n\n");
    let _ = writeln!(
        out,
        "- **Total Exported Functions**: {}",
        api_subset(records).len()
    );
    let _ = writeln!(out, "- **API Modules**: {}", namespace_count(records));
    let _ = writeln!(out, "- **Function Categories**: {}", buckets.non_empty());
    out.push('\n');

    out.push_str("## Core API Categories\n\n");
    for (label, functions) in buckets.iter() {
        let _ = write!(out, "### {}\n\n", label);
        let _ = write!(out, "*{} functions available*\n\n", functions.len());

        if functions.is_empty() {
            out.push_str(NO_RESULTS);
            out.push_str("\n\n---\n\n");
            continue;
        }

        out.push_str("#### Key Functions\n\n");
        for func in functions.iter().take(KEY_FUNCTIONS) {
            let _ = writeln!(out, "**`{}`**", func.name);
            if !func.parameters.is_empty() {
                let _ = writeln!(out, "- Parameters: `{}`", func.parameters.join(", "));
            }
            if !func.docstring.is_empty() {
                let _ = writeln!(out, "- Description: {}", func.docstring);
            }
            let _ = writeln!(out, "- Namespace: `{}`", func.namespace);
            let _ = writeln!(out, "- Source: `{}`", func.source_file);
            out.push('\n');
        }

        if functions.len() > KEY_FUNCTIONS {
            let _ = write!(
                out,
                "*...and {} more functions*\n\n",
                functions.len() - KEY_FUNCTIONS
            );
        }

        out.push_str("---\n\n");
    }

    out
}

/// Render the API showcase document.
pub fn showcase(buckets: &CategoryBuckets) -> String {
    let mut out = String::from(
        "# API Showcase\n\n\
         *Practical examples and use cases for the core API*\n\n\
         ## What is the API?\n\n\
         The API allows plugins to interact with:\n\n\
         - Block and page content\n\
         - Database queries and operations\n\
         - File system and assets\n\
         - UI components and interactions\n\
         - Application state and configuration\n\n\
         ## Core API Capabilities\n\n",
    );

    for (label, blurb, capabilities) in SHOWCASE_SECTIONS {
        let functions = buckets.get(label);
        let _ = write!(out, "### {} Showcase\n\n", label);

        if functions.is_empty() {
            out.push_str(NO_RESULTS);
            out.push_str("\n\n---\n\n");
            continue;
        }

        let _ = write!(out, "{}\n\n", blurb);
        out.push_str("#### Key Capabilities:\n\n");
        for capability in capabilities {
            let _ = writeln!(out, "- {}", capability);
        }
        out.push('\n');

        out.push_str("#### Example Functions:\n\n");
        for func in functions.iter().take(SHOWCASE_FUNCTIONS) {
            let description = if func.docstring.is_empty() {
                format!("{} operations", label)
            } else {
                func.docstring.clone()
            };
            let _ = writeln!(out, "- **`{}`** - {}", func.name, description);
        }
        out.push_str("\n---\n\n");
    }

    out.push_str(USAGE_EXAMPLES);
    out
}

/// Serialize the analysis data dump: the API-module function subset, the full
/// category mapping (all buckets, including empty ones), and summary
/// statistics.
pub fn data_json(buckets: &CategoryBuckets, records: &[FunctionRecord]) -> Result<String> {
    let mut categories = serde_json::Map::new();
    for (label, functions) in buckets.iter() {
        categories.insert(label.to_string(), serde_json::to_value(functions)?);
    }

    let exported_total = records.iter().filter(|r| r.exported).count();
    let dump = serde_json::json!({
        "exportedFunctions": api_subset(records),
        "categorizedFunctions": categories,
        "statistics": {
            "totalExported": exported_total,
            "totalAnalyzed": records.len(),
            "namespaces": namespace_count(records),
            "categories": buckets.non_empty(),
        },
    });

    let mut json = serde_json::to_string_pretty(&dump)?;
    json.push('\n');
    Ok(json)
}

const USAGE_EXAMPLES: &str = r##"## Practical Usage Examples

### Creating a Block

```javascript
async function createCustomBlock() {
    const currentPage = await host.Editor.getCurrentPage();
    const newBlock = await host.Editor.insertBlock(
        currentPage.uuid,
        "This block was created by a plugin!"
    );
    await host.Editor.upsertBlockProperty(newBlock.uuid, "created-by", "my-plugin");
}
```

### Database Query

```javascript
async function findBlocksWithTag(tag) {
    const query = `
        [:find ?b ?content
         :where
         [?b :block/content ?content]
         [(clojure.string/includes? ?content "#${tag}")]
        ]
    `;
    return host.DB.datascriptQuery(query);
}
```

### UI Integration

```javascript
host.App.registerUIItem('toolbar', {
    key: 'my-custom-button',
    template: '<a class="button" data-on-click="handleCustomAction">Custom Action</a>'
});

host.provideModel({
    handleCustomAction() {
        host.UI.showMsg('Custom action executed!', 'success');
    }
});
```

## API Architecture

1. **Database-backed** - all data operations go through the application database
2. **Reactive state** - changes propagate through the application automatically
3. **Plugin isolation** - plugins run in sandboxed environments
4. **Typed surface** - full type definitions available for development
5. **Event-driven** - the hook system lets plugins respond to application events

## Development Resources

- [Plugin API Reference](./plugin-api-reference.md)
- [CSS Classes Reference](./css-classes-reference.md)
- [Theme Development Guide](./theme-development-guide.md)
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::bucketize;

    fn record(name: &str, file: &str, exported: bool, docstring: &str) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            parameters: vec!["a".to_string(), "b".to_string()],
            docstring: docstring.to_string(),
            namespace: "my.ns".to_string(),
            source_file: file.to_string(),
            exported,
        }
    }

    #[test]
    fn statistics_and_key_functions() {
        let records = vec![
            record("save-block", "api/blocks.cljs", true, "Persist a block"),
            record("open-page", "pages.cljs", false, ""),
        ];
        let buckets = bucketize(&records);
        let doc = functionality(&buckets, &records);
        assert!(doc.contains("- **Total Exported Functions**: 1"));
        assert!(doc.contains("- **API Modules**: 1"));
        assert!(doc.contains("**`save-block`**"));
        assert!(doc.contains("- Parameters: `a, b`"));
        assert!(doc.contains("- Description: Persist a block"));
    }

    #[test]
    fn empty_category_still_has_header() {
        let buckets = bucketize(&[]);
        let doc = functionality(&buckets, &[]);
        assert!(doc.contains("### Search Functions"));
        assert!(doc.contains("*0 functions available*"));
        assert!(doc.matches(NO_RESULTS).count() >= 11);
    }

    #[test]
    fn preview_truncates_to_ten() {
        let records: Vec<FunctionRecord> = (0..13)
            .map(|i| record(&format!("block-fn-{i}"), "a.cljs", true, ""))
            .collect();
        let buckets = bucketize(&records);
        let doc = functionality(&buckets, &records);
        assert!(doc.contains("**`block-fn-9`**"));
        assert!(!doc.contains("**`block-fn-10`**"));
        assert!(doc.contains("*...and 3 more functions*"));
    }

    #[test]
    fn showcase_lists_top_five() {
        let records: Vec<FunctionRecord> = (0..7)
            .map(|i| record(&format!("block-fn-{i}"), "a.cljs", true, ""))
            .collect();
        let buckets = bucketize(&records);
        let doc = showcase(&buckets);
        assert!(doc.contains("### Block Management Showcase"));
        assert!(doc.contains("- **`block-fn-4`**"));
        assert!(!doc.contains("- **`block-fn-5`**"));
        // Empty showcase categories degrade, not disappear.
        assert!(doc.contains("### Page Operations Showcase"));
        assert!(doc.contains(NO_RESULTS));
    }

    #[test]
    fn data_dump_has_all_buckets_and_statistics() {
        let records = vec![
            record("save-block", "api/blocks.cljs", true, ""),
            record("helper-fn", "misc.cljs", false, ""),
        ];
        let buckets = bucketize(&records);
        let json = data_json(&buckets, &records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["categorizedFunctions"].as_object().unwrap().len(), 11);
        assert_eq!(value["statistics"]["totalExported"], 1);
        assert_eq!(value["statistics"]["totalAnalyzed"], 2);
        assert_eq!(value["statistics"]["namespaces"], 1);
        assert_eq!(value["exportedFunctions"].as_array().unwrap().len(), 1);
        assert_eq!(value["exportedFunctions"][0]["name"], "save-block");
        assert_eq!(value["exportedFunctions"][0]["exported"], true);
    }
}
