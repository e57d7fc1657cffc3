//! Function categorization — fixed ordered rule list, first match wins.

use crate::model::FunctionRecord;

/// Catch-all label for records no rule claims.
pub const OTHER: &str = "Other";

/// Every category label, in bucket order.
pub const CATEGORIES: [&str; 11] = [
    "Block Management",
    "Page Operations",
    "Database Queries",
    "File System",
    "Plugin System",
    "UI Components",
    "State Management",
    "Search Functions",
    "Configuration",
    "Utilities",
    OTHER,
];

struct Rule {
    label: &'static str,
    applies: fn(name: &str, namespace: &str, file: &str) -> bool,
}

// Rule order is significant: a name containing both "config" and "block"
// classifies as Block Management. The Configuration rule never matches on
// "config" or "setting" (State Management claims those first); it is kept in
// place so the bucket set and its ordering stay compatible.
static RULES: [Rule; 10] = [
    Rule {
        label: "Block Management",
        applies: |name, _, file| name.contains("block") || file.contains("block"),
    },
    Rule {
        label: "Page Operations",
        applies: |name, _, _| name.contains("page") || name.contains("journal"),
    },
    Rule {
        label: "Database Queries",
        applies: |name, _, _| {
            name.contains("query") || name.contains("db") || name.contains("datascript")
        },
    },
    Rule {
        label: "File System",
        applies: |name, _, _| {
            name.contains("file")
                || name.contains("asset")
                || name.contains("write")
                || name.contains("read")
        },
    },
    Rule {
        label: "Plugin System",
        applies: |name, ns, _| {
            name.contains("plugin") || name.contains("hook") || ns.contains("plugin")
        },
    },
    Rule {
        label: "UI Components",
        applies: |name, _, file| {
            name.contains("ui")
                || name.contains("show")
                || name.contains("render")
                || file.contains("ui")
        },
    },
    Rule {
        label: "State Management",
        applies: |name, _, _| {
            name.contains("state") || name.contains("config") || name.contains("setting")
        },
    },
    Rule {
        label: "Search Functions",
        applies: |name, _, _| name.contains("search") || name.contains("find"),
    },
    Rule {
        label: "Configuration",
        applies: |name, _, _| {
            name.contains("config") || name.contains("setting") || name.contains("preference")
        },
    },
    Rule {
        label: "Utilities",
        applies: |name, _, file| {
            name.contains("util") || name.contains("helper") || file.contains("utils")
        },
    },
];

/// Assign a record to its category label.
pub fn classify(record: &FunctionRecord) -> &'static str {
    let name = record.name.to_lowercase();
    let namespace = record.namespace.to_lowercase();
    let file = record.source_file.to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.applies)(&name, &namespace, &file))
        .map(|rule| rule.label)
        .unwrap_or(OTHER)
}

/// All categories in fixed order, each holding its records in input order.
#[derive(Debug)]
pub struct CategoryBuckets {
    buckets: Vec<(&'static str, Vec<FunctionRecord>)>,
}

impl CategoryBuckets {
    fn new() -> Self {
        CategoryBuckets {
            buckets: CATEGORIES.iter().map(|label| (*label, Vec::new())).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[FunctionRecord])> {
        self.buckets
            .iter()
            .map(|(label, records)| (*label, records.as_slice()))
    }

    pub fn get(&self, label: &str) -> &[FunctionRecord] {
        self.buckets
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    /// Number of categories with at least one record.
    pub fn non_empty(&self) -> usize {
        self.buckets.iter().filter(|(_, r)| !r.is_empty()).count()
    }
}

/// Distribute records over the fixed category set.
pub fn bucketize(records: &[FunctionRecord]) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::new();
    for record in records {
        let label = classify(record);
        // Label always present: the bucket list is built from CATEGORIES.
        if let Some((_, bucket)) = buckets.buckets.iter_mut().find(|(l, _)| *l == label) {
            bucket.push(record.clone());
        }
    }
    buckets
}
