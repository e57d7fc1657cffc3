//! Directory aggregation — walk source trees, dispatch scanners by
//! extension, and merge per-file results into corpus-wide collections.
//!
//! Corpora are created here and returned by value; traversal order (sorted
//! directory listings, recursive) is the canonical scan order, so output is
//! reproducible for an unchanged tree. A file that cannot be read aborts the
//! whole run.

use crate::model::{ApiCorpus, DefKind, DomCorpus, FunctionRecord, RawDefinition, StyleCorpus};
use crate::scan::{clojure, stylesheet, typescript};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect all files under `root` with one of the given extensions, in
/// sorted traversal order.
fn walk_files(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) {
            if extensions.contains(&ext) {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

/// Path relative to the scanned root, as recorded in `source_file` fields.
fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Scan a tree of TypeScript sources for exported declarations.
///
/// Definitions are deduplicated by `(kind, name)`; the first occurrence in
/// traversal order wins.
pub fn collect_api(root: &Path) -> Result<ApiCorpus> {
    let mut corpus = ApiCorpus::default();
    let mut seen: HashSet<(DefKind, String)> = HashSet::new();

    for path in walk_files(root, &["ts"])? {
        let content = read(&path)?;
        let defs = typescript::scan(&content, &relative_name(root, &path));
        merge_definitions(&mut corpus.interfaces, defs.interfaces, &mut seen);
        merge_definitions(&mut corpus.types, defs.types, &mut seen);
        merge_definitions(&mut corpus.enums, defs.enums, &mut seen);
        merge_definitions(&mut corpus.classes, defs.classes, &mut seen);
    }

    Ok(corpus)
}

fn merge_definitions(
    into: &mut Vec<RawDefinition>,
    defs: Vec<RawDefinition>,
    seen: &mut HashSet<(DefKind, String)>,
) {
    for def in defs {
        if seen.insert((def.kind, def.name.clone())) {
            into.push(def);
        }
    }
}

/// Scan a tree of stylesheets and ClojureScript UI sources.
///
/// `.css` files feed the style corpus, `.cljs`/`.cljc` files feed the DOM
/// corpus.
pub fn collect_frontend(root: &Path) -> Result<(StyleCorpus, DomCorpus)> {
    let mut styles = StyleCorpus::default();
    let mut dom = DomCorpus::default();

    for path in walk_files(root, &["css", "cljs", "cljc"])? {
        let content = read(&path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("css") => {
                let sheet = stylesheet::scan(&content, &relative_name(root, &path));
                styles.class_names.extend(sheet.class_names);
                styles.custom_properties.extend(sheet.custom_properties);
                styles
                    .component_class_names
                    .extend(sheet.component_class_names);
            }
            _ => clojure::scan_dom(&content).merge_into(&mut dom),
        }
    }

    Ok((styles, dom))
}

/// Scan a tree of ClojureScript sources for function declarations.
pub fn collect_functions(root: &Path) -> Result<Vec<FunctionRecord>> {
    let mut records = Vec::new();
    for path in walk_files(root, &["cljs"])? {
        let content = read(&path)?;
        records.extend(clojure::scan_functions(
            &content,
            &relative_name(root, &path),
        ));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn api_definitions_dedup_across_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.ts", "export interface Foo { x: string }\n");
        write(dir.path(), "b.ts", "export interface Foo { y: number }\n");
        let corpus = collect_api(dir.path()).unwrap();
        assert_eq!(corpus.interfaces.len(), 1);
        assert_eq!(corpus.interfaces[0].source_file, "a.ts");
    }

    #[test]
    fn same_name_different_kind_both_kept() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "a.ts",
            "export interface Foo { x: string }\nexport type Foo = string;\n",
        );
        let corpus = collect_api(dir.path()).unwrap();
        assert_eq!(corpus.interfaces.len(), 1);
        assert_eq!(corpus.types.len(), 1);
    }

    #[test]
    fn frontend_split_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "theme.css", ".ls-block { color: red; }\n");
        write(dir.path(), "view.cljs", "(defn sidebar [] [:div {:id \"x\" :data-ref r}])\n");
        let (styles, dom) = collect_frontend(dir.path()).unwrap();
        assert!(styles.class_names.contains("ls-block"));
        assert!(styles.component_class_names.contains("ls-block"));
        assert!(dom.component_names.contains("sidebar"));
        assert!(dom.data_attributes.contains("data-ref"));
    }

    #[test]
    fn custom_properties_never_dedup_across_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.css", ":root { --ls-color: #fff; }\n");
        write(dir.path(), "b.css", ":root { --ls-color: #fff; }\n");
        let (styles, _) = collect_frontend(dir.path()).unwrap();
        assert_eq!(styles.custom_properties.len(), 2);
        assert_eq!(styles.custom_properties[0].source_file, "a.css");
        assert_eq!(styles.custom_properties[1].source_file, "b.css");
    }

    #[test]
    fn function_records_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.cljs", "(ns b)\n(defn ^:export second-fn [x])\n");
        write(dir.path(), "a.cljs", "(ns a)\n(defn ^:export first-fn [x])\n");
        let records = collect_functions(dir.path()).unwrap();
        // Sorted traversal: a.cljs before b.cljs.
        assert_eq!(records[0].name, "first-fn");
        assert_eq!(records[1].name, "second-fn");
    }

    #[test]
    fn nested_directories_use_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "api/blocks.cljs", "(ns api.blocks)\n(defn ^:export save-block [b])\n");
        let records = collect_functions(dir.path()).unwrap();
        assert_eq!(records[0].source_file, "api/blocks.cljs");
    }
}
