//! refdoc — generate categorized reference documentation from a source tree.
//!
//! Scans TypeScript definition files, stylesheets, and ClojureScript sources,
//! classifies the extracted function records into fixed categories, and
//! writes a set of cross-linked Markdown documents plus two JSON dumps.

mod aggregate;
mod classify;
mod model;
mod render;
mod scan;

use anyhow::{Context, Result};
use clap::Parser;
use model::{ApiCorpus, DomCorpus, FunctionRecord, StyleCorpus};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "refdoc",
    about = "Generate API, CSS, and DOM reference documentation from source trees"
)]
struct Cli {
    /// Directory scanned for TypeScript definition files (.ts)
    #[arg(long)]
    api: Option<PathBuf>,

    /// Directory scanned for stylesheets (.css) and ClojureScript UI sources (.cljs, .cljc)
    #[arg(long)]
    frontend: Option<PathBuf>,

    /// Directory scanned for ClojureScript API sources (.cljs)
    #[arg(long)]
    core: Option<PathBuf>,

    /// Output directory for the generated documents
    #[arg(short = 'o', long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.output).with_context(|| {
        format!(
            "failed to create output directory: {}",
            cli.output.display()
        )
    })?;

    // An omitted input root contributes an empty corpus; the documents are
    // still written with their sections in place.
    let api = match &cli.api {
        Some(root) => aggregate::collect_api(root)?,
        None => ApiCorpus::default(),
    };
    let (styles, dom) = match &cli.frontend {
        Some(root) => aggregate::collect_frontend(root)?,
        None => (StyleCorpus::default(), DomCorpus::default()),
    };
    let functions = match &cli.core {
        Some(root) => aggregate::collect_functions(root)?,
        None => Vec::new(),
    };

    print_summary(&api, &styles, &dom, &functions);

    let buckets = classify::bucketize(&functions);

    write_doc(&cli.output, "README.md", &render::index::index())?;
    write_doc(
        &cli.output,
        "plugin-api-reference.md",
        &render::api::reference(&api),
    )?;
    write_doc(
        &cli.output,
        "plugin-api-definitions.json",
        &render::api::definitions_json(&api)?,
    )?;
    write_doc(
        &cli.output,
        "css-variables-reference.md",
        &render::styles::variables_reference(&styles),
    )?;
    write_doc(
        &cli.output,
        "css-classes-reference.md",
        &render::styles::classes_reference(&styles),
    )?;
    write_doc(
        &cli.output,
        "dom-structure-reference.md",
        &render::dom::structure_reference(&dom),
    )?;
    write_doc(
        &cli.output,
        "theme-development-guide.md",
        &render::guide::theme_guide(&styles),
    )?;
    write_doc(
        &cli.output,
        "api-functionality-analysis.md",
        &render::analysis::functionality(&buckets, &functions),
    )?;
    write_doc(
        &cli.output,
        "api-showcase.md",
        &render::analysis::showcase(&buckets),
    )?;
    write_doc(
        &cli.output,
        "api-analysis-data.json",
        &render::analysis::data_json(&buckets, &functions)?,
    )?;

    println!("Documentation written to {}", cli.output.display());
    Ok(())
}

fn print_summary(
    api: &ApiCorpus,
    styles: &StyleCorpus,
    dom: &DomCorpus,
    functions: &[FunctionRecord],
) {
    println!(
        "Found {} interfaces, {} type aliases, {} enums, {} classes",
        api.interfaces.len(),
        api.types.len(),
        api.enums.len(),
        api.classes.len()
    );
    println!(
        "Found {} CSS classes, {} custom properties, {} component classes",
        styles.class_names.len(),
        styles.custom_properties.len(),
        styles.component_class_names.len()
    );
    println!(
        "Found {} data attributes, {} element IDs, {} component names",
        dom.data_attributes.len(),
        dom.element_ids.len(),
        dom.component_names.len()
    );
    let exported = functions.iter().filter(|f| f.exported).count();
    println!(
        "Found {} functions ({} exported)",
        functions.len(),
        exported
    );
}

fn write_doc(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
}
