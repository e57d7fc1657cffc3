//! DOM structure reference renderer.

use crate::model::DomCorpus;
use crate::render::bullet_list;

/// Render the DOM structure reference document. Each section is sorted
/// alphabetically.
pub fn structure_reference(corpus: &DomCorpus) -> String {
    let mut out = String::from(
        "# DOM Structure Reference\n\n*Auto-generated from ClojureScript sources*\n\n",
    );

    out.push_str("## Data Attributes\n\n");
    out.push_str("Common data attributes:\n\n");
    let items: Vec<String> = corpus
        .data_attributes
        .sorted()
        .iter()
        .map(|a| format!("`{}`", a))
        .collect();
    bullet_list(&mut out, &items);

    out.push_str("## Element IDs\n\n");
    out.push_str("Common element IDs:\n\n");
    let items: Vec<String> = corpus
        .element_ids
        .sorted()
        .iter()
        .map(|id| format!("`#{}`", id))
        .collect();
    bullet_list(&mut out, &items);

    out.push_str("## UI Components\n\n");
    out.push_str("Component functions:\n\n");
    let items: Vec<String> = corpus
        .component_names
        .sorted()
        .iter()
        .map(|c| format!("`{}`", c))
        .collect();
    bullet_list(&mut out, &items);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NO_RESULTS;

    #[test]
    fn sections_sorted() {
        let mut corpus = DomCorpus::default();
        corpus.data_attributes.insert("data-ref");
        corpus.data_attributes.insert("data-block-id");
        corpus.element_ids.insert("main");
        corpus.component_names.insert("sidebar");
        let doc = structure_reference(&corpus);
        let first = doc.find("`data-block-id`").unwrap();
        let second = doc.find("`data-ref`").unwrap();
        assert!(first < second);
        assert!(doc.contains("`#main`"));
        assert!(doc.contains("`sidebar`"));
    }

    #[test]
    fn empty_corpus_keeps_sections() {
        let doc = structure_reference(&DomCorpus::default());
        assert!(doc.contains("## Data Attributes"));
        assert!(doc.contains("## Element IDs"));
        assert!(doc.contains("## UI Components"));
        assert_eq!(doc.matches(NO_RESULTS).count(), 3);
    }
}
