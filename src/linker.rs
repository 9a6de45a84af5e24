use std::collections::HashSet;

use crate::tokenizer::tokens;

/// Rewrites `definition` so every token naming a known term links to that
/// term's page. Everything else is copied through untouched, unescaped.
pub fn link_terms(definition: &str, known_terms: &HashSet<&str>) -> String {
    let mut html = String::with_capacity(definition.len());
    for token in tokens(definition) {
        if known_terms.contains(token.text) {
            html.push_str(&term_link(token.text));
        } else {
            html.push_str(token.text);
        }
    }
    html
}

/// Relative link to a term page, as used by the index and nested definitions.
pub fn term_href(term: &str) -> String {
    format!("{term}.html")
}

/// Anchor pointing at a term's page, labelled with the term.
pub fn term_link(term: &str) -> String {
    format!("<a href=\"{}\">{term}</a>", term_href(term))
}
