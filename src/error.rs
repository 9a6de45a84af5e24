use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = GlossaryError> = std::result::Result<T, E>;

/// Errors surfaced by the glossary store, loader, and renderer.
#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("term {term:?} is not in the glossary")]
    TermNotFound { term: String },

    #[error("glossary terms must not be empty")]
    EmptyTerm,

    #[error("failed to read glossary source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to prepare output folder {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page {page:?}: {source}")]
    SinkWrite {
        page: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to render page template: {0}")]
    Template(#[from] askama::Error),
}

impl GlossaryError {
    pub(crate) fn not_found(term: &str) -> Self {
        GlossaryError::TermNotFound {
            term: term.to_string(),
        }
    }
}
