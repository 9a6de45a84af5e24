//! Turn a plain-text glossary into a folder of cross-linked HTML pages.
//!
//! ```no_run
//! use glossary_rs::{DirectorySink, GlossaryStore, HtmlRenderer, loader};
//!
//! # fn main() -> glossary_rs::Result<()> {
//! let mut store = GlossaryStore::new();
//! store.set_nested_terms_mode(true);
//! loader::load_file(&mut store, "terms.txt")?;
//! let sink = DirectorySink::create("site")?;
//! HtmlRenderer::for_store(&store).render(&store, &sink)?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod linker;
pub mod loader;
pub mod order;
pub mod render;
pub mod store;
pub mod tokenizer;

pub use error::{GlossaryError, Result};
pub use loader::{FileSource, LineSource, TextSource};
pub use render::{
    DirectorySink, HtmlRenderer, INDEX_PAGE, MemorySink, PageSink, RenderConfig, RenderSummary,
};
pub use store::GlossaryStore;
