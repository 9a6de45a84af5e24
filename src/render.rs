use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use askama::Template;
use parking_lot::Mutex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GlossaryError, Result};
use crate::linker::{link_terms, term_href};
use crate::order::ordered_terms;
use crate::store::{DEFAULT_TERM_COLOR, DEFAULT_TITLE, GlossaryStore};

/// Page id of the index page.
pub const INDEX_PAGE: &str = "index";

/// Display settings for one rendering pass.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub term_color: String,
    /// Empty means no background.
    pub background_image: String,
    pub nested_terms_mode: bool,
    pub sort_alphabetically: bool,
    /// Render term pages on the rayon pool.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            term_color: DEFAULT_TERM_COLOR.to_string(),
            background_image: String::new(),
            nested_terms_mode: false,
            sort_alphabetically: false,
            parallel: false,
        }
    }
}

/// Destination for rendered pages, keyed by page id (`index` or a term).
pub trait PageSink: Sync {
    fn write_page(&self, page: &str, body: &str) -> io::Result<()>;
}

/// Writes `<page>.html` files into a folder.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates `root` (and its parents) if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| GlossaryError::OutputDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn page_path(&self, page: &str) -> PathBuf {
        self.root.join(format!("{page}.html"))
    }
}

impl PageSink for DirectorySink {
    fn write_page(&self, page: &str, body: &str) -> io::Result<()> {
        fs::write(self.page_path(page), body)
    }
}

/// Keeps rendered pages in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pages: Mutex<BTreeMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self, page: &str) -> Option<String> {
        self.pages.lock().get(page).cloned()
    }

    pub fn page_ids(&self) -> Vec<String> {
        self.pages.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.pages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.lock().is_empty()
    }

    pub fn into_pages(self) -> BTreeMap<String, String> {
        self.pages.into_inner()
    }
}

impl PageSink for MemorySink {
    fn write_page(&self, page: &str, body: &str) -> io::Result<()> {
        self.pages.lock().insert(page.to_string(), body.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct RenderSummary {
    pub terms: usize,
    pub pages: usize,
}

struct IndexLink<'a> {
    name: &'a str,
    href: String,
}

#[derive(Template)]
#[template(
    source = r#"<html>
<head>
<title>{{ title }}</title>
</head>
<body{% if !background_image.is_empty() %} background="{{ background_image }}"{% endif %}>
<h2>{{ title }}</h2>
<hr />
<h3>Index</h3>
<ul>
{% for link in links -%}
<li><a href="{{ link.href }}">{{ link.name }}</a></li>
{% endfor -%}
</ul>
</body>
</html>
"#,
    ext = "html",
    escape = "none"
)]
struct IndexPage<'a> {
    title: &'a str,
    background_image: &'a str,
    links: Vec<IndexLink<'a>>,
}

#[derive(Template)]
#[template(
    source = r#"<html>
<head>
<title>{{ term }}</title>
</head>
<body{% if !background_image.is_empty() %} background="{{ background_image }}"{% endif %}>
<h2><b><i><font color="{{ term_color }}">{{ term }}</font></i></b></h2>
<blockquote>{{ definition }}</blockquote>
<hr />
<p>Return to <a href="index.html">index</a>.</p>
</body>
</html>
"#,
    ext = "html",
    escape = "none"
)]
struct TermPage<'a> {
    term: &'a str,
    term_color: &'a str,
    background_image: &'a str,
    definition: &'a str,
}

/// Turns a [`GlossaryStore`] into an index page and one page per term.
///
/// Rendering never modifies the store; callers that want the entries gone
/// afterwards call [`GlossaryStore::clear_entries`] themselves.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renderer using the settings stored on `store`.
    pub fn for_store(store: &GlossaryStore) -> Self {
        Self::new(store.render_config())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Terms in the order the index lists them.
    pub fn term_order<'a>(&self, store: &'a GlossaryStore) -> Vec<&'a str> {
        ordered_terms(store.terms(), self.config.sort_alphabetically)
    }

    pub fn render_index(&self, store: &GlossaryStore) -> Result<String> {
        let links = self
            .term_order(store)
            .into_iter()
            .map(|name| IndexLink {
                name,
                href: term_href(name),
            })
            .collect();
        let page = IndexPage {
            title: &self.config.title,
            background_image: &self.config.background_image,
            links,
        };
        Ok(page.render()?)
    }

    pub fn render_term(&self, store: &GlossaryStore, term: &str) -> Result<String> {
        let definition = store.get_definition(term)?;
        let known: HashSet<&str> = store.terms().collect();
        self.render_term_page(term, definition, &known)
    }

    fn render_term_page(
        &self,
        term: &str,
        definition: &str,
        known: &HashSet<&str>,
    ) -> Result<String> {
        let linked;
        let definition = if self.config.nested_terms_mode {
            linked = link_terms(definition, known);
            linked.as_str()
        } else {
            definition
        };
        let page = TermPage {
            term,
            term_color: &self.config.term_color,
            background_image: &self.config.background_image,
            definition,
        };
        Ok(page.render()?)
    }

    /// Writes the index page, then every term page, to `sink`.
    ///
    /// The first failed write stops the run; pages already written stay.
    pub fn render<S>(&self, store: &GlossaryStore, sink: &S) -> Result<RenderSummary>
    where
        S: PageSink + ?Sized,
    {
        let order = self.term_order(store);
        info!(
            terms = order.len(),
            nested = self.config.nested_terms_mode,
            sorted = self.config.sort_alphabetically,
            parallel = self.config.parallel,
            "rendering glossary"
        );

        let index = self.render_index(store)?;
        write_to(sink, INDEX_PAGE, &index)?;

        let known: HashSet<&str> = store.terms().collect();
        let write_term = |term: &&str| -> Result<()> {
            let definition = store.get_definition(term)?;
            let body = self.render_term_page(term, definition, &known)?;
            write_to(sink, term, &body)
        };
        if self.config.parallel {
            order.par_iter().try_for_each(write_term)?;
        } else {
            order.iter().try_for_each(write_term)?;
        }

        let summary = RenderSummary {
            terms: order.len(),
            pages: order.len() + 1,
        };
        info!(pages = summary.pages, "glossary rendered");
        Ok(summary)
    }
}

fn write_to<S: PageSink + ?Sized>(sink: &S, page: &str, body: &str) -> Result<()> {
    debug!(page, bytes = body.len(), "writing page");
    sink.write_page(page, body)
        .map_err(|source| GlossaryError::SinkWrite {
            page: page.to_string(),
            source,
        })
}
