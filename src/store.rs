use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{GlossaryError, Result};
use crate::render::RenderConfig;

pub const DEFAULT_TITLE: &str = "Glossary";
pub const DEFAULT_TERM_COLOR: &str = "green";

/// Term → definition mapping plus the display settings for a glossary.
///
/// Terms keep the order they were first added in. Colour and background
/// values are stored as given; nothing here validates them.
#[derive(Debug, Clone)]
pub struct GlossaryStore {
    definitions: HashMap<String, String>,
    order: Vec<String>,
    size: usize,
    title: String,
    term_color: String,
    background_image: String,
    nested_terms_mode: bool,
    sort_alphabetically: bool,
}

impl Default for GlossaryStore {
    fn default() -> Self {
        Self {
            definitions: HashMap::new(),
            order: Vec::new(),
            size: 0,
            title: DEFAULT_TITLE.to_string(),
            term_color: DEFAULT_TERM_COLOR.to_string(),
            background_image: String::new(),
            nested_terms_mode: false,
            sort_alphabetically: false,
        }
    }
}

impl GlossaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh, empty store of the same kind as `self`.
    pub fn new_instance(&self) -> Self {
        Self::new()
    }

    /// Resets entries and settings to the defaults.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drops every entry but keeps the display settings.
    pub fn clear_entries(&mut self) {
        self.definitions.clear();
        self.order.clear();
        self.size = 0;
    }

    /// Moves entries and settings out of `source`, leaving it empty.
    pub fn transfer_from(&mut self, source: &mut GlossaryStore) {
        *self = std::mem::take(source);
    }

    /// Inserts `term`, or replaces its definition if it is already present.
    ///
    /// A replaced term keeps its original position. Returns the previous
    /// definition, if any.
    pub fn add_entry(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Option<String>> {
        let term = term.into();
        if term.is_empty() {
            return Err(GlossaryError::EmptyTerm);
        }
        let previous = match self.definitions.get_mut(&term) {
            Some(existing) => Some(std::mem::replace(existing, definition.into())),
            None => {
                self.order.push(term.clone());
                self.definitions.insert(term, definition.into());
                None
            }
        };
        self.size = self.definitions.len();
        Ok(previous)
    }

    pub fn remove_entry(&mut self, term: &str) -> Result<String> {
        let definition = self
            .definitions
            .remove(term)
            .ok_or_else(|| GlossaryError::not_found(term))?;
        self.order.retain(|existing| existing != term);
        self.size -= 1;
        Ok(definition)
    }

    pub fn get_definition(&self, term: &str) -> Result<&str> {
        self.definitions
            .get(term)
            .map(String::as_str)
            .ok_or_else(|| GlossaryError::not_found(term))
    }

    pub fn has_term(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// `(term, definition)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .map(|term| (term.as_str(), self.definitions[term].as_str()))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn term_color(&self) -> &str {
        &self.term_color
    }

    pub fn set_term_color(&mut self, term_color: impl Into<String>) {
        self.term_color = term_color.into();
    }

    pub fn background_image(&self) -> &str {
        &self.background_image
    }

    pub fn set_background_image(&mut self, image_url: impl Into<String>) {
        self.background_image = image_url.into();
    }

    /// Returns the current background image and unsets it.
    pub fn remove_background_image(&mut self) -> String {
        std::mem::take(&mut self.background_image)
    }

    pub fn nested_terms_mode(&self) -> bool {
        self.nested_terms_mode
    }

    pub fn set_nested_terms_mode(&mut self, nested_terms: bool) {
        self.nested_terms_mode = nested_terms;
    }

    pub fn sort_alphabetically(&self) -> bool {
        self.sort_alphabetically
    }

    pub fn set_sort_alphabetically(&mut self, sort: bool) {
        self.sort_alphabetically = sort;
    }

    /// Snapshot of the display settings for the renderer.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            title: self.title.clone(),
            term_color: self.term_color.clone(),
            background_image: self.background_image.clone(),
            nested_terms_mode: self.nested_terms_mode,
            sort_alphabetically: self.sort_alphabetically,
            ..RenderConfig::default()
        }
    }

    /// Copies display settings from `config` into the store.
    pub fn apply_config(&mut self, config: &RenderConfig) {
        self.title = config.title.clone();
        self.term_color = config.term_color.clone();
        self.background_image = config.background_image.clone();
        self.nested_terms_mode = config.nested_terms_mode;
        self.sort_alphabetically = config.sort_alphabetically;
    }
}

// Equality and hashing look at the entries only, not their order or the
// display settings.
impl PartialEq for GlossaryStore {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .definitions
                .iter()
                .all(|(term, definition)| other.definitions.get(term) == Some(definition))
    }
}

impl Eq for GlossaryStore {}

impl Hash for GlossaryStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pairs: Vec<_> = self.definitions.iter().collect();
        pairs.sort_unstable();
        self.size.hash(state);
        pairs.hash(state);
    }
}

impl fmt::Display for GlossaryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, (term, definition)) in self.entries().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}={definition}")?;
        }
        write!(f, "]")
    }
}
