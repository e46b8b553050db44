mod error;
mod linker;
mod parser;
mod render;
mod sort;
mod store;

pub use error::{GlossaryError, Result};
pub use linker::{CrossLinker, anchor, linkify};
pub use parser::{ParseOptions, ParseReport, parse_lines, parse_reader};
pub use render::{
    DEFAULT_INDEX_TITLE, INDEX_FILE, page_path, render_index_page, render_term_page, term_file_name,
    write_page,
};
pub use sort::{sort_terms, sorted_terms};
pub use store::TermStore;

use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GlossaryConfig {
    /// Destination folder. It must already exist.
    pub output_dir: PathBuf,
    pub index_title: String,
    pub parse: ParseOptions,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            index_title: DEFAULT_INDEX_TITLE.to_string(),
            parse: ParseOptions::default(),
        }
    }
}

impl GlossaryConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_index_title(mut self, title: impl Into<String>) -> Self {
        self.index_title = title.into();
        self
    }

    pub fn with_lenient_eof(mut self, lenient: bool) -> Self {
        self.parse.lenient_eof = lenient;
        self
    }
}

/// Outcome of [`Glossary::write_site`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSummary {
    pub terms: usize,
    pub duplicates_dropped: usize,
    pub output_dir: PathBuf,
    pub pages: Vec<PathBuf>,
    pub index: PathBuf,
}

/// A parsed glossary, ready to be rendered.
#[derive(Debug, Clone)]
pub struct Glossary {
    store: TermStore,
    report: ParseReport,
}

impl Glossary {
    pub fn from_lines<I, S>(lines: I, options: &ParseOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (store, report) = parse_lines(lines, options)?;
        Ok(Self { store, report })
    }

    pub fn from_reader<R: std::io::BufRead>(
        reader: R,
        source: &Path,
        options: &ParseOptions,
    ) -> Result<Self> {
        let (store, report) = parse_reader(reader, source, options)?;
        Ok(Self { store, report })
    }

    /// Opens and parses `path`; the file is closed once parsing finishes.
    pub fn from_path(path: &Path, options: &ParseOptions) -> Result<Self> {
        let file = File::open(path).map_err(|err| GlossaryError::io(path, err))?;
        let glossary = Self::from_reader(BufReader::new(file), path, options)?;
        info!(
            path = %path.display(),
            terms = glossary.store.len(),
            duplicates = glossary.report.duplicates_dropped,
            "Parsed glossary source"
        );
        Ok(glossary)
    }

    pub fn store(&self) -> &TermStore {
        &self.store
    }

    pub fn report(&self) -> ParseReport {
        self.report
    }

    pub fn sorted_terms(&self) -> Vec<&str> {
        sorted_terms(&self.store)
    }

    /// Writes one page per term in first-seen order, then the index page.
    /// Already-written pages are left in place when a later write fails.
    pub fn write_site(&self, config: &GlossaryConfig) -> Result<SiteSummary> {
        let dir = config.output_dir.as_path();
        let linker = CrossLinker::new(&self.store)?;

        let mut pages = Vec::with_capacity(self.store.len());
        for (term, definition) in self.store.iter() {
            let html = render_term_page(term, &linker.linkify(definition))?;
            let path = write_page(dir, &term_file_name(term), &html)?;
            debug!(%term, path = %path.display(), "Wrote term page");
            pages.push(path);
        }

        let sorted = self.sorted_terms();
        let html = render_index_page(&config.index_title, &sorted)?;
        let index = write_page(dir, INDEX_FILE, &html)?;
        info!(
            dir = %dir.display(),
            pages = pages.len(),
            "Wrote glossary pages and index"
        );

        Ok(SiteSummary {
            terms: self.store.len(),
            duplicates_dropped: self.report.duplicates_dropped,
            output_dir: config.output_dir.clone(),
            pages,
            index,
        })
    }
}

/// Parses `input` and writes the full site described by `config`.
pub fn generate(input: &Path, config: &GlossaryConfig) -> Result<SiteSummary> {
    Glossary::from_path(input, &config.parse)?.write_site(config)
}
