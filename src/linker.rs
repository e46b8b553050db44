//! Rewrites occurrences of known terms inside definitions into page links.
//!
//! Every term is a substring pattern: `cat` matches inside `category`. All
//! patterns are compiled into one leftmost-first automaton and the definition
//! is scanned once, so text produced by a replacement is never matched again.
//! The leftmost match always wins: with `pet` inserted before `small pet`,
//! "a small pet" links `small pet`, because that match starts earlier. Only
//! when several terms start at the same position does the one inserted first win.

use crate::error::{GlossaryError, Result};
use crate::store::TermStore;
use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};

pub struct CrossLinker<'a> {
    terms: Vec<&'a str>,
    matcher: Option<DoubleArrayAhoCorasick<u32>>,
}

impl<'a> CrossLinker<'a> {
    pub fn new(store: &'a TermStore) -> Result<Self> {
        // The empty term would match between every pair of characters.
        let terms: Vec<&'a str> = store.terms().filter(|term| !term.is_empty()).collect();
        let matcher: Option<DoubleArrayAhoCorasick<u32>> = if terms.is_empty() {
            None
        } else {
            Some(
                DoubleArrayAhoCorasickBuilder::new()
                    .match_kind(MatchKind::LeftmostFirst)
                    .build(&terms)
                    .map_err(GlossaryError::Matcher)?,
            )
        };
        Ok(Self { terms, matcher })
    }

    pub fn linkify(&self, definition: &str) -> String {
        let Some(matcher) = &self.matcher else {
            return definition.to_string();
        };
        let mut linked = String::with_capacity(definition.len());
        let mut cursor = 0;
        for found in matcher.leftmost_find_iter(definition) {
            linked.push_str(&definition[cursor..found.start()]);
            push_anchor(&mut linked, self.terms[found.value() as usize]);
            cursor = found.end();
        }
        linked.push_str(&definition[cursor..]);
        linked
    }
}

/// One-shot form of [`CrossLinker::linkify`]. Prefer building a `CrossLinker`
/// once when linking many definitions against the same store.
pub fn linkify(definition: &str, store: &TermStore) -> Result<String> {
    Ok(CrossLinker::new(store)?.linkify(definition))
}

pub fn anchor(term: &str) -> String {
    let mut out = String::with_capacity(term.len() * 2 + 20);
    push_anchor(&mut out, term);
    out
}

fn push_anchor(out: &mut String, term: &str) {
    out.push_str("<a href=\"");
    out.push_str(term);
    out.push_str(".html\">");
    out.push_str(term);
    out.push_str("</a>");
}
