//! Reader for the block-oriented glossary source format.
//!
//! A block is a term line, a first definition line, any number of continuation
//! lines, and a blank terminator line. Continuation lines are joined onto the
//! definition with single spaces.

use crate::error::{GlossaryError, Result};
use crate::store::TermStore;
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept end of input in place of the final block's blank terminator.
    pub lenient_eof: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub blocks: usize,
    pub duplicates_dropped: usize,
}

/// Parses in-memory lines. Lines must not carry their terminators.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<(TermStore, ParseReport)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_source(lines.into_iter().map(|line| Ok(line.into())), options)
}

/// Parses a buffered reader; `source` is only used to label I/O errors.
pub fn parse_reader<R: BufRead>(
    reader: R,
    source: &Path,
    options: &ParseOptions,
) -> Result<(TermStore, ParseReport)> {
    parse_source(
        reader
            .lines()
            .map(|line| line.map_err(|err| GlossaryError::io(source, err))),
        options,
    )
}

fn parse_source<I>(lines: I, options: &ParseOptions) -> Result<(TermStore, ParseReport)>
where
    I: Iterator<Item = Result<String>>,
{
    let mut source = LineSource { lines, line_no: 0 };
    let mut store = TermStore::new();
    let mut report = ParseReport::default();

    while let Some(term) = source.next_line()? {
        let start = source.line_no;
        let Some(mut definition) = source.next_line()? else {
            return Err(GlossaryError::MalformedInput { term, line: start });
        };
        loop {
            match source.next_line()? {
                Some(line) if line.is_empty() => break,
                Some(line) => {
                    definition.push(' ');
                    definition.push_str(&line);
                }
                None if options.lenient_eof => {
                    debug!(%term, line = start, "accepting unterminated final block");
                    break;
                }
                None => return Err(GlossaryError::MalformedInput { term, line: start }),
            }
        }

        report.blocks += 1;
        if store.contains(&term) {
            debug!(%term, line = start, "dropping duplicate term");
            report.duplicates_dropped += 1;
        } else {
            store.insert(term, definition);
        }
    }

    Ok((store, report))
}

struct LineSource<I> {
    lines: I,
    line_no: usize,
}

impl<I> LineSource<I>
where
    I: Iterator<Item = Result<String>>,
{
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                line.map(Some)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn strict() -> ParseOptions {
        ParseOptions::default()
    }

    #[test]
    fn joins_continuation_lines_with_single_spaces() {
        let input = ["tree", "A tall plant", "with a trunk", "and branches.", ""];
        let (store, report) = parse_lines(input, &strict()).unwrap();
        assert_eq!(
            store.get("tree"),
            Some("A tall plant with a trunk and branches.")
        );
        assert_eq!(report.blocks, 1);
    }

    #[test]
    fn single_line_definitions_are_valid() {
        let input = ["dog", "A loyal animal.", "", "cat", "A small pet.", ""];
        let (store, _) = parse_lines(input, &strict()).unwrap();
        let pairs: Vec<_> = store.iter().collect();
        assert_eq!(
            pairs,
            vec![("dog", "A loyal animal."), ("cat", "A small pet.")]
        );
    }

    #[test]
    fn duplicate_terms_keep_first_definition() {
        let input = ["dog", "first", "", "dog", "second", ""];
        let (store, report) = parse_lines(input, &strict()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("dog"), Some("first"));
        assert_eq!(report.blocks, 2);
        assert_eq!(report.duplicates_dropped, 1);
    }

    #[test]
    fn empty_input_yields_empty_store() {
        let (store, report) = parse_lines(Vec::<String>::new(), &strict()).unwrap();
        assert!(store.is_empty());
        assert_eq!(report, ParseReport::default());
    }

    #[test]
    fn terms_are_taken_verbatim() {
        let input = ["  spaced term ", "kept as is", ""];
        let (store, _) = parse_lines(input, &strict()).unwrap();
        assert!(store.contains("  spaced term "));
    }

    #[test]
    fn unterminated_block_is_malformed() {
        let input = ["dog", "A loyal animal.", "", "cat", "A small pet."];
        let err = parse_lines(input, &strict()).unwrap_err();
        match err {
            GlossaryError::MalformedInput { term, line } => {
                assert_eq!(term, "cat");
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn term_without_definition_is_malformed_even_when_lenient() {
        let lenient = ParseOptions { lenient_eof: true };
        let err = parse_lines(["orphan"], &lenient).unwrap_err();
        assert!(matches!(err, GlossaryError::MalformedInput { ref term, line: 1 } if term == "orphan"));
    }

    #[test]
    fn lenient_eof_accepts_unterminated_tail() {
        let lenient = ParseOptions { lenient_eof: true };
        let input = ["cat", "A small", "pet."];
        let (store, report) = parse_lines(input, &lenient).unwrap();
        assert_eq!(store.get("cat"), Some("A small pet."));
        assert_eq!(report.blocks, 1);
    }

    #[test]
    fn reader_strips_crlf_terminators() {
        let input = "dog\r\nA loyal\r\nanimal.\r\n\r\n";
        let (store, _) =
            parse_reader(Cursor::new(input), Path::new("inline"), &strict()).unwrap();
        assert_eq!(store.get("dog"), Some("A loyal animal."));
    }

    #[test]
    fn trailing_blank_line_after_last_block_is_malformed() {
        // An extra blank line opens a block whose term is the empty string.
        let input = "dog\nA loyal animal.\n\n\n";
        let err = parse_reader(Cursor::new(input), Path::new("inline"), &strict()).unwrap_err();
        assert!(matches!(err, GlossaryError::MalformedInput { ref term, .. } if term.is_empty()));
    }
}
