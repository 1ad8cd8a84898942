//! Concordance rendering
//!
//! Text output is three fixed-width columns per occurrence: pre-context
//! right-justified, keyword centered, post-context left-justified. Column widths
//! come from the index's max lengths plus the layout padding, so every keyword
//! lines up in one column.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::index::{KeywordIndex, MaxLengths};
use crate::window::{ContextRecord, KEY_SLOT};

/// Spaces joining the five words on either side of the keyword
const CONTEXT_SEPARATORS: usize = KEY_SLOT - 1;

/// Extra padding added to each column's max observed length.
///
/// Max lengths count word characters only, so the pre and post padding never
/// drop below the joining spaces a full five-word context needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub pre_padding: usize,
    pub key_padding: usize,
    pub post_padding: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            pre_padding: 40,
            key_padding: 10,
            post_padding: 40,
        }
    }
}

/// Renders index traversals as aligned text rows
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    pre_width: usize,
    key_width: usize,
    post_width: usize,
}

impl Formatter {
    pub fn new(max: MaxLengths, layout: Layout) -> Self {
        Self {
            pre_width: max.pre + layout.pre_padding.max(CONTEXT_SEPARATORS),
            key_width: max.key + layout.key_padding,
            post_width: max.post + layout.post_padding.max(CONTEXT_SEPARATORS),
        }
    }

    /// Formatter sized for `index` with the default layout
    pub fn for_index(index: &KeywordIndex) -> Self {
        Self::new(index.max_lengths(), Layout::default())
    }

    /// Column widths as (pre, key, post)
    pub fn widths(&self) -> (usize, usize, usize) {
        (self.pre_width, self.key_width, self.post_width)
    }

    /// One row for one occurrence
    pub fn render_line(&self, record: &ContextRecord) -> String {
        format!(
            "{pre:>pre_width$}{key}{post:<post_width$}",
            pre = record.pre_context(),
            key = center(record.key(), self.key_width),
            post = record.post_context(),
            pre_width = self.pre_width,
            post_width = self.post_width,
        )
    }

    /// Every row of the index, alphabetical by keyword then in corpus order
    pub fn render(&self, index: &KeywordIndex) -> Vec<String> {
        index
            .traverse()
            .flat_map(|(_, list)| list.iter())
            .map(|record| self.render_line(record))
            .collect()
    }

    /// Write every row, newline-terminated. An empty index writes nothing.
    pub fn write_index<W: Write>(&self, index: &KeywordIndex, out: &mut W) -> io::Result<()> {
        for (_, list) in index.traverse() {
            for record in list {
                writeln!(out, "{}", self.render_line(record))?;
            }
        }
        Ok(())
    }
}

/// Center `word` in `width` columns; an odd leftover space goes before the word.
fn center(word: &str, width: usize) -> String {
    let len = word.chars().count();
    let pad_after = width.saturating_sub(len) / 2;
    let pad_before = width.saturating_sub(pad_after + len);
    format!("{}{}{}", " ".repeat(pad_before), word, " ".repeat(pad_after))
}

/// One keyword and its occurrences, shaped for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcordanceEntry {
    pub word: String,
    pub occurrences: Vec<OccurrenceView>,
}

/// One occurrence with its context already joined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceView {
    pub pre: String,
    pub keyword: String,
    pub post: String,
}

impl From<&ContextRecord> for OccurrenceView {
    fn from(record: &ContextRecord) -> Self {
        Self {
            pre: record.pre_context(),
            keyword: record.key().to_string(),
            post: record.post_context(),
        }
    }
}

/// Snapshot the index in traversal order
pub fn to_entries(index: &KeywordIndex) -> Vec<ConcordanceEntry> {
    index
        .traverse()
        .map(|(word, list)| ConcordanceEntry {
            word: word.to_string(),
            occurrences: list.iter().map(OccurrenceView::from).collect(),
        })
        .collect()
}
