//! Per-keyword occurrence list

use crate::window::ContextRecord;

/// Contexts of one keyword, in the order the keyword was met in the corpus.
///
/// Append-only; cloning copies every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceList {
    records: Vec<ContextRecord>,
}

impl OccurrenceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a context at the tail
    pub fn add(&mut self, context: ContextRecord) {
        self.records.push(context);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContextRecord> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&ContextRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a ContextRecord;
    type IntoIter = std::slice::Iter<'a, ContextRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
