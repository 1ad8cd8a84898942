//! Fatal error types
//!
//! An empty corpus and a missing stop-word file are not errors: the first
//! produces the "no words" output, the second disables exclusion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KwicError {
    #[error("Missing command line argument for corpus file")]
    MissingArgument,

    #[error("Corpus file could not be opened: {path}")]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
