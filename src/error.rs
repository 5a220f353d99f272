use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MuhkeusError {
    /// No corpus path was given on the command line.
    #[error("must give a corpus file path as parameter")]
    MissingPath,

    /// The corpus file could not be statted, opened or fully read.
    #[error("cannot read corpus file '{}'", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The corpus normalized and tokenized to zero words, so there is
    /// nothing to pair.
    #[error("corpus contains no words")]
    EmptyCorpus,
}
