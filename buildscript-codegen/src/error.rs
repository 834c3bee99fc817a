use std::{io, path::PathBuf};

/// Errors raised while building or emitting a script.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported expression value of type '{kind}'")]
    UnsupportedValue { kind: String },

    #[error("unknown suite: {name}")]
    UnknownSuite { name: String },

    #[error("invalid repository url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("build generation aborted due to insecure protocol in repository: {url}")]
    InsecureRepository { url: String },

    #[error("could not generate file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
