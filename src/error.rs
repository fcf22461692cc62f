use crate::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Statement {index} failed to parse: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    /// Parse failure of the statement at `index` (zero-based) in the input.
    pub fn parse(index: usize, source: ParseError) -> Self {
        Error::Parse { index, source }
    }
}
