use lexipix_dsa::LexiconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexipixError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary rejected: {0}")]
    Dictionary(#[from] LexiconError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("word sequence is empty")]
    EmptyWordSequence,
    #[error("word {word:?} at position {position} is not in the dictionary")]
    WordNotFound { position: usize, word: String },
    #[error("buffer of {len} bytes is too small to render (need at least {min})")]
    BufferTooSmall { len: usize, min: usize },
    #[error("image encoding failed: {0}")]
    Image(String),
}

impl From<toml::de::Error> for LexipixError {
    fn from(e: toml::de::Error) -> Self {
        LexipixError::Config(e.to_string())
    }
}
