#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not parse query text at offset {offset}: {remaining:?}")]
    Lex { offset: usize, remaining: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
