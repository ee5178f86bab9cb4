use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors (CLI shell)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Wire format errors
    #[error("Invalid token stream: {0}")]
    TokenSyntax(#[from] serde_json::Error),

    // Decode errors
    #[error(
        "Token {token}: back-reference offset {offset} outside valid range 1..={available} \
         (output has {available} bytes)"
    )]
    InvalidBackReference { token: usize, offset: usize, available: usize },

    #[error("Token {token}: match length must be at least 1")]
    InvalidMatchLength { token: usize },

    // Shell-level limits
    #[error("Input too large: {size} bytes exceeds maximum {max}")]
    InputTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
