pub mod decoder;
pub mod encoder;
pub mod error;
pub mod token;
pub mod trace;

pub use decoder::decompress;
pub use encoder::compress;
pub use error::{Error, Result};
pub use token::{Token, MAX_MATCH_LEN, MIN_MATCH_LEN, WINDOW_SIZE};
pub use trace::{compress_with_trace, MatchCandidate, StepAction, StepRecord};

/// Byte accounting for a compression run
///
/// `encoded_bytes` counts one byte per literal and two per match (the
/// offset/length pair), the natural serialized size of the scheme. The
/// JSON wire form is larger; it exists for interop, not for measuring
/// compression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub token_count: u64,
    pub encoded_bytes: u64,
}

impl CompressStats {
    pub fn from_tokens(input_len: usize, tokens: &[Token]) -> Self {
        Self {
            input_bytes: input_len as u64,
            token_count: tokens.len() as u64,
            encoded_bytes: tokens.iter().map(|t| t.encoded_size() as u64).sum(),
        }
    }

    /// Compression ratio (input bytes per encoded byte); 0.0 for empty input
    pub fn ratio(&self) -> f64 {
        if self.encoded_bytes == 0 {
            0.0
        } else {
            self.input_bytes as f64 / self.encoded_bytes as f64
        }
    }
}
