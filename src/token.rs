use serde::{Deserialize, Serialize};

/// How far back a match may start. Offsets fit in a single byte.
pub const WINDOW_SIZE: usize = 255;

/// Longest run a single match token may cover. Lengths fit in a single byte.
pub const MAX_MATCH_LEN: usize = 255;

/// Shortest match worth emitting. A match costs two encoded bytes, so
/// anything below three bytes would expand the stream.
pub const MIN_MATCH_LEN: usize = 3;

/// A single token in the compressed stream.
///
/// The one-byte `offset`/`length` fields are the defining property of this
/// scheme: both the window and the match cap are exactly 255 so that a match
/// always encodes as two bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireToken", into = "WireToken")]
pub enum Token {
    /// A literal byte, emitted verbatim
    Literal(u8),
    /// A back-reference: copy `length` bytes from `offset` bytes back.
    /// Both fields are at least 1 in any stream the encoder produces.
    Match { offset: u8, length: u8 },
}

impl Token {
    /// Number of input bytes this token stands for
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length as usize,
        }
    }

    /// Number of bytes this token occupies in the encoded form
    /// (one for a literal, two for an offset/length pair)
    pub fn encoded_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { .. } => 2,
        }
    }
}

/// JSON wire shape: `{"type":"literal","value":N}` or
/// `{"type":"match","offset":N,"length":N}`. Unknown tags, missing fields,
/// and out-of-range integers are rejected at parse time, before decoding
/// touches the stream.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireToken {
    Literal { value: u8 },
    Match { offset: u8, length: u8 },
}

impl From<WireToken> for Token {
    fn from(wire: WireToken) -> Self {
        match wire {
            WireToken::Literal { value } => Token::Literal(value),
            WireToken::Match { offset, length } => Token::Match { offset, length },
        }
    }
}

impl From<Token> for WireToken {
    fn from(token: Token) -> Self {
        match token {
            Token::Literal(value) => WireToken::Literal { value },
            Token::Match { offset, length } => WireToken::Match { offset, length },
        }
    }
}
