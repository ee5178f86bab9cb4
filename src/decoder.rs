use crate::error::{Error, Result};
use crate::token::Token;

/// Reconstruct the original bytes from a token stream.
///
/// Back-references are resolved against the growing output buffer one byte
/// at a time, appending before reading the next position. Length may exceed
/// offset: the copy then re-reads bytes written earlier in the same loop
/// (offset=1, length=50 repeats the last byte 50 times), so this must not
/// be replaced with a bulk copy.
///
/// Fails fast on the first invalid token, identifying it by index; no
/// partial output is ever returned.
pub fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match *token {
            Token::Literal(byte) => out.push(byte),
            Token::Match { offset, length } => {
                let offset = offset as usize;
                let length = length as usize;

                if offset == 0 || offset > out.len() {
                    return Err(Error::InvalidBackReference {
                        token: index,
                        offset,
                        available: out.len(),
                    });
                }
                if length == 0 {
                    return Err(Error::InvalidMatchLength { token: index });
                }

                let start = out.len() - offset;
                for k in 0..length {
                    let byte = out[start + k];
                    out.push(byte);
                }
            }
        }
    }

    Ok(out)
}
