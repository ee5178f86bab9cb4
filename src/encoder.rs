use memchr::memchr_iter;

use crate::token::{Token, MAX_MATCH_LEN, MIN_MATCH_LEN, WINDOW_SIZE};

/// A candidate match found while scanning the window: the absolute position
/// it starts at and how many bytes it matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub start: usize,
    pub length: usize,
}

/// Start of the search window for position `pos`
#[inline]
pub(crate) fn window_start(pos: usize) -> usize {
    pos.saturating_sub(WINDOW_SIZE)
}

/// Length of the run matching `data[pos..]` when starting the copy at
/// `from`. Stops at the first mismatch, at `MAX_MATCH_LEN`, or at end of
/// input. The run may extend past `pos` itself (`from + len >= pos`), which
/// is what makes self-overlapping matches possible.
fn match_length(data: &[u8], from: usize, pos: usize) -> usize {
    let limit = MAX_MATCH_LEN.min(data.len() - pos);
    let mut len = 0;
    while len < limit && data[from + len] == data[pos + len] {
        len += 1;
    }
    len
}

/// All non-zero-length candidate matches for position `pos`, in window
/// order (most distant first).
///
/// Only window positions whose byte equals `data[pos]` can match at all, so
/// scanning with memchr visits exactly the candidates a full window sweep
/// would find with non-zero length. Zero-length positions can never win
/// selection and are not reported in the step trace either.
pub(crate) fn candidates(data: &[u8], pos: usize) -> impl Iterator<Item = Candidate> + '_ {
    let start = window_start(pos);
    memchr_iter(data[pos], &data[start..pos]).map(move |found| {
        let from = start + found;
        Candidate { start: from, length: match_length(data, from, pos) }
    })
}

/// Pick the winning candidate: longest match, ties resolved to the first
/// (most distant) candidate seen. Updates only on strict improvement, so a
/// later equal-length candidate never displaces an earlier one. Returns
/// None when no candidate reaches `MIN_MATCH_LEN`.
pub(crate) fn select_match<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        if candidate.length > best.map_or(0, |b| b.length) {
            best = Some(candidate);
        }
    }
    best.filter(|b| b.length >= MIN_MATCH_LEN)
}

/// Compress `data` into a token stream.
///
/// Total function: any byte sequence (including empty) compresses, and
/// [`crate::decompress`] inverts the result losslessly. Deterministic:
/// identical input always yields the identical token stream.
///
/// Cost is O(n·W) with W ≤ 255 (each position scans up to 255 window
/// offsets, up to 255 bytes each). The core does not cap input size;
/// callers feeding untrusted input should (the bundled CLI rejects inputs
/// over 100 KiB).
pub fn compress(data: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        match select_match(candidates(data, pos)) {
            Some(best) => {
                tokens.push(Token::Match {
                    offset: (pos - best.start) as u8,
                    length: best.length as u8,
                });
                pos += best.length;
            }
            None => {
                tokens.push(Token::Literal(data[pos]));
                pos += 1;
            }
        }
    }

    tokens
}
