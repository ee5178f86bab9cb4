use serde::Serialize;

use crate::encoder::{candidates, select_match, window_start, Candidate};
use crate::token::Token;

/// One candidate match examined while scanning the window: where it starts,
/// how far it matched, and the bytes it matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    /// Absolute input position the candidate starts at
    pub start: usize,
    /// How many bytes matched before the first mismatch
    pub length: usize,
    /// The matched bytes themselves
    pub bytes: Vec<u8>,
}

/// The action the encoder took at one position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepAction {
    Literal {
        value: u8,
    },
    Match {
        offset: u8,
        length: u8,
        /// Absolute position of the winning candidate
        start: usize,
    },
}

/// One encoder iteration: the position scanned, the window bound, every
/// non-zero-length candidate considered, and the action taken.
///
/// Step records are a pure side channel for visualization. They are
/// produced fresh per call and never feed back into the encoder's choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub position: usize,
    pub window_start: usize,
    pub candidates: Vec<MatchCandidate>,
    pub action: StepAction,
}

/// Compress `data` while recording the match search at every position.
///
/// Shares the candidate enumeration and selection logic with
/// [`crate::compress`], so the returned token stream is identical to what
/// the plain encoder emits for the same input.
pub fn compress_with_trace(data: &[u8]) -> (Vec<StepRecord>, Vec<Token>) {
    let mut steps = Vec::new();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let position = pos;
        let found: Vec<MatchCandidate> = candidates(data, position)
            .map(|c| MatchCandidate {
                start: c.start,
                length: c.length,
                bytes: data[position..position + c.length].to_vec(),
            })
            .collect();

        let best =
            select_match(found.iter().map(|c| Candidate { start: c.start, length: c.length }));

        let action = match best {
            Some(best) => {
                let offset = (position - best.start) as u8;
                let length = best.length as u8;
                tokens.push(Token::Match { offset, length });
                pos += best.length;
                StepAction::Match { offset, length, start: best.start }
            }
            None => {
                let value = data[position];
                tokens.push(Token::Literal(value));
                pos += 1;
                StepAction::Literal { value }
            }
        };

        steps.push(StepRecord {
            position,
            window_start: window_start(position),
            candidates: found,
            action,
        });
    }

    (steps, tokens)
}
