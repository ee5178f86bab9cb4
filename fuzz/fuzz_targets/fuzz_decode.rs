#![no_main]

use libfuzzer_sys::fuzz_target;
use lzvis::{decompress, Token};

fuzz_target!(|data: &[u8]| {
    // Treat the input as wire JSON; both parse failures and decode
    // failures are fine, panics and out-of-range reads are not
    if let Ok(tokens) = serde_json::from_slice::<Vec<Token>>(data) {
        let uncompressed: usize = tokens.iter().map(|t| t.uncompressed_size()).sum();
        if uncompressed > 1 << 20 {
            return;
        }
        let _ = decompress(&tokens);
    }
});
