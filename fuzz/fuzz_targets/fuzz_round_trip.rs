#![no_main]

use libfuzzer_sys::fuzz_target;
use lzvis::{compress, compress_with_trace, decompress};

fuzz_target!(|data: &[u8]| {
    // Keep the O(n * 255) search bounded per execution
    if data.len() > 4096 {
        return;
    }

    let tokens = compress(data);
    let restored = decompress(&tokens).expect("own stream must decode");
    assert_eq!(restored, data);

    // Instrumentation must never change the chosen tokens
    let (steps, traced) = compress_with_trace(data);
    assert_eq!(traced, tokens);
    assert_eq!(steps.len(), tokens.len());
});
