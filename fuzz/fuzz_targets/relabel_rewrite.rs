//! Fuzz target for class-index rewriting.
//!
//! Rewriting must be idempotent: a second pass over its own output
//! changes nothing.

#![no_main]

use labelcrop::relabel::rewrite_content;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let (once, _) = rewrite_content(content, "0");
    let (twice, _) = rewrite_content(&once, "0");
    assert_eq!(once, twice);
});
