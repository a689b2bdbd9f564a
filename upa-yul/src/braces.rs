//! Brace matching over raw text
//!
//! The matcher is character based: it has no notion of Yul string literals or
//! comments. Every `{` and `}` in the scanned range takes part in the depth
//! count.

/// Find the closing brace matching the opening brace at `open`.
///
/// Scanning starts at `open` with a depth of zero. Each `{` increments the
/// depth and each `}` decrements it; the offset of the `}` that brings the
/// depth back to zero is returned. `None` means the end of the text was
/// reached first.
///
/// Offsets are byte offsets. Both brace characters are ASCII, so the scan can
/// walk bytes without decoding and the returned offset is always a char
/// boundary.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if open >= bytes.len() {
        return None;
    }

    let mut depth: i64 = 0;
    for (offset, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Whether every `}` in `text` closes an earlier `{` and nothing is left open.
pub fn is_balanced(text: &str) -> bool {
    let mut depth: i64 = 0;
    for byte in text.bytes() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
