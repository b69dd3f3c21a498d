//! Null-terminated token recovery from binary blobs

/// Decode UTF-8, dropping invalid byte sequences instead of replacing them.
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Strip leading control characters (code points 0-31).
pub fn clean(token: &str) -> &str {
    token.trim_start_matches(|c: char| (c as u32) < 0x20)
}

/// Split a blob on null bytes into cleaned tokens.
///
/// Yields one token per segment, including empty ones and the trailing
/// segment after the last null, so a blob with `n` nulls gives `n + 1`
/// tokens.
pub fn split_tokens(blob: &[u8]) -> impl Iterator<Item = String> + '_ {
    let mut start = 0;
    memchr::memchr_iter(0, blob)
        .chain(std::iter::once(blob.len()))
        .map(move |end| {
            let mut token = decode_ignoring_invalid(&blob[start..end]);
            start = end + 1;

            let leading = token.len() - clean(&token).len();
            token.drain(..leading);
            token
        })
}
