/// Literal prefixes marking content held in MediaWiki external storage.
/// The real bytes live outside the `text` table, so these pass through
/// untouched rather than being decoded.
const EXTERNAL_STORAGE_MARKERS: [&str; 2] = ["gzip:", "utf-8:"];

/// Best-effort decode of one quote-stripped text literal.
///
/// `0x…` literals are decoded from hex and converted to UTF-8 lossily, so a
/// stray invalid byte sequence mangles one character instead of dropping the
/// row. If the hex itself is malformed the literal comes back unchanged.
/// External-storage markers pass through as-is. Everything else gets SQL
/// escape rewriting. Never fails.
pub fn decode_text(raw: &str) -> String {
    if let Some(digits) = raw.strip_prefix("0x") {
        return match hex::decode(digits) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => raw.to_string(),
        };
    }

    if EXTERNAL_STORAGE_MARKERS.iter().any(|m| raw.starts_with(m)) {
        return raw.to_string();
    }

    unescape(raw)
}

/// Rewrites SQL string escapes: the backslash forms for single quote,
/// double quote, and backslash (in that priority), then the doubled
/// single-quote form left in place by the tokenizer.
pub fn unescape(s: &str) -> String {
    s.replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
        .replace("''", "'")
}

/// Strips the surrounding single quotes of a string literal.
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches('\'')
}
