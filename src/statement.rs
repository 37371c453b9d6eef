use memchr::memchr;
use once_cell::sync::Lazy;
use regex::Regex;

static VALUES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)\bVALUES\b\s*(.*);").unwrap());

static GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

const INSERT_KEYWORD: &[u8] = b"insert into";

/// Returns every complete `INSERT INTO <table> … ;` statement for `table`.
///
/// Matching is case-insensitive and statement bodies may span lines. Each
/// statement runs from its `INSERT` keyword to the first following `;`.
/// This is a scan, not a parse: a `;` inside a string literal truncates the
/// statement early, and a statement with no terminator at all is dropped.
pub fn table_statements<'a>(sql: &'a str, table: &str) -> Vec<&'a str> {
    let bytes = sql.as_bytes();
    let mut statements = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_insert(bytes, pos, table.as_bytes()) {
        match memchr(b';', &bytes[start..]) {
            Some(end) => {
                statements.push(&sql[start..start + end + 1]);
                pos = start + end + 1;
            }
            None => break,
        }
    }

    statements
}

/// Extracts the interior of a statement's `VALUES … ;` clause.
pub fn values_clause(statement: &str) -> Option<&str> {
    VALUES_REGEX
        .captures(statement)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Ordered tuple groups of a `VALUES` clause.
///
/// Groups are located with a simple non-nested parenthesis match, so a
/// literal containing an unescaped `)` splits its group early. Accepted
/// limitation of the dump format, not handled here.
pub fn value_groups(values: &str) -> Vec<&str> {
    GROUP_REGEX
        .captures_iter(values)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Case-insensitive byte search for `INSERT INTO <table>` starting at
/// `from`. Backticks around the table name are accepted but not required,
/// and the name must end at an identifier boundary so `page` never matches
/// `pagelinks`.
fn find_insert(bytes: &[u8], from: usize, table: &[u8]) -> Option<usize> {
    let mut i = from;
    while i + INSERT_KEYWORD.len() <= bytes.len() {
        if starts_with_ignore_case(&bytes[i..], INSERT_KEYWORD) {
            let mut j = i + INSERT_KEYWORD.len();
            let ws_start = j;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j > ws_start && name_matches_at(bytes, j, table) {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

fn name_matches_at(bytes: &[u8], mut at: usize, table: &[u8]) -> bool {
    if bytes.get(at) == Some(&b'`') {
        at += 1;
    }
    if !starts_with_ignore_case(&bytes[at..], table) {
        return false;
    }
    let mut end = at + table.len();
    if bytes.get(end) == Some(&b'`') {
        end += 1;
    }
    match bytes.get(end) {
        Some(c) => !c.is_ascii_alphanumeric() && *c != b'_',
        None => true,
    }
}

fn starts_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len()
        && haystack
            .iter()
            .zip(needle.iter())
            .all(|(a, b)| a.to_ascii_lowercase() == b.to_ascii_lowercase())
}
