use crate::config::{MAIN_NAMESPACE, PROGRESS_INTERVAL};
use crate::decode::{decode_text, strip_quotes};
use crate::statement::{table_statements, value_groups, values_clause};
use crate::tokenizer::split_values;
use indicatif::ProgressBar;
use rustc_hash::FxHashMap;
use tracing::info;

/// page_id -> title for main-namespace pages. A page id appearing twice
/// keeps the later title.
pub fn build_pages(sql: &str) -> FxHashMap<u32, String> {
    let mut pages = FxHashMap::default();
    for_each_row(sql, "page", |fields| {
        if let Some((id, title)) = page_row(fields) {
            pages.insert(id, title);
        }
    });
    info!(pages = pages.len(), "Page table extracted");
    pages
}

/// page_id -> highest revision id seen for that page. The maximum is taken
/// across all revision statements, so tuple order never matters.
pub fn build_revisions(sql: &str) -> FxHashMap<u32, u32> {
    let mut latest = FxHashMap::default();
    for_each_row(sql, "revision", |fields| {
        if let Some((rev_id, page_id)) = revision_row(fields) {
            let entry = latest.entry(page_id).or_insert(rev_id);
            if rev_id > *entry {
                *entry = rev_id;
            }
        }
    });
    info!(revisions = latest.len(), "Revision table extracted");
    latest
}

/// text_id -> decoded content. Decoding happens once, here; a literal that
/// fails to decode is stored raw rather than dropped.
pub fn build_texts(sql: &str) -> FxHashMap<u32, String> {
    let mut texts = FxHashMap::default();
    for_each_row(sql, "text", |fields| {
        if let Some((id, content)) = text_row(fields) {
            texts.insert(id, content);
        }
    });
    info!(texts = texts.len(), "Text table extracted");
    texts
}

/// Runs `row` over every value tuple of every `INSERT INTO <table>`
/// statement in the dump.
fn for_each_row<F: FnMut(&[String])>(sql: &str, table: &str, mut row: F) {
    let pb = ProgressBar::new_spinner();
    let mut seen: u64 = 0;

    for statement in table_statements(sql, table) {
        let values = match values_clause(statement) {
            Some(v) => v,
            None => continue,
        };
        for group in value_groups(values) {
            row(&split_values(group));
            seen += 1;
            if seen % PROGRESS_INTERVAL == 0 {
                pb.tick();
            }
        }
    }

    pb.finish_and_clear();
}

/// One `page` tuple: (id, namespace, title, …). Tuples outside the main
/// namespace, short tuples, and non-integer ids are all skipped.
fn page_row(fields: &[String]) -> Option<(u32, String)> {
    if fields.len() < 3 {
        return None;
    }
    let id: u32 = fields[0].parse().ok()?;
    if fields[1] != MAIN_NAMESPACE {
        return None;
    }
    Some((id, strip_quotes(&fields[2]).to_string()))
}

/// One `revision` tuple: (id, page_id, …).
fn revision_row(fields: &[String]) -> Option<(u32, u32)> {
    if fields.len() < 2 {
        return None;
    }
    let rev_id: u32 = fields[0].parse().ok()?;
    let page_id: u32 = fields[1].parse().ok()?;
    Some((rev_id, page_id))
}

/// One `text` tuple: (id, content, …).
fn text_row(fields: &[String]) -> Option<(u32, String)> {
    if fields.len() < 2 {
        return None;
    }
    let id: u32 = fields[0].parse().ok()?;
    Some((id, decode_text(strip_quotes(&fields[1]))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_main_namespace_only() {
        let sql = "INSERT INTO `page` VALUES (1,0,'Guide'),(2,1,'Talk:Guide'),(3,0,'Combat');";
        let pages = build_pages(sql);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages.get(&1).map(String::as_str), Some("Guide"));
        assert_eq!(pages.get(&3).map(String::as_str), Some("Combat"));
        assert!(!pages.contains_key(&2));
    }

    #[test]
    fn pages_duplicate_id_keeps_later() {
        let sql = "INSERT INTO `page` VALUES (1,0,'Old');\nINSERT INTO `page` VALUES (1,0,'New');";
        let pages = build_pages(sql);
        assert_eq!(pages.get(&1).map(String::as_str), Some("New"));
    }

    #[test]
    fn pages_skip_malformed_tuples() {
        // non-integer id, and a tuple with too few fields
        let sql = "INSERT INTO `page` VALUES (x,0,'Bad'),(1,0),(2,0,'Good');";
        let pages = build_pages(sql);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.get(&2).map(String::as_str), Some("Good"));
    }

    #[test]
    fn pages_title_with_quoted_comma() {
        let sql = "INSERT INTO `page` VALUES (1,0,'Mining, Smithing');";
        let pages = build_pages(sql);
        assert_eq!(pages.get(&1).map(String::as_str), Some("Mining, Smithing"));
    }

    #[test]
    fn revisions_keep_maximum() {
        let sql = "INSERT INTO `revision` VALUES (1,100),(2,100),(1,200);";
        let revisions = build_revisions(sql);
        assert_eq!(revisions.get(&100), Some(&2));
        assert_eq!(revisions.get(&200), Some(&1));
    }

    #[test]
    fn revisions_maximum_across_statements() {
        let sql = "INSERT INTO `revision` VALUES (5,100);\nINSERT INTO `revision` VALUES (3,100);";
        let revisions = build_revisions(sql);
        assert_eq!(revisions.get(&100), Some(&5));
    }

    #[test]
    fn revisions_skip_non_integer_ids() {
        let sql = "INSERT INTO `revision` VALUES (a,100),(2,b),(3,100);";
        let revisions = build_revisions(sql);
        assert_eq!(revisions.len(), 1);
        assert_eq!(revisions.get(&100), Some(&3));
    }

    #[test]
    fn texts_decode_hex_content() {
        let sql = "INSERT INTO `text` VALUES (9,0x4775696465,'utf-8');";
        let texts = build_texts(sql);
        assert_eq!(texts.get(&9).map(String::as_str), Some("Guide"));
    }

    #[test]
    fn texts_collapse_doubled_quotes() {
        let sql = "INSERT INTO `text` VALUES (1,'it''s fine','utf-8');";
        let texts = build_texts(sql);
        assert_eq!(texts.get(&1).map(String::as_str), Some("it's fine"));
    }

    #[test]
    fn texts_unescape_backslash_sequences() {
        let sql = r#"INSERT INTO `text` VALUES (1,'a \"quoted\" word','utf-8');"#;
        let texts = build_texts(sql);
        assert_eq!(
            texts.get(&1).map(String::as_str),
            Some(r#"a "quoted" word"#)
        );
    }

    #[test]
    fn texts_keep_external_storage_markers_raw() {
        let sql = "INSERT INTO `text` VALUES (1,'gzip:DB://cluster1/42','external');";
        let texts = build_texts(sql);
        assert_eq!(
            texts.get(&1).map(String::as_str),
            Some("gzip:DB://cluster1/42")
        );
    }

    #[test]
    fn texts_invalid_hex_stored_raw() {
        let sql = "INSERT INTO `text` VALUES (1,0xZZZZ,'utf-8');";
        let texts = build_texts(sql);
        assert_eq!(texts.get(&1).map(String::as_str), Some("0xZZZZ"));
    }

    #[test]
    fn unrelated_tables_ignored() {
        let sql = "INSERT INTO `pagelinks` VALUES (1,0,'Guide');";
        assert!(build_pages(sql).is_empty());
        assert!(build_revisions(sql).is_empty());
        assert!(build_texts(sql).is_empty());
    }
}
