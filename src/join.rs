use crate::models::WikiRecord;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Joins page -> latest revision -> text into output records.
///
/// MediaWiki stores a revision's text under a `text` row whose id equals
/// the revision id; that schema convention is the join key here, not
/// something re-derived from the dump. Pages without a revision, revisions
/// without a text row, and pages whose content trims to nothing are all
/// dropped without comment -- sparse dumps make each of these routine.
///
/// Records come back sorted by title so repeated runs produce identical
/// output files.
pub fn join_records(
    pages: &FxHashMap<u32, String>,
    revisions: &FxHashMap<u32, u32>,
    texts: &FxHashMap<u32, String>,
    base_url: &str,
) -> Vec<WikiRecord> {
    let mut records = Vec::new();

    for (page_id, title) in pages {
        let rev_id = match revisions.get(page_id) {
            Some(id) => id,
            None => {
                debug!(page_id, title = title.as_str(), "No revision for page");
                continue;
            }
        };
        let content = match texts.get(rev_id) {
            Some(c) => c.trim(),
            None => {
                debug!(page_id, rev_id, "No text for revision");
                continue;
            }
        };
        if content.is_empty() {
            continue;
        }
        records.push(WikiRecord {
            title: title.clone(),
            content: content.to_string(),
            url: page_url(base_url, title),
        });
    }

    records.sort_by(|a, b| a.title.cmp(&b.title));
    info!(matched = records.len(), "Matched pages with content");
    records
}

/// Derives the canonical page URL: base URL plus the title with spaces
/// replaced by underscores.
pub fn page_url(base_url: &str, title: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        title.replace(' ', "_")
    )
}
