use crate::join::join_records;
use crate::records::write_records;
use crate::stats::DumpStats;
use crate::tables::{build_pages, build_revisions, build_texts};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Runs the full extraction: one read of the dump, three table passes, the
/// join, and (unless `dry_run`) the record file write.
///
/// Reading the dump is the only fatal error path. Everything after operates
/// on in-memory text and absorbs malformed rows tuple-by-tuple, so a bad
/// row never discards a table.
pub fn run_extraction(
    input: &Path,
    output: &Path,
    base_url: &str,
    limit: Option<usize>,
    dry_run: bool,
) -> Result<DumpStats> {
    info!(path = %input.display(), "Reading SQL dump");
    let sql = fs::read_to_string(input)
        .with_context(|| format!("Failed to read SQL dump: {}", input.display()))?;

    let pages = build_pages(&sql);
    let revisions = build_revisions(&sql);
    let texts = build_texts(&sql);

    let mut records = join_records(&pages, &revisions, &texts, base_url);
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let stats = DumpStats {
        pages: pages.len() as u64,
        revisions: revisions.len() as u64,
        texts: texts.len() as u64,
        matched: records.len() as u64,
    };

    if dry_run {
        info!("Dry run, skipping record write");
    } else {
        write_records(output, &records)?;
        info!(records = records.len(), path = %output.display(), "Records written");
    }

    Ok(stats)
}
