use crate::models::WikiRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Writes the record sequence as pretty-printed JSON. serde_json emits raw
/// UTF-8, so non-ASCII titles and content survive unescaped.
pub fn write_records(path: &Path, records: &[WikiRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create record file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("Failed to write records to: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush record file: {}", path.display()))?;
    Ok(())
}

/// Reads a record file written by [`write_records`]. Downstream consumers
/// key these by lowercased title; that is their concern, not ours.
pub fn read_records(path: &Path) -> Result<Vec<WikiRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open record file: {}", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse record file: {}", path.display()))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<WikiRecord> {
        vec![
            WikiRecord {
                title: "Guide".to_string(),
                content: "Getting started.".to_string(),
                url: "https://wiki.example.org/wiki/Guide".to_string(),
            },
            WikiRecord {
                title: "Café".to_string(),
                content: "Non-ASCII content: héllo".to_string(),
                url: "https://wiki.example.org/wiki/Café".to_string(),
            },
        ]
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        let records = sample();

        write_records(&path, &records).unwrap();
        let loaded = read_records(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn output_preserves_non_ascii() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        write_records(&path, &sample()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("héllo"));
        assert!(!raw.contains("\\u00e9"));
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_records(&dir.path().join("absent.json")).is_err());
    }
}
