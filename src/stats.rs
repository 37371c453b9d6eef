/// Coarse counts reported after the extraction phases.
///
/// The pipeline is single-threaded and synchronous, so plain counters are
/// enough; nothing here is shared across threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DumpStats {
    /// Main-namespace pages found in the `page` table
    pub pages: u64,
    /// Pages with at least one revision in the `revision` table
    pub revisions: u64,
    /// Rows decoded from the `text` table
    pub texts: u64,
    /// Records that survived the three-way join
    pub matched: u64,
}
