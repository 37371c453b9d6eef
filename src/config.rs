/// Namespace code identifying main content pages in the `page` table
pub const MAIN_NAMESPACE: &str = "0";

/// Progress update interval (tick every N tuples)
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Default base URL for derived page links
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki";
