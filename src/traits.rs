use crate::types::{RawJob, Result};
use async_trait::async_trait;

/// Trait for pulling job candidates from one external source (static HTML
/// page, browser-rendered page, etc.).
///
/// Implementations must swallow per-candidate extraction failures (skip the
/// candidate, keep going) and return at most `item_cap()` candidates. An
/// `Err` from `fetch` means the source as a whole was unusable this run; the
/// aggregator treats it as an empty contribution and moves on.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Human-readable name stamped on this source's records as provenance.
    fn source_name(&self) -> &str;

    /// Hard cap on the number of candidates returned per run.
    fn item_cap(&self) -> usize;

    /// Fetch and extract raw job candidates from the source.
    async fn fetch(&self) -> Result<Vec<RawJob>>;
}
