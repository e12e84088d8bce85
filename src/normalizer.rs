use crate::types::{JobRecord, RawJob, DESCRIPTION_MAX_LEN, REMOTE_LOCATION};
use tracing::debug;

/// Convert one raw candidate into the canonical record shape, stamping the
/// adapter's name as provenance. Returns `None` when the candidate has no
/// usable title or description (no title / no content is not a postable job);
/// everything else is repaired: missing location defaults to "Remote" and
/// over-long descriptions are truncated to the shared cap.
pub fn normalize(raw: RawJob, source: &str) -> Option<JobRecord> {
    let title = raw.title.as_deref().map(str::trim).unwrap_or("");
    let description = raw.description.as_deref().map(str::trim).unwrap_or("");

    if title.is_empty() || description.is_empty() {
        debug!("Dropping candidate from {} with missing title or description", source);
        return None;
    }

    let location = raw
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(REMOTE_LOCATION);

    Some(JobRecord {
        title: title.to_string(),
        description: truncate_description(description),
        location: location.to_string(),
        source: source.to_string(),
    })
}

/// Truncate to `DESCRIPTION_MAX_LEN` characters, keeping UTF-8 boundaries
/// intact.
pub fn truncate_description(description: &str) -> String {
    description.chars().take(DESCRIPTION_MAX_LEN).collect()
}
