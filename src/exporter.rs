use crate::types::{JobRecord, ProfessionalProfile, Result};
use crate::vocab::Vocabularies;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One exported dataset: the aggregated jobs, the generated profiles, the
/// reference vocabularies they were sampled from, and the capture instant.
/// Field names and nesting are the compatibility contract for consumers of
/// the snapshot file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub jobs: Vec<JobRecord>,
    pub professionals: Vec<ProfessionalProfile>,
    pub locations: IndexMap<String, Vec<String>>,
    pub categories: Vec<String>,
    pub skills: Vec<String>,
    pub scraped_at: DateTime<Utc>,
}

impl Snapshot {
    /// Bundle the run's output with the vocabularies, stamped with the
    /// current instant. Input sequences are carried over untouched.
    pub fn capture(
        jobs: Vec<JobRecord>,
        professionals: Vec<ProfessionalProfile>,
        vocab: &Vocabularies,
    ) -> Self {
        Self {
            jobs,
            professionals,
            locations: vocab.locations.clone(),
            categories: vocab.categories.clone(),
            skills: vocab.skills.clone(),
            scraped_at: Utc::now(),
        }
    }
}

/// Write the snapshot as pretty-printed JSON, overwriting any prior snapshot
/// at the same destination.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    info!("Data saved to {}", path.display());
    Ok(())
}
