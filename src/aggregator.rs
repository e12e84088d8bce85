use crate::generator::SyntheticGenerator;
use crate::normalizer::normalize;
use crate::sources::{FilmJobsSource, MandyNetworkSource, ProductionHubSource};
use crate::traits::JobSource;
use crate::types::{FetchConfig, JobRecord, Result};
use crate::vocab::Vocabularies;
use rand::Rng;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Orchestrates the registered job sources in a fixed order, concatenates
/// their normalized output, and applies the fallback policy: if every source
/// comes back empty, the whole result is replaced by the synthetic job
/// dataset. Fallback is all-or-nothing; partial live results are never padded
/// with synthetic filler.
pub struct JobAggregator {
    sources: Vec<Box<dyn JobSource>>,
    generator: SyntheticGenerator,
}

impl JobAggregator {
    pub fn new(vocab: Arc<Vocabularies>) -> Self {
        Self {
            sources: Vec::new(),
            generator: SyntheticGenerator::new(vocab),
        }
    }

    /// The three live sources, in their fixed aggregation order.
    pub fn with_default_sources(vocab: Arc<Vocabularies>, config: &FetchConfig) -> Result<Self> {
        let mut aggregator = Self::new(vocab);
        aggregator.register(Box::new(ProductionHubSource::new(config)?));
        aggregator.register(Box::new(FilmJobsSource::new()));
        aggregator.register(Box::new(MandyNetworkSource::new(config)?));
        Ok(aggregator)
    }

    pub fn register(&mut self, source: Box<dyn JobSource>) {
        self.sources.push(source);
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.source_name()).collect()
    }

    /// Run every source sequentially and concatenate the normalized results,
    /// preserving registration order and within-source discovery order. A
    /// failing source contributes nothing and never stops the pass.
    pub async fn collect_jobs<R: Rng>(&self, rng: &mut R) -> Vec<JobRecord> {
        let mut jobs = Vec::new();

        for source in &self.sources {
            let name = source.source_name();
            match source.fetch().await {
                Ok(candidates) => {
                    let found = candidates.len();
                    let normalized = candidates
                        .into_iter()
                        .take(source.item_cap())
                        .filter_map(|raw| normalize(raw, name));
                    let before = jobs.len();
                    jobs.extend(normalized);
                    info!(
                        "{}: {} candidates, {} kept after normalization",
                        name,
                        found,
                        jobs.len() - before
                    );
                }
                Err(e) => {
                    error!("Error scraping {}: {}", name, e);
                }
            }
        }

        if jobs.is_empty() {
            warn!("No live jobs collected, falling back to synthetic dataset");
            return self.generator.generate_jobs(rng);
        }

        info!("Aggregated {} jobs from live sources", jobs.len());
        jobs
    }
}
