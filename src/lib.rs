pub mod aggregator;
pub mod exporter;
pub mod fetcher;
pub mod generator;
pub mod normalizer;
pub mod sources;
pub mod traits;
pub mod types;
pub mod vocab;

pub use aggregator::JobAggregator;
pub use exporter::{write_snapshot, Snapshot};
pub use fetcher::Fetcher;
pub use generator::{SyntheticGenerator, DEFAULT_PROFILE_COUNT};
pub use traits::JobSource;
pub use types::*;
pub use vocab::Vocabularies;
