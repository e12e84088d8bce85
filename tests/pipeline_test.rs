use async_trait::async_trait;
use film_jobs_aggregator::generator::SyntheticGenerator;
use film_jobs_aggregator::types::Result as AggResult;
use film_jobs_aggregator::{
    AggregatorError, FetchConfig, Fetcher, JobAggregator, JobSource, RawJob, Vocabularies,
    DESCRIPTION_MAX_LEN, REMOTE_LOCATION, SYNTHETIC_SOURCE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Source that returns a fixed candidate list.
struct StaticSource {
    name: &'static str,
    cap: usize,
    candidates: Vec<RawJob>,
}

#[async_trait]
impl JobSource for StaticSource {
    fn source_name(&self) -> &str {
        self.name
    }

    fn item_cap(&self) -> usize {
        self.cap
    }

    async fn fetch(&self) -> AggResult<Vec<RawJob>> {
        Ok(self.candidates.clone())
    }
}

/// Source whose retrieval step always fails.
struct FailingSource;

#[async_trait]
impl JobSource for FailingSource {
    fn source_name(&self) -> &str {
        "Unreachable Board"
    }

    fn item_cap(&self) -> usize {
        20
    }

    async fn fetch(&self) -> AggResult<Vec<RawJob>> {
        Err(AggregatorError::General("connection refused".to_string()))
    }
}

fn raw(title: &str, description: &str, location: Option<&str>) -> RawJob {
    RawJob {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        location: location.map(String::from),
    }
}

fn aggregator_with(sources: Vec<Box<dyn JobSource>>) -> JobAggregator {
    let vocab = Arc::new(Vocabularies::film_industry());
    let mut aggregator = JobAggregator::new(vocab);
    for source in sources {
        aggregator.register(source);
    }
    aggregator
}

#[tokio::test]
async fn all_empty_sources_fall_back_to_synthetic_dataset() {
    let _ = tracing_subscriber::fmt().try_init();

    let aggregator = aggregator_with(vec![
        Box::new(StaticSource {
            name: "Board A",
            cap: 20,
            candidates: Vec::new(),
        }),
        Box::new(StaticSource {
            name: "Board B",
            cap: 10,
            candidates: Vec::new(),
        }),
    ]);

    let mut rng = StdRng::seed_from_u64(7);
    let jobs = aggregator.collect_jobs(&mut rng).await;

    assert_eq!(jobs.len(), SyntheticGenerator::job_count());
    assert!(jobs.iter().all(|j| j.source == SYNTHETIC_SOURCE));

    // The fallback is exactly the generator's job output for the same
    // random state.
    let vocab = Arc::new(Vocabularies::film_industry());
    let expected =
        SyntheticGenerator::new(vocab).generate_jobs(&mut StdRng::seed_from_u64(7));
    assert_eq!(jobs, expected);
}

#[tokio::test]
async fn fallback_is_all_or_nothing() {
    let aggregator = aggregator_with(vec![
        Box::new(StaticSource {
            name: "Board A",
            cap: 20,
            candidates: vec![raw("Editor", "Cut a feature film.", Some("London"))],
        }),
        Box::new(StaticSource {
            name: "Board B",
            cap: 10,
            candidates: Vec::new(),
        }),
    ]);

    let mut rng = StdRng::seed_from_u64(0);
    let jobs = aggregator.collect_jobs(&mut rng).await;

    // One live record is enough: no synthetic filler gets blended in.
    assert_eq!(jobs.len(), 1);
    assert!(jobs.iter().all(|j| j.source != SYNTHETIC_SOURCE));
}

#[tokio::test]
async fn failing_source_does_not_abort_the_pass() {
    let aggregator = aggregator_with(vec![
        Box::new(FailingSource),
        Box::new(StaticSource {
            name: "Board B",
            cap: 10,
            candidates: vec![
                raw("Gaffer", "Light a drama series.", None),
                raw("Grip", "Rig a studio stage.", Some("Berlin")),
            ],
        }),
    ]);

    let mut rng = StdRng::seed_from_u64(0);
    let jobs = aggregator.collect_jobs(&mut rng).await;

    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|j| j.source == "Board B"));
}

#[tokio::test]
async fn aggregation_preserves_source_and_discovery_order() {
    let aggregator = aggregator_with(vec![
        Box::new(StaticSource {
            name: "Board A",
            cap: 20,
            candidates: vec![
                raw("A1", "First listing on board A.", None),
                raw("A2", "Second listing on board A.", None),
            ],
        }),
        Box::new(StaticSource {
            name: "Board B",
            cap: 10,
            candidates: vec![raw("B1", "First listing on board B.", None)],
        }),
    ]);

    let mut rng = StdRng::seed_from_u64(0);
    let jobs = aggregator.collect_jobs(&mut rng).await;

    let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["A1", "A2", "B1"]);
}

#[tokio::test]
async fn normalization_repairs_and_drops_candidates() {
    let long_description = "x".repeat(DESCRIPTION_MAX_LEN + 200);
    let aggregator = aggregator_with(vec![Box::new(StaticSource {
        name: "Board A",
        cap: 20,
        candidates: vec![
            // Missing description: dropped, not repaired.
            RawJob {
                title: Some("Producer".to_string()),
                description: None,
                location: Some("Paris".to_string()),
            },
            // Whitespace-only title: dropped.
            raw("   ", "Looks fine otherwise.", Some("Rome")),
            // Missing location defaults to the sentinel.
            raw("Colorist", &long_description, None),
        ],
    })]);

    let mut rng = StdRng::seed_from_u64(0);
    let jobs = aggregator.collect_jobs(&mut rng).await;

    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.title, "Colorist");
    assert_eq!(job.location, REMOTE_LOCATION);
    assert_eq!(job.description.chars().count(), DESCRIPTION_MAX_LEN);
    assert_eq!(job.source, "Board A");
}

#[tokio::test]
async fn per_source_item_cap_is_enforced() {
    let candidates: Vec<RawJob> = (0..30)
        .map(|i| raw(&format!("Job {i}"), "A real description.", None))
        .collect();

    let aggregator = aggregator_with(vec![Box::new(StaticSource {
        name: "Board A",
        cap: 10,
        candidates,
    })]);

    let mut rng = StdRng::seed_from_u64(0);
    let jobs = aggregator.collect_jobs(&mut rng).await;

    assert_eq!(jobs.len(), 10);
    assert_eq!(jobs[0].title, "Job 0");
    assert_eq!(jobs[9].title, "Job 9");
}

#[tokio::test]
async fn fetcher_rejects_malformed_endpoint_urls() {
    let fetcher = Fetcher::new(&FetchConfig::default()).expect("build fetcher");

    // Fails at URL validation, before any request goes out.
    let err = fetcher
        .fetch_page("not a url at all")
        .await
        .expect_err("malformed URL must not be fetched");

    assert!(matches!(err, AggregatorError::InvalidUrl(_)));
}

#[tokio::test]
async fn every_emitted_record_satisfies_the_invariants() {
    let aggregator = aggregator_with(vec![
        Box::new(FailingSource),
        Box::new(StaticSource {
            name: "Board B",
            cap: 10,
            candidates: vec![raw("Editor", "Cut a feature film.", None)],
        }),
    ]);

    let mut rng = StdRng::seed_from_u64(3);
    let jobs = aggregator.collect_jobs(&mut rng).await;
    let registered = aggregator.source_names();

    for job in &jobs {
        assert!(!job.title.is_empty());
        assert!(!job.description.is_empty());
        assert!(job.description.chars().count() <= DESCRIPTION_MAX_LEN);
        assert!(
            registered.contains(&job.source.as_str()) || job.source == SYNTHETIC_SOURCE,
            "unexpected provenance: {}",
            job.source
        );
    }
}
