use anyhow::Result;
use chrono::Utc;
use film_jobs_aggregator::{
    write_snapshot, JobRecord, Snapshot, SyntheticGenerator, Vocabularies,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "film_industry_data_{}_{}.json",
        tag,
        std::process::id()
    ))
}

fn sample_snapshot(seed: u64, profile_count: usize) -> (Snapshot, Arc<Vocabularies>) {
    let vocab = Arc::new(Vocabularies::film_industry());
    let generator = SyntheticGenerator::new(vocab.clone());
    let mut rng = StdRng::seed_from_u64(seed);

    let jobs = generator.generate_jobs(&mut rng);
    let professionals = generator.generate_profiles(profile_count, &mut rng);
    let snapshot = Snapshot::capture(jobs, professionals, &vocab);
    (snapshot, vocab)
}

#[test]
fn snapshot_round_trips_with_identical_content_and_order() -> Result<()> {
    let before = Utc::now();
    let (snapshot, vocab) = sample_snapshot(21, 10);
    let path = temp_path("round_trip");

    write_snapshot(&snapshot, &path)?;
    let parsed: Snapshot = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let _ = fs::remove_file(&path);

    assert_eq!(parsed.jobs, snapshot.jobs);
    assert_eq!(parsed.professionals, snapshot.professionals);
    assert_eq!(parsed.locations, vocab.locations);
    assert_eq!(parsed.categories, vocab.categories);
    assert_eq!(parsed.skills, vocab.skills);

    // Region order is part of the contract.
    let regions: Vec<&String> = parsed.locations.keys().collect();
    let expected: Vec<&String> = vocab.locations.keys().collect();
    assert_eq!(regions, expected);

    assert!(parsed.scraped_at >= before);
    assert!(parsed.scraped_at <= Utc::now());

    Ok(())
}

#[test]
fn snapshot_uses_the_agreed_field_names() -> Result<()> {
    let (snapshot, _) = sample_snapshot(3, 2);

    let value = serde_json::to_value(&snapshot)?;
    let object = value.as_object().expect("top-level object");

    for key in ["jobs", "professionals", "locations", "categories", "skills", "scraped_at"] {
        assert!(object.contains_key(key), "missing top-level key {key}");
    }

    let professional = value["professionals"][0]
        .as_object()
        .expect("professional object");
    for key in ["firstName", "lastName", "role", "bio", "skills", "experience", "location"] {
        assert!(professional.contains_key(key), "missing profile key {key}");
    }

    let job = value["jobs"][0].as_object().expect("job object");
    for key in ["title", "description", "location", "source"] {
        assert!(job.contains_key(key), "missing job key {key}");
    }

    assert!(
        value["scraped_at"].as_str().is_some(),
        "scraped_at must serialize as an ISO-8601 string"
    );

    Ok(())
}

#[test]
fn export_overwrites_prior_snapshots() -> Result<()> {
    let path = temp_path("overwrite");

    let (mut first, _) = sample_snapshot(1, 5);
    first.jobs.push(JobRecord {
        title: "Marker".to_string(),
        description: "Only present in the first snapshot.".to_string(),
        location: "Remote".to_string(),
        source: "Generated".to_string(),
    });
    write_snapshot(&first, &path)?;

    let (second, _) = sample_snapshot(2, 3);
    write_snapshot(&second, &path)?;

    let parsed: Snapshot = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let _ = fs::remove_file(&path);

    assert_eq!(parsed.jobs, second.jobs);
    assert_eq!(parsed.professionals.len(), 3);
    assert!(parsed.jobs.iter().all(|j| j.title != "Marker"));

    Ok(())
}
