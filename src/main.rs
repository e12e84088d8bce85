use anyhow::Result;
use film_jobs_aggregator::{
    write_snapshot, FetchConfig, JobAggregator, Snapshot, SyntheticGenerator, Vocabularies,
    DEFAULT_PROFILE_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

const OUTPUT_FILE: &str = "film_industry_data.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting film industry data scraping");

    let vocab = Arc::new(Vocabularies::film_industry());
    let fetch_config = FetchConfig::default();
    let aggregator = JobAggregator::with_default_sources(vocab.clone(), &fetch_config)?;

    let mut rng = StdRng::from_entropy();

    info!("Scraping film industry jobs");
    let jobs = aggregator.collect_jobs(&mut rng).await;
    info!("Collected {} jobs", jobs.len());

    info!("Generating film professional profiles");
    let generator = SyntheticGenerator::new(vocab.clone());
    let professionals = generator.generate_profiles(DEFAULT_PROFILE_COUNT, &mut rng);
    info!("Generated {} professional profiles", professionals.len());

    let snapshot = Snapshot::capture(jobs, professionals, &vocab);
    write_snapshot(&snapshot, Path::new(OUTPUT_FILE))?;

    print_summary(&snapshot);

    Ok(())
}

fn print_summary(snapshot: &Snapshot) {
    println!("\n=== SAMPLE JOBS ===");
    for (i, job) in snapshot.jobs.iter().take(3).enumerate() {
        println!("\nJob {}:", i + 1);
        println!("Title: {}", job.title);
        println!("Location: {}", job.location);
        println!("Description: {}...", preview(&job.description, 100));
        println!("Source: {}", job.source);
    }

    println!("\n=== SAMPLE PROFESSIONALS ===");
    for (i, prof) in snapshot.professionals.iter().take(3).enumerate() {
        println!("\nProfessional {}:", i + 1);
        println!("Name: {} {}", prof.first_name, prof.last_name);
        println!("Role: {}", prof.role);
        println!("Location: {}", prof.location);
        println!("Bio: {}...", preview(&prof.bio, 100));
        let skills: Vec<&str> = prof.skills.iter().take(3).map(String::as_str).collect();
        println!("Skills: {}...", skills.join(", "));
        println!("Experience: {}", prof.experience);
    }

    println!("\nTotal jobs scraped: {}", snapshot.jobs.len());
    println!("Total professionals generated: {}", snapshot.professionals.len());
    println!("Data saved to {}", OUTPUT_FILE);
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
