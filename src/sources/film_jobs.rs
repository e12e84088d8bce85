use crate::sources::candidate_from;
use crate::traits::JobSource;
use crate::types::{RawJob, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use thirtyfour::prelude::*;
use tracing::{info, warn};

const FILM_JOBS_URL: &str = "https://www.filmjobs.com";
const WEBDRIVER_URL: &str = "http://localhost:9515";
const ITEM_CAP: usize = 15;

/// Settle delay after page load, before extraction. FilmJobs.com renders its
/// listings client-side.
const RENDER_SETTLE: Duration = Duration::from_secs(3);

/// FilmJobs.com, scraped through a headless Chrome session driven over
/// chromedriver. The session is quit on every exit path; an unreachable
/// WebDriver is an ordinary adapter-level failure.
pub struct FilmJobsSource {
    webdriver_url: String,
}

impl FilmJobsSource {
    pub fn new() -> Self {
        Self {
            webdriver_url: WEBDRIVER_URL.to_string(),
        }
    }
}

impl Default for FilmJobsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobSource for FilmJobsSource {
    fn source_name(&self) -> &str {
        "FilmJobs.com"
    }

    fn item_cap(&self) -> usize {
        ITEM_CAP
    }

    async fn fetch(&self) -> Result<Vec<RawJob>> {
        info!("Scraping FilmJobs.com via WebDriver at {}", self.webdriver_url);

        let mut caps = DesiredCapabilities::chrome();
        caps.add_chrome_option(
            "args",
            vec![
                "--headless",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                "--user-agent=Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            ],
        )?;

        let driver = WebDriver::new(&self.webdriver_url, caps).await?;

        // The session must be released whether extraction succeeds or not.
        let result = extract_with_driver(&driver, self.item_cap()).await;

        if let Err(e) = driver.quit().await {
            warn!("Failed to quit browser session: {}", e);
        }

        result
    }
}

async fn extract_with_driver(driver: &WebDriver, cap: usize) -> Result<Vec<RawJob>> {
    driver.goto(FILM_JOBS_URL).await?;

    driver.query(By::Tag("body")).first().await?;
    tokio::time::sleep(RENDER_SETTLE).await;

    let page_source = driver.source().await?;
    Ok(extract_candidates(&page_source, cap))
}

fn extract_candidates(body: &str, cap: usize) -> Vec<RawJob> {
    let document = Html::parse_document(body);

    let item = match Selector::parse(".job-item") {
        Ok(sel) => sel,
        Err(e) => {
            warn!("Bad job-item selector: {}", e);
            return Vec::new();
        }
    };

    document
        .select(&item)
        .take(cap)
        .map(|element| candidate_from(&element, ".job-title", ".job-description", ".job-location"))
        .collect()
}
