use crate::fetcher::Fetcher;
use crate::sources::candidate_from;
use crate::traits::JobSource;
use crate::types::{FetchConfig, RawJob, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{info, warn};

const MANDY_URL: &str = "https://www.mandy.com/jobs";
const ITEM_CAP: usize = 10;

/// Mandy Network job search. Server-rendered HTML like ProductionHUB, with
/// its own card markup.
pub struct MandyNetworkSource {
    fetcher: Fetcher,
}

impl MandyNetworkSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }
}

#[async_trait]
impl JobSource for MandyNetworkSource {
    fn source_name(&self) -> &str {
        "Mandy Network"
    }

    fn item_cap(&self) -> usize {
        ITEM_CAP
    }

    async fn fetch(&self) -> Result<Vec<RawJob>> {
        info!("Scraping Mandy Network: {}", MANDY_URL);
        let body = self.fetcher.fetch_page(MANDY_URL).await?;
        Ok(extract_candidates(&body, self.item_cap()))
    }
}

fn extract_candidates(body: &str, cap: usize) -> Vec<RawJob> {
    let document = Html::parse_document(body);

    let card = match Selector::parse("div.job-card") {
        Ok(sel) => sel,
        Err(e) => {
            warn!("Bad job-card selector: {}", e);
            return Vec::new();
        }
    };

    document
        .select(&card)
        .take(cap)
        .map(|element| {
            candidate_from(
                &element,
                "h2.job-title",
                "div.job-summary",
                "span.location",
            )
        })
        .collect()
}
