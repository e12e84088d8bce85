use crate::fetcher::Fetcher;
use crate::sources::candidate_from;
use crate::traits::JobSource;
use crate::types::{FetchConfig, RawJob, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{info, warn};

const PRODUCTION_HUB_URL: &str = "https://www.productionhub.com/jobs";
const ITEM_CAP: usize = 20;

/// ProductionHUB job board. Plain server-rendered HTML, fetched once and
/// parsed with CSS selectors.
pub struct ProductionHubSource {
    fetcher: Fetcher,
}

impl ProductionHubSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }
}

#[async_trait]
impl JobSource for ProductionHubSource {
    fn source_name(&self) -> &str {
        "ProductionHUB"
    }

    fn item_cap(&self) -> usize {
        ITEM_CAP
    }

    async fn fetch(&self) -> Result<Vec<RawJob>> {
        info!("Scraping ProductionHUB: {}", PRODUCTION_HUB_URL);
        let body = self.fetcher.fetch_page(PRODUCTION_HUB_URL).await?;
        Ok(extract_candidates(&body, self.item_cap()))
    }
}

fn extract_candidates(body: &str, cap: usize) -> Vec<RawJob> {
    let document = Html::parse_document(body);

    let listing = match Selector::parse("div.job-listing") {
        Ok(sel) => sel,
        Err(e) => {
            warn!("Bad job-listing selector: {}", e);
            return Vec::new();
        }
    };

    document
        .select(&listing)
        .take(cap)
        .map(|element| {
            candidate_from(
                &element,
                "h3.job-title",
                "div.job-description",
                "span.location",
            )
        })
        .collect()
}
