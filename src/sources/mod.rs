pub mod film_jobs;
pub mod mandy;
pub mod production_hub;

pub use film_jobs::FilmJobsSource;
pub use mandy::MandyNetworkSource;
pub use production_hub::ProductionHubSource;

use crate::types::RawJob;
use scraper::{ElementRef, Selector};

/// Joined text content of the first element matching `selector`, if any.
/// Invalid selectors and absent elements both read as "field missing" so one
/// bad candidate never aborts a whole source's extraction.
pub(crate) fn select_text(element: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let found = element.select(&selector).next()?;
    let text = found.text().collect::<Vec<_>>().join(" ").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub(crate) fn candidate_from(
    element: &ElementRef,
    title_sel: &str,
    description_sel: &str,
    location_sel: &str,
) -> RawJob {
    RawJob {
        title: select_text(element, title_sel),
        description: select_text(element, description_sel),
        location: select_text(element, location_sel),
    }
}
