use serde::{Deserialize, Serialize};

/// Maximum length (in characters) of a job description after normalization.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Location stamped on records whose source omits one.
pub const REMOTE_LOCATION: &str = "Remote";

/// Provenance marker for synthetically generated records.
pub const SYNTHETIC_SOURCE: &str = "Generated";

/// A normalized job listing. Every emitted record has a non-empty title and
/// description, and `source` always names the adapter (or synthetic marker)
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRecord {
    pub title: String,
    pub description: String,
    pub location: String,
    pub source: String,
}

/// Raw candidate extracted from one source, before normalization. Fields are
/// optional because live markup routinely omits or garbles them.
#[derive(Debug, Clone, Default)]
pub struct RawJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// A synthetic film-industry professional profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalProfile {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            timeout_seconds: 30,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
