use std::time::Duration;

use url::Url;

/// Base URL of the json-server the site is developed against
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333/";

/// Name appended to every page title
pub const DEFAULT_SITE_NAME: &str = "Podcastr";

/// Number of recent episodes considered for pre-rendering
pub const DEFAULT_RECENT_LIMIT: usize = 12;

/// How long a generated page stays fresh (24 hours)
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60 * 60 * 24);

/// Site-wide settings for page generation
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the episodes API
    pub api_base_url: Url,
    /// Site name used in `<title>`
    pub site_name: String,
    /// Maximum number of recent episodes queried during path enumeration
    pub recent_limit: usize,
    /// Interval after which a generated page should be regenerated
    pub revalidate: Duration,
}

impl SiteConfig {
    /// Default configuration pointed at a different API
    pub fn with_api_base_url(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            ..Default::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("valid default API URL"),
            site_name: DEFAULT_SITE_NAME.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            revalidate: DEFAULT_REVALIDATE,
        }
    }
}
