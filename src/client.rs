use std::time::Duration;

use scraper::Html;
use tracing::{debug, instrument};

use crate::error::{Result, VlrError};
use crate::extract;
use crate::model::MapRecord;

/// User agent presented to vlr.gg, mirroring a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The main entry point for pulling per-map results from vlr.gg.
///
/// `VlrClient` wraps a [`reqwest::Client`] and pairs the fetch
/// collaborator with the extraction core: pages go in, validated
/// [`MapRecord`]s come out.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vlr_map_scraper::Result<()> {
/// use vlr_map_scraper::VlrClient;
///
/// let client = VlrClient::new();
/// let records = client
///     .get_match_maps("https://www.vlr.gg/510156/paper-rex-vs-gen-g-esports-world-cup-2025-cf")
///     .await?;
/// for record in &records {
///     println!(
///         "Map {}: {} {}-{} ({})",
///         record.map_number,
///         record.map_name,
///         record.team_a_score,
///         record.team_b_score,
///         record.winner_name()
///     );
/// }
/// # Ok(())
/// # }
/// ```
pub struct VlrClient {
    http: reqwest::Client,
}

impl VlrClient {
    /// Create a client with the default user agent and request timeout.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http }
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Fetch a match page and extract every validated map record from it.
    #[instrument(skip(self))]
    pub async fn get_match_maps(&self, url: &str) -> Result<Vec<MapRecord>> {
        let document = get_document(&self.http, url).await?;
        Ok(extract::extract_match(&document, url))
    }

    /// Fetch an event page and collect the match-page URLs it links to.
    #[instrument(skip(self))]
    pub async fn get_event_match_urls(&self, event_url: &str) -> Result<Vec<String>> {
        let document = get_document(&self.http, event_url).await?;
        let urls = extract::discover_match_urls(&document);
        debug!(count = urls.len(), "discovered match urls");
        Ok(urls)
    }
}

impl Default for VlrClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a URL and parse the response body as an HTML document.
async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| VlrError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(VlrError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| VlrError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}
