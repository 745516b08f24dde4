//! SimilarWeb traffic API client.
//!
//! Low-level HTTP client that builds the per-operation request URL,
//! performs a single GET, and returns the decoded JSON body untouched.

use std::env;

use reqwest::Client;
use url::Url;

use crate::error::{Result, SimilarwebError};
use crate::response::SitePayload;

const DEFAULT_BASE_URL: &str = "http://api.similarweb.com/Site/{url}/v1/";
const USER_AGENT: &str = concat!("similarweb/", env!("CARGO_PKG_VERSION"));

/// Client for the SimilarWeb site traffic API.
///
/// Holds the user key and a base URL template with a single `{url}` slot
/// for the site domain. Each operation substitutes the domain into the
/// template, appends its fixed query string, performs one GET, and returns
/// the decoded JSON object verbatim, success payloads and the API's
/// `{"Error": <message>}` payloads alike. Callers distinguish the two by
/// probing for the `Error` key (see [`crate::error_message`]).
///
/// The URL used by the most recent request is retained in [`full_url`]
/// and overwritten on every call, so the request operations take
/// `&mut self`; a client instance is not meant to be shared across
/// concurrent callers.
///
/// [`full_url`]: TrafficClient::full_url
///
/// # Example
///
/// ```no_run
/// use similarweb::TrafficClient;
///
/// # async fn example() -> similarweb::Result<()> {
/// // Create from environment variables
/// let mut client = TrafficClient::from_env()?;
///
/// // Or configure manually
/// let mut client = TrafficClient::new("your-user-key")?;
///
/// let stats = client.traffic("example.com").await?;
/// # Ok(())
/// # }
/// ```
pub struct TrafficClient {
    http: Client,
    user_key: String,
    base_url: String,
    full_url: String,
}

impl std::fmt::Debug for TrafficClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficClient")
            .field("base_url", &self.base_url)
            .field("full_url", &self.full_url)
            .finish_non_exhaustive()
    }
}

impl TrafficClient {
    /// Create a client from environment variables.
    ///
    /// Uses `SIMILARWEB_USER_KEY` for authentication and optionally
    /// `SIMILARWEB_API_URL` for the base URL template (defaults to
    /// `http://api.similarweb.com/Site/{url}/v1/`).
    ///
    /// # Errors
    ///
    /// Returns an error if `SIMILARWEB_USER_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let user_key = env::var("SIMILARWEB_USER_KEY").map_err(|_| {
            SimilarwebError::ConfigMissing(
                "SIMILARWEB_USER_KEY environment variable not set".to_string(),
            )
        })?;

        let base_url =
            env::var("SIMILARWEB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(&user_key, &base_url)
    }

    /// Create a new client with the provided user key and the default
    /// base URL template.
    ///
    /// The key is not validated locally; an invalid key surfaces as a
    /// `{"Error": "user_key_invalid"}` payload from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(user_key: &str) -> Result<Self> {
        Self::with_base_url(user_key, DEFAULT_BASE_URL)
    }

    /// Create a new client with an explicit base URL template.
    ///
    /// The template must contain a single `{url}` placeholder for the site
    /// domain, e.g. `http://api.similarweb.com/Site/{url}/v1/`. Useful for
    /// pointing the client at a local test server.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_base_url(user_key: &str, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(SimilarwebError::HttpError)?;

        Ok(Self {
            http,
            user_key: user_key.to_string(),
            base_url: base_url.to_string(),
            full_url: String::new(),
        })
    }

    /// Get the user key.
    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// Get the base URL template.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the URL used by the most recent request call.
    ///
    /// Empty until the first call; overwritten on every subsequent call.
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    /// Fetch visit counts for a site.
    ///
    /// `granularity` and the `MM-YYYY` date bounds are passed through
    /// unvalidated; out-of-range values come back as an `Error` payload
    /// from the API (e.g. `The value '14-2014' is not valid for Start.`).
    /// `main_domain_only` restricts counting to the primary domain,
    /// excluding subdomains.
    ///
    /// On success the returned object maps `YYYY-MM-DD` date strings to
    /// integer visit counts; see [`crate::visit_counts`] for a
    /// typed view.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON
    /// object.
    #[tracing::instrument(skip(self))]
    pub async fn visits(
        &mut self,
        domain: &str,
        granularity: &str,
        start: &str,
        end: &str,
        main_domain_only: bool,
    ) -> Result<SitePayload> {
        self.full_url = self.visits_url(domain, granularity, start, end, main_domain_only);
        self.request().await
    }

    /// Fetch traffic overview statistics for a site.
    ///
    /// On success the returned object carries `GlobalRank`, `CountryRank`,
    /// `TopCountryShares`, `TrafficReach`, `TrafficShares` and friends; see
    /// [`crate::TrafficStats`] for a typed view.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON
    /// object.
    #[tracing::instrument(skip(self))]
    pub async fn traffic(&mut self, domain: &str) -> Result<SitePayload> {
        self.full_url = self.traffic_url(domain);
        self.request().await
    }

    /// Substitute the domain into the base URL template.
    ///
    /// The domain is embedded as-is: no escaping, no scheme stripping.
    /// A value like `http://example.com` lands literally in the path and
    /// draws a `Malformed or Unknown URL` response from the API.
    fn site_url(&self, domain: &str) -> String {
        self.base_url.replace("{url}", domain)
    }

    /// Build the `visits` request URL. Query parameters are rendered in a
    /// fixed order: `gr`, `start`, `end`, `md`, `UserKey`.
    fn visits_url(
        &self,
        domain: &str,
        granularity: &str,
        start: &str,
        end: &str,
        main_domain_only: bool,
    ) -> String {
        // The API expects Python-style capitalized booleans for `md`.
        let md = if main_domain_only { "True" } else { "False" };
        format!(
            "{}visits?gr={granularity}&start={start}&end={end}&md={md}&UserKey={}",
            self.site_url(domain),
            self.user_key
        )
    }

    /// Build the `traffic` request URL.
    fn traffic_url(&self, domain: &str) -> String {
        format!("{}traffic?UserKey={}", self.site_url(domain), self.user_key)
    }

    /// Perform a GET against `full_url` and decode the body.
    ///
    /// The body is decoded regardless of HTTP status: the API models
    /// domain errors as ordinary JSON payloads, so no status translation
    /// happens here. Transport and decode failures propagate untouched.
    async fn request(&self) -> Result<SitePayload> {
        let url = Url::parse(&self.full_url)?;

        let body = self
            .http
            .get(url)
            .send()
            .await
            .map_err(SimilarwebError::HttpError)?
            .text()
            .await
            .map_err(SimilarwebError::HttpError)?;

        let payload: SitePayload = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
