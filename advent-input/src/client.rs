//! Authenticated HTTP client for puzzle inputs

use crate::error::InputError;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Blocking HTTP client that downloads personal puzzle inputs
///
/// # Example
///
/// ```no_run
/// use advent_input::InputClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = InputClient::new()?;
/// let input = client.get_input(2022, 12, "your_session_cookie")?;
/// println!("Input: {} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct InputClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl InputClient {
    /// Create a new client with rustls-tls configuration and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `InputError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, InputError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use advent_input::InputClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = InputClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> InputClientBuilder {
        InputClientBuilder::new()
    }

    /// The base URL requests are resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, InputError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut sensitive_header = header_value
            .map_err(|_| InputError::ClientInit("Invalid session cookie format".to_string()))?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Issues `GET {base}/{year}/day/{day}/input` with the session cookie.
    ///
    /// # Errors
    ///
    /// * `InputError::Request` - Network error
    /// * `InputError::InvalidStatus` - Non-2xx response (e.g., 404 before the puzzle unlocks)
    /// * `InputError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, InputError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| InputError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[year.to_string().as_str(), "day", day.to_string().as_str(), "input"]);

        tracing::debug!(%url, "requesting puzzle input");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(InputError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| InputError::Encoding)
    }
}

/// Builder for configuring an [`InputClient`]
///
/// The redirect policy is always forced to none: an expired session answers
/// with a redirect, which must surface as a status error rather than a page body.
///
/// # Example
///
/// ```no_run
/// use advent_input::InputClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = InputClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InputClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl InputClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL for the client
    ///
    /// The URL is parsed and validated here, so mistakes surface before any request.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, InputError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    pub fn build(self) -> Result<InputClient, InputError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| InputError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| InputError::ClientInit(e.to_string()))?;

        Ok(InputClient { client, base_url })
    }
}
