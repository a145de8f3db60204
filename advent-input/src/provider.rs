//! Cache-first input resolution

use crate::cache::InputCache;
use crate::client::InputClient;
use crate::error::InputError;
use zeroize::Zeroizing;

/// Resolves puzzle inputs from the local cache, fetching and persisting misses
pub struct InputProvider {
    cache: InputCache,
    client: InputClient,
    session: Option<Zeroizing<String>>,
}

impl InputProvider {
    /// Create a provider; without a session only cached inputs resolve
    pub fn new(cache: InputCache, client: InputClient, session: Option<Zeroizing<String>>) -> Self {
        Self {
            cache,
            client,
            session,
        }
    }

    /// The cache backing this provider
    pub fn cache(&self) -> &InputCache {
        &self.cache
    }

    /// Return the input for a puzzle
    ///
    /// A cache hit never touches the network. A miss requires a session, and a
    /// fetched input is written back to the cache; failing to write it back is
    /// logged and does not fail the call.
    ///
    /// # Errors
    ///
    /// * `InputError::MissingSession` - Not cached and no session configured
    /// * `InputError::Cache` - The cached file exists but cannot be read
    /// * Any [`InputClient::get_input`] error
    pub fn resolve(&self, year: u16, day: u8) -> Result<String, InputError> {
        if let Some(input) = self.cache.get(year, day)? {
            tracing::debug!(year, day, "input cache hit");
            return Ok(input);
        }

        let session = self
            .session
            .as_ref()
            .ok_or(InputError::MissingSession { year, day })?;

        tracing::info!(year, day, "fetching puzzle input");
        let input = self.client.get_input(year, day, session)?;

        if let Err(err) = self.cache.put(year, day, &input) {
            let path = self.cache.cache_path(year, day);
            tracing::warn!(
                year,
                day,
                path = %path.display(),
                error = %err,
                "failed to cache puzzle input"
            );
        }

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn client_for(server: &mockito::Server) -> InputClient {
        InputClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_cache_hit_skips_network() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        cache.put(2022, 12, "Sabqponm\n").unwrap();

        let mut server = mockito::Server::new();
        let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

        let provider = InputProvider::new(cache, client_for(&server), None);
        assert_eq!(provider.resolve(2022, 12).unwrap(), "Sabqponm\n");
        mock.assert();
    }

    #[test]
    fn test_fetch_persists_to_cache() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2022/day/6/input")
            .match_header("cookie", "session=secret")
            .with_status(200)
            .with_body("mjqjpqmgbljsphdztnvjfqwrcgsmlb\n")
            .expect(1)
            .create();

        let provider = InputProvider::new(
            InputCache::new(temp.path()),
            client_for(&server),
            Some(Zeroizing::new("secret".to_string())),
        );

        let input = provider.resolve(2022, 6).unwrap();
        assert_eq!(input, "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n");
        assert_eq!(
            fs::read_to_string(temp.path().join("2022_day06.txt")).unwrap(),
            input
        );

        // Second call is served from the cache
        assert_eq!(provider.resolve(2022, 6).unwrap(), input);
        mock.assert();
    }

    #[test]
    fn test_missing_session_on_cache_miss() {
        let temp = TempDir::new().unwrap();
        let server = mockito::Server::new();
        let provider = InputProvider::new(InputCache::new(temp.path()), client_for(&server), None);

        let err = provider.resolve(2022, 3).unwrap_err();
        assert!(matches!(err, InputError::MissingSession { year: 2022, day: 3 }));
        assert!(err.to_string().contains("AOC_SESSION"));
    }

    #[test]
    fn test_cache_write_failure_still_returns_input() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/2022/day/1/input")
            .with_status(200)
            .with_body("1000\n")
            .create();

        let provider = InputProvider::new(
            InputCache::new(&blocker),
            client_for(&server),
            Some(Zeroizing::new("secret".to_string())),
        );

        assert_eq!(provider.resolve(2022, 1).unwrap(), "1000\n");
    }

    #[test]
    fn test_fetch_error_propagates() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/2022/day/25/input").with_status(404).create();

        let provider = InputProvider::new(
            InputCache::new(temp.path()),
            client_for(&server),
            Some(Zeroizing::new("secret".to_string())),
        );

        assert!(matches!(
            provider.resolve(2022, 25),
            Err(InputError::InvalidStatus { .. })
        ));
        assert!(!provider.cache().contains(2022, 25));
    }
}
