// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub REST API.
//
// Strategy:
// - Build https://api.github.com/users/{username}/events (the base URL can be
//   changed with --api-url)
// - Send one unauthenticated GET with the GitHub v3 Accept header
// - Treat any non-2xx status as an error carrying the status code
// - Decode the body as a JSON array of events
//
// Only the first page is requested. There is no retry and no timeout: the
// request waits until the network layer answers or fails.
//
// Rust concepts:
// - async functions: For network I/O
// - thiserror: For a typed error enum with readable messages
// - Url path segments: To escape the username safely
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::event::Event;

/// Sent as the User-Agent header (GitHub rejects requests without one)
pub const USER_AGENT: &str = "GitHubActivityCLI";

/// Media type for version 3 of the GitHub REST API
pub const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

// Everything that can go wrong while fetching the feed
//
// The #[error(...)] strings are what users see on stderr
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete (DNS, connection refused, TLS, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a status outside 200-299
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of events
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    /// The configured API URL can't have path segments (e.g. "mailto:...")
    #[error("cannot build an events URL from API base {0}")]
    BaseUrl(Url),
}

// Fetches event feeds from one GitHub API host
//
// Holds a single reqwest Client so the User-Agent is set once.
#[derive(Debug, Clone)]
pub struct EventFetcher {
    client: Client,
    api_base: Url,
}

impl EventFetcher {
    // Creates a fetcher for the given API base (normally https://api.github.com)
    //
    // Fails only if reqwest can't initialise its TLS backend
    pub fn new(api_base: Url) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, api_base })
    }

    // Builds {api_base}/users/{username}/events
    //
    // The username is pushed as one path segment, so characters like '/' or
    // '?' are percent-encoded instead of changing the URL structure.
    pub fn events_url(&self, username: &str) -> Result<Url, FetchError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::BaseUrl(self.api_base.clone()))?
            .pop_if_empty()
            .extend(["users", username, "events"]);
        Ok(url)
    }

    // Fetches the first page of public events for `username`
    //
    // Returns: events in the order GitHub sent them (newest first)
    pub async fn fetch_user_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let url = self.events_url(username)?;
        tracing::debug!(%url, "requesting event feed");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_V3_JSON)
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "event feed responded");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let events: Vec<Event> = serde_json::from_str(&body)?;
        tracing::info!(count = events.len(), "decoded event feed");

        Ok(events)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why thiserror here and anyhow in main.rs?
//    - FetchError is matched on by callers and tests (Status { status: 404 })
//    - main.rs only needs to print whatever went wrong, which is anyhow's job
//
// 2. What does #[from] do?
//    - It generates From<reqwest::Error> for FetchError
//    - That is what lets `.send().await?` convert the error automatically
//
// 3. Why read the body as text before decoding?
//    - response.json() would report a bad body as a reqwest::Error
//    - Decoding with serde_json ourselves keeps "bad JSON" as its own variant
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Activity;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> EventFetcher {
        EventFetcher::new(Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[test]
    fn test_events_url_default_host() {
        let fetcher = EventFetcher::new(Url::parse("https://api.github.com").unwrap()).unwrap();
        let url = fetcher.events_url("octocat").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/events");
    }

    #[test]
    fn test_events_url_keeps_base_path() {
        let base = Url::parse("https://github.example.com/api/v3/").unwrap();
        let fetcher = EventFetcher::new(base).unwrap();
        let url = fetcher.events_url("octocat").unwrap();
        assert_eq!(url.as_str(), "https://github.example.com/api/v3/users/octocat/events");
    }

    #[test]
    fn test_events_url_escapes_username() {
        let fetcher = EventFetcher::new(Url::parse("https://api.github.com").unwrap()).unwrap();
        let url = fetcher.events_url("a/b?c").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/a%2Fb%3Fc/events");
    }

    #[test]
    fn test_events_url_rejects_cannot_be_a_base() {
        let fetcher = EventFetcher::new(Url::parse("mailto:someone@example.com").unwrap()).unwrap();
        assert!(matches!(fetcher.events_url("octocat"), Err(FetchError::BaseUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_sends_github_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .and(header("user-agent", USER_AGENT))
            .and(header("accept", GITHUB_V3_JSON))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "type": "WatchEvent", "repo": { "name": "octocat/Hello-World" }, "payload": { "action": "started" } },
                { "type": "ForkEvent", "repo": { "name": "foo/bar" }, "payload": {} }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let events = fetcher_for(&server).fetch_user_events("octocat").await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].repo, "octocat/Hello-World");
        assert_eq!(events[0].activity, Activity::Watch);
        assert_eq!(events[1].activity, Activity::Fork);
    }

    #[tokio::test]
    async fn test_fetch_not_found_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/nobody/events"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch_user_events("nobody").await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404 }));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_array_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events": [] })))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch_user_events("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::Body(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch_user_events("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::Body(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Bind a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
        drop(listener);

        let fetcher = EventFetcher::new(base).unwrap();
        let err = fetcher.fetch_user_events("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
