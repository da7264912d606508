//! Request building, the blocking GET, and response parsing.
//!
//! # Design
//! `Client` holds the API key and endpoint and nothing else; both are
//! read-only after construction. Each operation builds a fresh request URL
//! from the stored endpoint plus encoded query pairs, so no per-call state
//! ever lands on the shared instance and one `Client` can serve concurrent
//! callers. The `*_request` / `parse_*` halves are pure; `shorten` and
//! `get_stats` wire them together around a single blocking GET.

use url::Url;

use crate::error::Error;
use crate::normalize;
use crate::status::{self, Operation};
use crate::types::{LinkInfo, ShortenResponse, Stats, StatsResponse};

/// The fixed cutt.ly API endpoint.
const ENDPOINT: &str = "https://cutt.ly/api/api.php";

/// Client for the cutt.ly API.
#[derive(Debug, Clone)]
pub struct Client {
    key: String,
    endpoint: Url,
}

impl Client {
    /// Create a client for the public cutt.ly endpoint.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_endpoint(api_key, ENDPOINT)
    }

    /// Create a client against a caller-supplied endpoint. Used by tests to
    /// target a local mock and by self-hosted gateways.
    pub fn with_endpoint(api_key: &str, endpoint: &str) -> Result<Self, Error> {
        Ok(Self {
            key: api_key.to_string(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Build the request URL for shortening `long_url`, optionally under a
    /// custom slug.
    pub fn shorten_request(&self, long_url: &str, custom_name: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.key);
            pairs.append_pair("short", long_url);
            if let Some(name) = custom_name {
                pairs.append_pair("name", name);
            }
        }
        url
    }

    /// Build the request URL for querying click statistics of `short_url`.
    pub fn stats_request(&self, short_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.key);
            pairs.append_pair("stats", short_url);
        }
        url
    }

    /// Decode a shorten response body and map its status code.
    pub fn parse_shorten(&self, body: &str) -> Result<LinkInfo, Error> {
        let response: ShortenResponse = serde_json::from_str(body).map_err(|source| {
            Error::Decode {
                op: Operation::Shorten,
                source,
            }
        })?;
        status::check(response.url.status, Operation::Shorten)?;
        Ok(response.url)
    }

    /// Decode a stats response body, map its status code and normalize the
    /// polymorphic `devices` and `refs` fields.
    pub fn parse_stats(&self, body: &str) -> Result<Stats, Error> {
        let response: StatsResponse = serde_json::from_str(body).map_err(|source| {
            Error::Decode {
                op: Operation::Stats,
                source,
            }
        })?;
        let wire = response.stats;
        status::check(wire.status, Operation::Stats)?;
        let devices = normalize::devices_from_value(&wire.devices).map_err(|source| {
            Error::Decode {
                op: Operation::Stats,
                source,
            }
        })?;
        let refs = normalize::refs_from_value(&wire.refs).map_err(|source| {
            Error::Decode {
                op: Operation::Stats,
                source,
            }
        })?;
        Ok(Stats {
            status: wire.status,
            clicks: wire.clicks,
            date: wire.date,
            title: wire.title,
            full_link: wire.full_link,
            short_link: wire.short_link,
            facebook: wire.facebook,
            twitter: wire.twitter,
            pinterest: wire.pinterest,
            instagram: wire.instagram,
            google_plus: wire.google_plus,
            linkedin: wire.linkedin,
            rest: wire.rest,
            devices,
            refs,
        })
    }

    /// Shorten `long_url`, optionally under a custom slug.
    pub fn shorten(&self, long_url: &str, custom_name: Option<&str>) -> Result<LinkInfo, Error> {
        let body = self.request(self.shorten_request(long_url, custom_name))?;
        self.parse_shorten(&body)
    }

    /// Fetch click statistics for a previously shortened link.
    pub fn get_stats(&self, short_url: &str) -> Result<Stats, Error> {
        let body = self.request(self.stats_request(short_url))?;
        self.parse_stats(&body)
    }

    /// Perform one blocking GET and return the full response body.
    ///
    /// HTTP-status-as-error is disabled: the service answers 200 and signals
    /// outcomes through the in-body status code, which the parse step maps.
    fn request(&self, url: Url) -> Result<String, Error> {
        log::debug!("GET {url}");
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let mut response = agent.get(url.as_str()).call().map_err(Error::Transport)?;
        response.body_mut().read_to_string().map_err(Error::Read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn client() -> Client {
        Client::new("test-key").unwrap()
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn shorten_request_carries_key_short_and_name() {
        let url = client().shorten_request("https://example.com", Some("ex1"));
        assert_eq!(
            query_pairs(&url),
            vec![
                ("key".to_string(), "test-key".to_string()),
                ("short".to_string(), "https://example.com".to_string()),
                ("name".to_string(), "ex1".to_string()),
            ]
        );
        assert_eq!(url.path(), "/api/api.php");
        assert_eq!(url.host_str(), Some("cutt.ly"));
    }

    #[test]
    fn shorten_request_omits_name_when_absent() {
        let url = client().shorten_request("https://example.com", None);
        assert!(query_pairs(&url).iter().all(|(k, _)| k != "name"));
    }

    #[test]
    fn shorten_request_percent_encodes_the_long_url() {
        let url = client().shorten_request("https://example.com/a b?x=1&y=2", None);
        let query = url.query().unwrap();
        assert!(!query.contains("a b"));
        let pairs = query_pairs(&url);
        assert_eq!(pairs[1].1, "https://example.com/a b?x=1&y=2");
    }

    #[test]
    fn stats_request_carries_key_and_stats() {
        let url = client().stats_request("https://cutt.ly/abc");
        assert_eq!(
            query_pairs(&url),
            vec![
                ("key".to_string(), "test-key".to_string()),
                ("stats".to_string(), "https://cutt.ly/abc".to_string()),
            ]
        );
    }

    #[test]
    fn request_building_leaves_no_state_behind() {
        let c = client();
        let first = c.shorten_request("https://first.example", Some("one"));
        let second = c.stats_request("https://cutt.ly/two");
        assert!(first.query().unwrap().contains("first.example"));
        assert!(!second.query().unwrap().contains("first.example"));
        assert!(!second.query().unwrap().contains("name"));
    }

    #[test]
    fn parse_shorten_success() {
        let body = r#"{"url":{"status":7,"fullLink":"https://example.com","date":"2024-01-05","shortLink":"https://cutt.ly/ex1","title":"Example"}}"#;
        let link = client().parse_shorten(body).unwrap();
        assert_eq!(link.status, 7);
        assert_eq!(link.short_link, "https://cutt.ly/ex1");
    }

    #[test]
    fn parse_shorten_maps_error_codes() {
        let body = r#"{"url":{"status":3}}"#;
        let err = client().parse_shorten(body).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NameTaken)));
    }

    #[test]
    fn parse_shorten_bad_json_is_a_decode_error() {
        let err = client().parse_shorten("not json").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                op: Operation::Shorten,
                ..
            }
        ));
    }

    #[test]
    fn parse_stats_with_empty_breakdowns() {
        let body = r#"{"url":{"status":1},"stats":{"status":1,"clicks":"0","date":"2024-01-05","title":"Example","fullLink":"https://example.com","shortLink":"https://cutt.ly/ex1","facebook":0,"twitter":0,"pinterest":0,"instagram":0,"googlePlus":0,"linkedin":0,"rest":0,"devices":[],"refs":[]}}"#;
        let stats = client().parse_stats(body).unwrap();
        assert_eq!(stats.clicks, "0");
        assert!(stats.devices.dev.is_empty());
        assert!(stats.devices.sys.is_empty());
        assert!(stats.devices.bro.is_empty());
        assert!(stats.refs.is_empty());
    }

    #[test]
    fn parse_stats_with_populated_breakdowns() {
        let body = r#"{"stats":{"status":1,"clicks":"42","fullLink":"https://example.com","shortLink":"https://cutt.ly/ex1","facebook":3,"googlePlus":1,"devices":{"dev":[{"tag":"Desktop","clicks":"30"},{"tag":"Mobile","clicks":"12"}],"sys":[{"tag":"Linux","clicks":"42"}],"bro":[{"tag":"Firefox","clicks":"42"}]},"refs":[{"link":"https://reddit.com/","clicks":"14"}]}}"#;
        let stats = client().parse_stats(body).unwrap();
        assert_eq!(stats.clicks, "42");
        assert_eq!(stats.facebook, 3);
        assert_eq!(stats.google_plus, 1);
        assert_eq!(stats.devices.dev.len(), 2);
        assert_eq!(stats.devices.dev[1].tag, "Mobile");
        assert_eq!(stats.refs.len(), 1);
        assert_eq!(stats.refs[0].link, "https://reddit.com/");
    }

    #[test]
    fn parse_stats_status_zero_is_unknown_link() {
        let body = r#"{"stats":{"status":0}}"#;
        let err = client().parse_stats(body).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::UnknownShortLink)));
    }

    #[test]
    fn parse_stats_bad_devices_shape_is_a_decode_error() {
        let body = r#"{"stats":{"status":1,"devices":"nonsense","refs":[]}}"#;
        let err = client().parse_stats(body).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                op: Operation::Stats,
                ..
            }
        ));
    }

    #[test]
    fn with_endpoint_rejects_garbage() {
        let err = Client::with_endpoint("test-key", "not a url").unwrap_err();
        assert!(matches!(err, Error::Endpoint(_)));
    }
}
