//! Configuration loading and representation.
//!
//! Everything is read from environment variables once at startup and passed
//! to constructors as plain structs. `from_lookup` takes the variable source
//! as a closure so tests don't touch the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_MOVIE_INFO_URL: &str = "http://localhost:8080/v1/movieinfos";
pub const DEFAULT_REVIEWS_URL: &str = "http://localhost:8081/v1/reviews";
pub const DEFAULT_PEER_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Listener and storage settings shared by every service binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
}

impl ServiceConfig {
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, env_lookup)
    }

    pub fn from_lookup(
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(v) => v
                .parse()
                .map_err(|e| ConfigError::invalid("BIND_ADDR", &v, e))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|e| ConfigError::invalid("PORT", &v, e))?,
            None => default_port,
        };

        Ok(Self {
            bind_addr,
            port,
            database_url: lookup("DATABASE_URL"),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Where the aggregator finds its peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerConfig {
    /// Movie info collection endpoint; `/{id}` is appended per lookup.
    pub movie_info_base_url: Url,
    /// Review collection endpoint; `?movieInfoId={id}` is appended per lookup.
    pub reviews_base_url: Url,
    /// Per-request timeout for outbound calls.
    pub timeout: Duration,
}

impl PeerConfig {
    pub fn new(movie_info_base_url: Url, reviews_base_url: Url) -> Self {
        Self {
            movie_info_base_url,
            reviews_base_url,
            timeout: DEFAULT_PEER_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let movie_info_base_url = parse_base_url(
            "MOVIE_INFO_URL",
            lookup("MOVIE_INFO_URL").as_deref().unwrap_or(DEFAULT_MOVIE_INFO_URL),
        )?;
        let reviews_base_url = parse_base_url(
            "REVIEWS_URL",
            lookup("REVIEWS_URL").as_deref().unwrap_or(DEFAULT_REVIEWS_URL),
        )?;
        let timeout = match lookup("PEER_TIMEOUT_MS") {
            Some(v) => {
                let ms: u64 = v
                    .parse()
                    .map_err(|e| ConfigError::invalid("PEER_TIMEOUT_MS", &v, e))?;
                if ms == 0 {
                    return Err(ConfigError::invalid("PEER_TIMEOUT_MS", &v, "must be greater than zero"));
                }
                Duration::from_millis(ms)
            }
            None => DEFAULT_PEER_TIMEOUT,
        };

        Ok(Self {
            movie_info_base_url,
            reviews_base_url,
            timeout,
        })
    }

    /// Shared HTTP client for both peers, with the configured timeout.
    pub fn build_http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}

fn parse_base_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::invalid(var, value, e))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::invalid(var, value, "expected an http(s) base url"));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn service_defaults() {
        let cfg = ServiceConfig::from_lookup(8081, lookup(&[])).unwrap();
        assert_eq!(cfg.socket_addr(), "0.0.0.0:8081".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.database_url, None);
    }

    #[test]
    fn service_overrides() {
        let cfg = ServiceConfig::from_lookup(
            8080,
            lookup(&[
                ("BIND_ADDR", "127.0.0.1"),
                ("PORT", "9000"),
                ("DATABASE_URL", "postgres://localhost/movies"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.socket_addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/movies"));
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = ServiceConfig::from_lookup(8080, lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn peer_defaults() {
        let cfg = PeerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.movie_info_base_url.as_str(), DEFAULT_MOVIE_INFO_URL);
        assert_eq!(cfg.reviews_base_url.as_str(), DEFAULT_REVIEWS_URL);
        assert_eq!(cfg.timeout, DEFAULT_PEER_TIMEOUT);
    }

    #[test]
    fn peer_overrides() {
        let cfg = PeerConfig::from_lookup(lookup(&[
            ("MOVIE_INFO_URL", "http://info:9000/v1/movieinfos"),
            ("REVIEWS_URL", "https://reviews.internal/v1/reviews"),
            ("PEER_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(cfg.movie_info_base_url.host_str(), Some("info"));
        assert_eq!(cfg.reviews_base_url.scheme(), "https");
        assert_eq!(cfg.timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_non_http_urls_and_zero_timeout() {
        let err = PeerConfig::from_lookup(lookup(&[("REVIEWS_URL", "mailto:x@y.z")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "REVIEWS_URL", .. }));

        let err = PeerConfig::from_lookup(lookup(&[("PEER_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PEER_TIMEOUT_MS", .. }));
    }
}
