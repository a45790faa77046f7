// URL value object with builder-style setters

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::UrlError;

/// Components used to build a [`Url`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl UrlParts {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

impl Default for UrlParts {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: String::new(),
            port: None,
            path: "/".to_string(),
            query: None,
            fragment: None,
        }
    }
}

/// An absolute URL.
///
/// Setters consume the value and return the updated URL, so calls chain:
/// `Url::parse(s)?.with_fragment("top").with_query_param("q", "rust")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    inner: url::Url,
}

impl Url {
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        Ok(Self {
            inner: url::Url::parse(input)?,
        })
    }

    pub fn from_parts(parts: UrlParts) -> Result<Self, UrlError> {
        let mut url = Self::parse(&format!("{}://{}", parts.scheme, parts.host))?;
        if let Some(port) = parts.port {
            url = url.with_port(port)?;
        }
        url = url.with_path(&parts.path);
        if let Some(query) = &parts.query {
            url = url.with_query(query);
        }
        if let Some(fragment) = &parts.fragment {
            url = url.with_fragment(fragment);
        }
        Ok(url)
    }

    pub fn parts(&self) -> UrlParts {
        UrlParts {
            scheme: self.scheme().to_string(),
            host: self.host().unwrap_or_default().to_string(),
            port: self.port(),
            path: self.path().to_string(),
            query: self.query().map(str::to_string),
            fragment: self.fragment().map(str::to_string),
        }
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.inner.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.inner.host_str()
    }

    pub fn domain(&self) -> Option<&str> {
        self.host()
    }

    /// Explicit port, or the scheme's default (80 for http)
    pub fn port(&self) -> Option<u16> {
        self.inner.port_or_known_default()
    }

    pub fn path(&self) -> &str {
        self.inner.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.inner.query()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.inner.fragment()
    }

    /// Non-empty path segments, still percent-encoded
    pub fn path_segments(&self) -> Vec<&str> {
        self.path().split('/').filter(|s| !s.is_empty()).collect()
    }

    pub fn path_segment(&self, index: usize) -> Option<&str> {
        self.path_segments().get(index).copied()
    }

    pub fn path_segment_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.path_segment(index).unwrap_or(default)
    }

    /// Decoded query parameters; repeated keys keep every value
    pub fn query_params(&self) -> HashMap<String, Vec<String>> {
        parse_query(self.query().unwrap_or_default())
    }

    /// First decoded value for `name`
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.inner
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    pub fn query_param_or(&self, name: &str, default: &str) -> String {
        self.query_param(name)
            .unwrap_or_else(|| default.to_string())
    }

    /// Host labels, e.g. `["www", "google", "com"]`
    pub fn subdomains(&self) -> Vec<&str> {
        self.host()
            .map(|host| host.split('.').collect())
            .unwrap_or_default()
    }

    pub fn subdomain(&self, index: usize) -> Option<&str> {
        self.subdomains().get(index).copied()
    }

    pub fn with_scheme(mut self, scheme: &str) -> Result<Self, UrlError> {
        self.inner
            .set_scheme(scheme)
            .map_err(|_| UrlError::InvalidComponent(format!("scheme '{}'", scheme)))?;
        Ok(self)
    }

    pub fn with_host(mut self, host: &str) -> Result<Self, UrlError> {
        self.inner.set_host(Some(host))?;
        Ok(self)
    }

    pub fn with_port(mut self, port: u16) -> Result<Self, UrlError> {
        self.inner
            .set_port(Some(port))
            .map_err(|_| UrlError::InvalidComponent(format!("port {}", port)))?;
        Ok(self)
    }

    /// Relative paths are rooted: `search` becomes `/search`
    pub fn with_path(mut self, path: &str) -> Self {
        self.inner.set_path(path);
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.inner.set_query(Some(query));
        self
    }

    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.inner.set_fragment(Some(fragment));
        self
    }

    /// Replace one path segment, keeping a trailing slash if there was one
    pub fn with_path_segment(self, index: usize, value: &str) -> Result<Self, UrlError> {
        let mut segments = self.path_segments();
        let len = segments.len();
        let slot = segments
            .get_mut(index)
            .ok_or(UrlError::PathSegmentOutOfRange { index, len })?;
        *slot = value;

        let mut path = format!("/{}", segments.join("/"));
        if self.path().ends_with('/') {
            path.push('/');
        }
        Ok(self.with_path(&path))
    }

    /// Set `name` to a single value, dropping any existing values for it
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        let mut pairs: Vec<(String, String)> = self
            .inner
            .query_pairs()
            .into_owned()
            .filter(|(key, _)| key != name)
            .collect();
        pairs.push((name.to_string(), value.to_string()));

        self.inner.query_pairs_mut().clear().extend_pairs(pairs);
        self
    }

    /// Replace the whole query string with `params`
    pub fn with_query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.inner.query_pairs_mut().clear().extend_pairs(params);
        self
    }

    pub fn with_subdomain(self, index: usize, value: &str) -> Result<Self, UrlError> {
        let mut labels = self.subdomains();
        let len = labels.len();
        let slot = labels
            .get_mut(index)
            .ok_or(UrlError::SubdomainOutOfRange { index, len })?;
        *slot = value;

        let host = labels.join(".");
        self.with_host(&host)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner.as_str())
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a query string into decoded values grouped by key
pub fn parse_query(query: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_groups_repeated_keys() {
        let params = parse_query("a=1&b=2&a=3");
        assert_eq!(params["a"], vec!["1", "3"]);
        assert_eq!(params["b"], vec!["2"]);
    }

    #[test]
    fn test_parse_query_decodes_values() {
        let params = parse_query("next=http%3A%2F%2Fexample.com%2F&q=a+b");
        assert_eq!(params["next"], vec!["http://example.com/"]);
        assert_eq!(params["q"], vec!["a b"]);
    }

    #[test]
    fn test_parse_query_empty() {
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_url_parts_defaults() {
        let parts = UrlParts::new("example.com");
        assert_eq!(parts.scheme, "http");
        assert_eq!(parts.path, "/");
        assert!(parts.port.is_none());
    }

    #[test]
    fn test_parts_roundtrip() {
        let url = Url::parse("https://example.com:8443/a/b?x=1#top").unwrap();
        let parts = url.parts();
        assert_eq!(parts.port, Some(8443));
        assert_eq!(parts.query.as_deref(), Some("x=1"));
        assert_eq!(Url::from_parts(parts).unwrap(), url);
    }

    #[test]
    fn test_from_parts_requires_host() {
        let result = Url::from_parts(UrlParts::default());
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_path_segment_out_of_range() {
        let url = Url::parse("http://example.com/a").unwrap();
        let result = url.with_path_segment(3, "x");
        assert_eq!(
            result.unwrap_err(),
            UrlError::PathSegmentOutOfRange { index: 3, len: 1 }
        );
    }

    #[test]
    fn test_with_query_param_replaces_existing_values() {
        let url = Url::parse("http://example.com/?a=1&b=2&a=3")
            .unwrap()
            .with_query_param("a", "9");
        assert_eq!(url.query(), Some("b=2&a=9"));
    }

    #[test]
    fn test_url_serializes_parts_as_json() {
        let url = Url::parse("http://example.com/search").unwrap();
        let json = serde_json::to_string(&url.parts()).unwrap();
        assert!(json.contains("\"host\":\"example.com\""));
        assert!(json.contains("\"port\":80"));
        assert!(!json.contains("\"fragment\""));
    }
}
