// Error handling for purl
//
// Template expansion never fails; only the URL value object reports errors.

use std::fmt;

/// URL construction and mutation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    Parse(String),
    InvalidComponent(String),
    PathSegmentOutOfRange { index: usize, len: usize },
    SubdomainOutOfRange { index: usize, len: usize },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::Parse(msg) => write!(f, "Invalid URL: {}", msg),
            UrlError::InvalidComponent(msg) => write!(f, "Invalid URL component: {}", msg),
            UrlError::PathSegmentOutOfRange { index, len } => write!(
                f,
                "Path segment index {} out of range ({} segments)",
                index, len
            ),
            UrlError::SubdomainOutOfRange { index, len } => write!(
                f,
                "Subdomain index {} out of range ({} labels)",
                index, len
            ),
        }
    }
}

impl std::error::Error for UrlError {}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::Parse(err.to_string())
    }
}
