use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EndpointError {
    #[error("API base URL is empty")]
    Empty,
    #[error("invalid API base URL: {0}")]
    Invalid(String),
    #[error("API base URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Validated base URL of the assessment service, stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// # Errors
    ///
    /// Returns `EndpointError` if the value is blank, unparsable, or not http(s).
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }
        let url = Url::parse(trimmed).map_err(|err| EndpointError::Invalid(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a path such as `/assessment/start` onto the base.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}
