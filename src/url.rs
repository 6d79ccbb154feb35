//! Snowflake endpoint URL parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, error};

use crate::error::{UrlError, UrlResult};

/// Accepted endpoint grammar, matched against the trimmed, lower-cased input.
///
/// Optional `http://` or `https://` prefix, an alphanumeric account label
/// followed by two or more alphanumeric-or-hyphen labels, an optional
/// `:port`, and at most one trailing slash.
static ENDPOINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<scheme>https?)://)?(?P<host>(?P<account>[a-z0-9]+)(?:\.[a-z0-9-]+){2,})(?::(?P<port>[0-9]+))?/?$",
    )
    .unwrap()
});

/// A validated Snowflake endpoint.
///
/// Produced by [`SnowflakeUrl::parse`] from a raw endpoint string such as
/// `https://myaccount.us-east-1.snowflakecomputing.com:443`. Immutable once
/// constructed; every accessor is an infallible projection of the validated
/// state, and the value is safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnowflakeUrl {
    use_ssl: bool,
    host: String,
    account: String,
    port: u16,
    jdbc_url: String,
}

impl SnowflakeUrl {
    /// Parse and validate a raw endpoint string.
    ///
    /// The input is trimmed and lower-cased before matching, so parsing is
    /// case-insensitive. The scheme is optional and defaults to `https`;
    /// the port is optional and defaults to 443 (https) or 80 (http).
    /// The host must have at least three dot-separated labels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snowflake_url::SnowflakeUrl;
    ///
    /// let url = SnowflakeUrl::parse("https://myaccount.us-east-1.snowflakecomputing.com")?;
    /// assert_eq!(url.account(), "myaccount");
    /// assert_eq!(url.port(), 443);
    /// # Ok::<(), snowflake_url::UrlError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Invalid`] naming the original input if it does
    /// not match the accepted grammar. There is no partially constructed
    /// result.
    pub fn parse(raw: &str) -> UrlResult<Self> {
        let normalized = raw.trim().to_lowercase();
        match Self::from_normalized(&normalized) {
            Some(url) => {
                debug!(url = %raw, host = %url.host, port = url.port, "parsed Snowflake URL");
                Ok(url)
            }
            None => {
                error!(url = %raw, "invalid Snowflake URL");
                Err(UrlError::invalid(raw))
            }
        }
    }

    /// Match the normalized input and derive all fields, or reject.
    fn from_normalized(normalized: &str) -> Option<Self> {
        let caps = ENDPOINT_RE.captures(normalized)?;

        let use_ssl = caps.name("scheme").map_or(true, |m| m.as_str() != "http");
        let host = caps["host"].to_string();
        let account = caps["account"].to_string();
        let port = match caps.name("port") {
            // A digit run that overflows u16 is a malformed port.
            Some(digits) => digits.as_str().parse::<u16>().ok()?,
            None if use_ssl => 443,
            None => 80,
        };
        let jdbc_url = format!("jdbc:snowflake://{}:{}", host, port);

        Some(Self {
            use_ssl,
            host,
            account,
            port,
            jdbc_url,
        })
    }

    /// Get the JDBC connection string (`jdbc:snowflake://host:port`).
    ///
    /// The prefix and layout are a compatibility contract with the
    /// downstream JDBC driver.
    pub fn jdbc_url(&self) -> &str {
        &self.jdbc_url
    }

    /// Get the account identifier (the first host label).
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Check whether the endpoint uses SSL.
    ///
    /// True unless the input declared `http://`; an absent scheme defaults
    /// to SSL.
    pub fn ssl_enabled(&self) -> bool {
        self.use_ssl
    }

    /// Get the scheme name: `"https"` when SSL is enabled, else `"http"`.
    pub fn scheme(&self) -> &'static str {
        if self.use_ssl { "https" } else { "http" }
    }

    /// Get the host with its port, as `host:port`.
    pub fn full_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the host without the port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Reconstruct the canonical URL form, `scheme://host:port`.
    ///
    /// Parsing the result yields an identical value.
    pub fn to_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }
}

impl fmt::Display for SnowflakeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for SnowflakeUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> UrlResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SnowflakeUrl {
    type Error = UrlError;

    fn try_from(s: &str) -> UrlResult<Self> {
        Self::parse(s)
    }
}

impl Serialize for SnowflakeUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_url())
    }
}

impl<'de> Deserialize<'de> for SnowflakeUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
