//! # snowflake-url
//!
//! Parsing and validation of Snowflake endpoint URLs.
//!
//! This crate provides:
//! - A strict grammar check for endpoint strings (optional `http`/`https`
//!   scheme, a dotted host of at least three labels, optional port)
//! - A normalized, immutable [`SnowflakeUrl`] value with read-only accessors
//! - The derived JDBC connection string expected by the Snowflake driver
//!
//! ## Example
//!
//! ```rust
//! use snowflake_url::SnowflakeUrl;
//!
//! let url = SnowflakeUrl::parse("https://myaccount.us-east-1.snowflakecomputing.com")?;
//!
//! assert_eq!(url.account(), "myaccount");
//! assert_eq!(url.port(), 443);
//! assert!(url.ssl_enabled());
//! assert_eq!(
//!     url.jdbc_url(),
//!     "jdbc:snowflake://myaccount.us-east-1.snowflakecomputing.com:443"
//! );
//! # Ok::<(), snowflake_url::UrlError>(())
//! ```

pub mod error;
pub mod url;

pub use error::{UrlError, UrlResult};
pub use url::SnowflakeUrl;
