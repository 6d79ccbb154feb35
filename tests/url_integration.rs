//! Integration tests for Snowflake endpoint URL parsing.
//!
//! These tests verify the end-to-end behavior of the parser:
//! - Accessor consistency on valid endpoints
//! - Scheme and port defaulting
//! - Rejection of malformed endpoints
//! - Embedding parsed URLs in serde-backed configuration

use pretty_assertions::assert_eq;
use serde::Deserialize;
use snowflake_url::{SnowflakeUrl, UrlError};

/// Test the full production-shaped endpoint
#[test]
fn test_production_endpoint() {
    let url = SnowflakeUrl::parse("https://myaccount.us-east-1.snowflakecomputing.com").unwrap();

    assert_eq!(url.account(), "myaccount");
    assert!(url.ssl_enabled());
    assert_eq!(url.port(), 443);
    assert_eq!(
        url.full_url(),
        "myaccount.us-east-1.snowflakecomputing.com:443"
    );
    assert_eq!(
        url.jdbc_url(),
        "jdbc:snowflake://myaccount.us-east-1.snowflakecomputing.com:443"
    );
}

/// Test that a scheme-less endpoint with explicit port stays SSL
#[test]
fn test_schemeless_endpoint_with_port() {
    let url = SnowflakeUrl::parse("myaccount.snowflakecomputing.com:8085").unwrap();

    assert!(url.ssl_enabled());
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.port(), 8085);
    assert_eq!(url.jdbc_url(), "jdbc:snowflake://myaccount.snowflakecomputing.com:8085");
}

/// Test that parsing normalizes case before matching
#[test]
fn test_case_normalization() {
    let upper = SnowflakeUrl::parse("HTTPS://MyAccount.US-East-1.SnowflakeComputing.COM").unwrap();
    let lower = SnowflakeUrl::parse("https://myaccount.us-east-1.snowflakecomputing.com").unwrap();

    assert_eq!(upper, lower);
    assert_eq!(upper.account(), "myaccount");
}

/// Test that every rejected shape reports the offending input
#[test]
fn test_rejection_reports_input() {
    for raw in ["", "abc.def", "abc.def.ghi:abc", "ssh://abc.def.ghi", "abc.def.ghi extra"] {
        let err = SnowflakeUrl::parse(raw).unwrap_err();
        let UrlError::Invalid(reported) = err;
        assert_eq!(reported, raw);
    }
}

/// Test deserializing an endpoint inside a TOML configuration
#[test]
fn test_endpoint_in_toml_config() {
    #[derive(Deserialize)]
    struct ConnectorConfig {
        url: SnowflakeUrl,
        warehouse: String,
    }

    let config_str = r#"
        url = "myaccount.eu-central-1.snowflakecomputing.com"
        warehouse = "LOADING"
    "#;

    let config: ConnectorConfig = toml::from_str(config_str).expect("Failed to parse config");
    assert_eq!(config.url.account(), "myaccount");
    assert_eq!(config.url.port(), 443);
    assert_eq!(config.warehouse, "LOADING");
}

/// Test that a malformed endpoint fails configuration loading
#[test]
fn test_bad_endpoint_fails_toml_config() {
    #[derive(Deserialize)]
    struct ConnectorConfig {
        #[allow(dead_code)]
        url: SnowflakeUrl,
    }

    let result: Result<ConnectorConfig, _> = toml::from_str(r#"url = "nodots""#);
    assert!(result.is_err());
}

/// Test the JSON round-trip through the canonical URL form
#[test]
fn test_json_roundtrip_keeps_scheme() {
    let url = SnowflakeUrl::parse("http://abc.def.ghi").unwrap();

    let json = serde_json::to_string(&url).unwrap();
    assert_eq!(json, r#""http://abc.def.ghi:80""#);

    let back: SnowflakeUrl = serde_json::from_str(&json).unwrap();
    assert_eq!(back, url);
    assert!(!back.ssl_enabled());
}
