//! Common enumerations used by provider records.
//!
//! Both enumerations are closed: decoding fails on anything outside the
//! declared value set, and the canonical string values are the only
//! representation that appears in flat records.

use serde::{Deserialize, Serialize};

/// Where a provider runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Hosted service reached over the network.
    Cloud,
    /// Self-hosted server deployment.
    Server,
    /// Runs inside the client process.
    Client,
}

impl ProviderType {
    /// Every member, in canonical order.
    pub const ALL: [Self; 3] = [Self::Cloud, Self::Server, Self::Client];

    /// Canonical string value used in flat records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Server => "server",
            Self::Client => "client",
        }
    }

    /// Decode a provider type from its canonical string value.
    ///
    /// Returns `None` for anything outside the value set.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "cloud" => Some(Self::Cloud),
            "server" => Some(Self::Server),
            "client" => Some(Self::Client),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How requests to a provider are authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestAuthenticationMethod {
    /// Provider-issued API key, usually sent as a header.
    ApiKey,
    /// HTTP Basic authentication.
    Basic,
    /// Bearer token in the `Authorization` header.
    Bearer,
    /// OAuth 2.0 authorization flow.
    #[serde(rename = "oauth2")]
    OAuth2,
}

impl RequestAuthenticationMethod {
    /// Every member, in canonical order.
    pub const ALL: [Self; 4] = [Self::ApiKey, Self::Basic, Self::Bearer, Self::OAuth2];

    /// Canonical string value used in flat records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::Basic => "basic",
            Self::Bearer => "bearer",
            Self::OAuth2 => "oauth2",
        }
    }

    /// Decode an authentication method from its canonical string value.
    ///
    /// Returns `None` for anything outside the value set.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "api_key" => Some(Self::ApiKey),
            "basic" => Some(Self::Basic),
            "bearer" => Some(Self::Bearer),
            "oauth2" => Some(Self::OAuth2),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestAuthenticationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
