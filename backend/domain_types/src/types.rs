use serde::Deserialize;

/// Endpoint parameters for every connector the service can reach.
#[derive(Debug, Clone, Deserialize)]
pub struct Connectors {
    pub vnpay: ConnectorParams,
}

/// Endpoint parameters for a single connector.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorParams {
    /// base url
    #[serde(default)]
    pub base_url: String,
}
