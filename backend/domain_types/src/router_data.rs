use common_utils::Secret;

/// Credentials a connector needs to talk to its gateway.
#[derive(Debug, Clone, Default)]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    SignatureKey {
        api_key: Secret<String>,
        key1: Secret<String>,
        api_secret: Secret<String>,
    },
    #[default]
    NoKey,
}

/// Per-call context handed to a connector: auth material plus the
/// flow-specific request payload.
#[derive(Debug, Clone)]
pub struct RouterData<Req> {
    pub connector_auth_type: ConnectorAuthType,
    pub request: Req,
}
