//! Request and response payloads for the hosted-checkout flows.

use std::collections::HashMap;

use serde::Serialize;

/// Inputs for building a hosted-checkout redirect.
#[derive(Debug, Clone)]
pub struct PaymentsRedirectData {
    /// Order amount in major currency units.
    pub amount: i64,
    /// Free-text order description shown on the gateway checkout page.
    pub order_info: String,
    /// Where the gateway sends the customer's browser afterwards. Already
    /// resolved against the configured default by the caller.
    pub return_url: String,
    /// Client address forwarded to the gateway.
    pub ip_address: String,
}

/// Redirect produced for a payment attempt. Nothing is persisted here; the
/// caller records `txn_ref` against its local order if it wants to correlate
/// the eventual callback.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentsRedirectResponse {
    pub redirect_url: String,
    /// Merchant order reference embedded in the signed payload.
    pub txn_ref: String,
}

/// Query parameters echoed back by the gateway on the return redirect,
/// already percent-decoded by the query parser.
#[derive(Debug, Clone, Default)]
pub struct PaymentsCallbackData {
    pub params: HashMap<String, String>,
}

/// Outcome of verifying a gateway return callback.
///
/// Three-way on purpose: a forged or corrupted callback (`Invalid`) must
/// never be handled like a genuine declined transaction (`Failed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentCallbackStatus {
    Success,
    Failed,
    Invalid,
}
