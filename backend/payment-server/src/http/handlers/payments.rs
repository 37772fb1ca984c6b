use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use connector_integration::connectors::vnpay::constants as vnpay_constants;
use domain_types::connector_types::{
    PaymentCallbackStatus, PaymentsCallbackData, PaymentsRedirectData,
};
use domain_types::router_data::RouterData;
use serde::{Deserialize, Serialize};

use crate::error::ReportSwitchExt;
use crate::http::{error::HttpError, state::AppState, utils};
use crate::logger;

#[derive(Debug, Deserialize)]
pub struct CreatePaymentQuery {
    pub amount: i64,
    pub order_info: String,
    pub return_url: Option<String>,
}

/// Build a signed gateway redirect URL for a checkout attempt. The response
/// body is the URL itself; the caller redirects the customer's browser and
/// records the order locally.
pub async fn create_payment(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<CreatePaymentQuery>,
) -> Result<String, HttpError> {
    if query.order_info.trim().is_empty() {
        return Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: "order_info must not be empty".to_string(),
        });
    }

    let return_url = query
        .return_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| state.config.vnpay.return_url.clone());

    let router_data = RouterData {
        connector_auth_type: state.config.vnpay.connector_auth_type(),
        request: PaymentsRedirectData {
            amount: query.amount,
            order_info: query.order_info,
            return_url,
            ip_address: utils::client_ip(&headers, peer),
        },
    };

    let response = state
        .vnpay
        .build_payment_url(&router_data, &state.config.connectors)
        .switch()
        .map_err(HttpError::from)?;

    logger::info!(txn_ref = %response.txn_ref, "created payment redirect");

    Ok(response.redirect_url)
}

#[derive(Debug, Serialize)]
pub struct PaymentReturnResponse {
    pub status: PaymentCallbackStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_ref: Option<String>,
}

/// Verify the gateway's return redirect and classify the outcome.
///
/// Always HTTP 200 for well-formed input: `FAILED` and `INVALID` are
/// expected outcomes the storefront must branch on, not transport errors.
pub async fn payment_return(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaymentReturnResponse>, HttpError> {
    let txn_ref = params.get(vnpay_constants::TXN_REF_PARAM).cloned();
    let transaction_status = params
        .get(vnpay_constants::TRANSACTION_STATUS_PARAM)
        .cloned()
        .unwrap_or_default();

    let router_data = RouterData {
        connector_auth_type: state.config.vnpay.connector_auth_type(),
        request: PaymentsCallbackData { params },
    };

    let status = state
        .vnpay
        .verify_redirect_response(&router_data)
        .switch()
        .map_err(HttpError::from)?;

    let message = match status {
        PaymentCallbackStatus::Invalid => "Signature verification failed".to_string(),
        _ => vnpay_constants::transaction_status_message(&transaction_status).to_string(),
    };

    logger::info!(%status, txn_ref = ?txn_ref, "processed payment return");

    Ok(Json(PaymentReturnResponse {
        status,
        message,
        txn_ref,
    }))
}
